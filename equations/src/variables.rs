use crate::{DifficultyLevel, EquationError, Result};

pub const ALPHABET_LEN: usize = 26;

/// The hidden solution of one system together with its coefficient matrix.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VariableSet {
    pub count: usize,
    pub level: DifficultyLevel,
    /// Variable names in the order their terms appear on every row.
    pub names: Vec<char>,
    /// `values[i]` is the value of `names[i]`.
    pub values: Vec<i64>,
    /// Row-major `count * count` matrix.
    pub coefficients: Vec<i64>,
}

/// `count` consecutive lowercase letters starting `offset` letters after 'a',
/// wrapping from 'z' back to 'a'.
pub fn variable_names(offset: usize, count: usize) -> Result<Vec<char>> {
    if count > ALPHABET_LEN {
        return Err(EquationError::TooManyVariables(count));
    }
    Ok((0..count)
        .map(|i| {
            let letter = ((offset + i) % ALPHABET_LEN) as u8;
            char::from(b'a' + letter)
        })
        .collect())
}

/// Exact dot product of two equally long rows.
pub fn dot(coefficients: &[i64], values: &[i64]) -> Result<i64> {
    coefficients.iter().zip(values).try_fold(0_i64, |sum, (c, v)| {
        c.checked_mul(*v)
            .and_then(|product| sum.checked_add(product))
            .ok_or_else(|| EquationError::Overflow(format!("{coefficients:?} . {values:?}")))
    })
}

/// Generates a variable set from a freshly seeded random source.
pub fn generate(count: usize, level: DifficultyLevel) -> Result<VariableSet> {
    generate_with(&mut fastrand::Rng::new(), count, level)
}

pub fn generate_with(rng: &mut fastrand::Rng, count: usize, level: DifficultyLevel) -> Result<VariableSet> {
    if count == 0 {
        return Err(EquationError::InvalidCount { what: "variable count", got: 0 });
    }
    let offset = level.naming().pick_offset(rng);
    let names = variable_names(offset, count)?;
    let (min, max) = level.range();
    let values = (0..count).map(|_| rng.i64(min..=max)).collect();
    let coefficients = (0..count * count).map(|_| rng.i64(min..=max)).collect();

    log::debug!("generated {count} variables at level {level} starting at '{}'", names[0]);
    Ok(VariableSet { count, level, names, values, coefficients })
}

impl VariableSet {
    pub fn value_of(&self, name: char) -> Option<i64> {
        self.names.iter().position(|n| *n == name).and_then(|i| self.values.get(i).copied())
    }

    pub fn coefficient(&self, row: usize, col: usize) -> Option<i64> {
        if col >= self.count {
            return None;
        }
        self.coefficients.get(row * self.count + col).copied()
    }

    /// Coefficients of one row, in name order.
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        self.coefficients.get(row * self.count..(row + 1) * self.count)
    }

    /// Exact right-hand side of a row: its coefficients dotted with the values.
    pub fn rhs(&self, row: usize) -> Result<i64> {
        let coefficients = self
            .row(row)
            .ok_or_else(|| EquationError::DimensionMismatch(format!("row {} of {} doesn't exist", row + 1, self.count)))?;
        dot(coefficients, &self.values)
    }

    /// Checks that names, values and coefficients all agree with `count`.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(EquationError::InvalidCount { what: "variable count", got: 0 });
        }
        if self.names.len() != self.count {
            return Err(EquationError::DimensionMismatch(format!("{} names for {} variables", self.names.len(), self.count)));
        }
        if self.values.len() != self.count {
            return Err(EquationError::DimensionMismatch(format!("{} values for {} variables", self.values.len(), self.count)));
        }
        if self.coefficients.len() != self.count * self.count {
            return Err(EquationError::DimensionMismatch(format!(
                "{} coefficients for {} variables, expected {}",
                self.coefficients.len(),
                self.count,
                self.count * self.count
            )));
        }
        for (i, name) in self.names.iter().enumerate() {
            if self.names[..i].contains(name) {
                return Err(EquationError::DimensionMismatch(format!("variable '{name}' appears twice")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_wrap_around() {
        assert_eq!(variable_names(23, 3).expect("3 names"), vec!['x', 'y', 'z']);
        assert_eq!(variable_names(23, 5).expect("5 names"), vec!['x', 'y', 'z', 'a', 'b']);
        assert_eq!(variable_names(0, 2).expect("2 names"), vec!['a', 'b']);
        assert_eq!(variable_names(25, 26).expect("26 names").len(), 26);
        assert!(matches!(variable_names(0, 27), Err(EquationError::TooManyVariables(27))));
    }

    #[test]
    fn test_generated_shape_and_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        for level in DifficultyLevel::iter() {
            let (min, max) = level.range();
            for count in [1, 2, 3, 5, 8, 26] {
                let vars = generate_with(&mut rng, count, level).expect("valid arguments");
                vars.validate().expect("generated sets are consistent");
                assert_eq!(vars.names.len(), count);
                assert_eq!(vars.values.len(), count);
                assert_eq!(vars.coefficients.len(), count * count);
                let mut distinct = vars.names.clone();
                distinct.sort_unstable();
                distinct.dedup();
                assert_eq!(distinct.len(), count);
                assert!(vars.values.iter().chain(&vars.coefficients).all(|v| (min..=max).contains(v)));
                let offset = (vars.names[0] as u8 - b'a') as usize;
                assert!(level.naming().admits(offset));
            }
        }
    }

    #[test]
    fn test_rhs_is_dot_product() {
        let vars = VariableSet {
            count: 2,
            level: DifficultyLevel::Novice,
            names: vec!['x', 'y'],
            values: vec![3, -4],
            coefficients: vec![1, 2, -5, 0],
        };
        assert_eq!(vars.rhs(0).expect("row 1"), 3 - 8);
        assert_eq!(vars.rhs(1).expect("row 2"), -15);
        assert!(matches!(vars.rhs(2), Err(EquationError::DimensionMismatch(_))));
        assert_eq!(vars.coefficient(1, 0), Some(-5));
        assert_eq!(vars.coefficient(0, 2), None);
        assert_eq!(vars.value_of('y'), Some(-4));
        assert_eq!(vars.value_of('q'), None);
    }

    #[test]
    fn test_rhs_overflow_is_an_error() {
        let vars = VariableSet {
            count: 2,
            level: DifficultyLevel::Smart,
            names: vec!['x', 'y'],
            values: vec![2, 1],
            coefficients: vec![i64::MAX, 2, i64::MAX, 0],
        };
        assert!(matches!(vars.rhs(0), Err(EquationError::Overflow(_))));
        assert!(matches!(dot(&[i64::MAX, 1], &[1, 1]), Err(EquationError::Overflow(_))));
        assert_eq!(dot(&[i64::MAX, -1], &[1, 1]).expect("fits"), i64::MAX - 1);
    }

    #[test]
    fn test_invalid_counts() {
        assert!(matches!(generate(0, DifficultyLevel::Babe), Err(EquationError::InvalidCount { .. })));
        assert!(matches!(generate(27, DifficultyLevel::Smart), Err(EquationError::TooManyVariables(27))));
    }

    #[test]
    fn test_seeded_generation_repeats() {
        let a = generate_with(&mut fastrand::Rng::with_seed(9), 4, DifficultyLevel::Pupil).expect("valid");
        let b = generate_with(&mut fastrand::Rng::with_seed(9), 4, DifficultyLevel::Pupil).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_catches_bad_shapes() {
        let mut vars = generate_with(&mut fastrand::Rng::with_seed(1), 3, DifficultyLevel::Kido).expect("valid");
        vars.coefficients.pop();
        assert!(matches!(vars.validate(), Err(EquationError::DimensionMismatch(_))));
        let mut vars = generate_with(&mut fastrand::Rng::with_seed(1), 3, DifficultyLevel::Kido).expect("valid");
        vars.names[2] = 'x';
        assert!(matches!(vars.validate(), Err(EquationError::DimensionMismatch(_))));
    }
}

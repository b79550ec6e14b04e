use crate::{variables, DifficultyLevel, EquationError, Result, VariableSet};

/// One row: `(coefficient, variable)` terms in variable order and the value
/// they sum to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Equation {
    pub terms: Vec<(i64, char)>,
    pub rhs: i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EquationSystem {
    pub variables: Vec<char>,
    pub equations: Vec<Equation>,
}

/// Independently generated systems, in order.
pub type Batch = Vec<EquationSystem>;

impl Equation {
    /// Builds a row whose right-hand side is computed from `values`.
    pub fn from_solution(coefficients: &[i64], names: &[char], values: &[i64]) -> Result<Self> {
        if coefficients.len() != names.len() || names.len() != values.len() {
            return Err(EquationError::DimensionMismatch(format!(
                "{} coefficients, {} names and {} values in one row",
                coefficients.len(),
                names.len(),
                values.len()
            )));
        }
        let terms = coefficients.iter().copied().zip(names.iter().copied()).collect();
        let rhs = variables::dot(coefficients, values)?;
        Ok(Self { terms, rhs })
    }
}

impl EquationSystem {
    /// Wraps hand-built rows after checking there is one row per variable and
    /// every row has exactly one term per variable, in variable order.
    pub fn new(variables: Vec<char>, equations: Vec<Equation>) -> Result<Self> {
        let system = Self { variables, equations };
        system.validate()?;
        Ok(system)
    }

    pub fn from_variables(vars: &VariableSet) -> Result<Self> {
        vars.validate()?;
        let equations = vars
            .coefficients
            .chunks(vars.count)
            .map(|row| Equation::from_solution(row, &vars.names, &vars.values))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            variables: vars.names.clone(),
            equations,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.variables.is_empty() {
            return Err(EquationError::DimensionMismatch("a system needs at least one variable".to_string()));
        }
        for (i, name) in self.variables.iter().enumerate() {
            if self.variables[..i].contains(name) {
                return Err(EquationError::DimensionMismatch(format!("variable '{name}' appears twice")));
            }
        }
        if self.equations.len() != self.variables.len() {
            return Err(EquationError::DimensionMismatch(format!(
                "{} rows for {} variables",
                self.equations.len(),
                self.variables.len()
            )));
        }
        for (r, equation) in self.equations.iter().enumerate() {
            if equation.terms.len() != self.variables.len() {
                return Err(EquationError::DimensionMismatch(format!(
                    "row {} has {} terms but the system has {} variables",
                    r + 1,
                    equation.terms.len(),
                    self.variables.len()
                )));
            }
            if let Some(((_, name), expected)) = equation.terms.iter().zip(&self.variables).find(|((_, name), expected)| name != *expected) {
                return Err(EquationError::DimensionMismatch(format!("row {} has '{name}' where '{expected}' belongs", r + 1)));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.equations.len()
    }
}

/// Generates `system_count` systems from a freshly seeded random source.
pub fn generate_batch(system_count: usize, variable_count: usize, level: DifficultyLevel) -> Result<Batch> {
    generate_batch_with(&mut fastrand::Rng::new(), system_count, variable_count, level)
}

/// Every system draws its own variables; nothing is shared across the batch.
pub fn generate_batch_with(rng: &mut fastrand::Rng, system_count: usize, variable_count: usize, level: DifficultyLevel) -> Result<Batch> {
    if system_count == 0 {
        return Err(EquationError::InvalidCount { what: "system count", got: 0 });
    }
    if variable_count == 0 {
        return Err(EquationError::InvalidCount { what: "variable count", got: 0 });
    }
    if variable_count > variables::ALPHABET_LEN {
        return Err(EquationError::TooManyVariables(variable_count));
    }
    if level.is_fractional() {
        log::warn!("level {level} has no fractional answers yet, generating like {}", DifficultyLevel::Smart);
    }

    (0..system_count)
        .map(|_| variables::generate_with(rng, variable_count, level).and_then(|vars| EquationSystem::from_variables(&vars)))
        .collect()
}

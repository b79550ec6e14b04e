use std::fmt;

use itertools::Itertools;

use crate::{Equation, EquationSystem, Result};

/// Renders one term of a left-hand side.
///
/// Zero coefficients vanish and a magnitude of one is not written. The first
/// term of a line drops its `+` and writes `-` directly against the term; every
/// later term gets a space, the sign and another space: `x - y + 3z`.
pub fn format_element(coefficient: i64, name: char, is_first: bool) -> String {
    if coefficient == 0 {
        return String::new();
    }
    let magnitude = coefficient.unsigned_abs();
    let term = if magnitude == 1 { name.to_string() } else { format!("{magnitude}{name}") };
    match (is_first, coefficient > 0) {
        (true, true) => term,
        (true, false) => format!("-{term}"),
        (false, true) => format!(" + {term}"),
        (false, false) => format!(" - {term}"),
    }
}

/// `lhs = rhs` for one row. A row with only zero coefficients reads `0 = 0`.
pub fn format_equation(equation: &Equation) -> String {
    let mut lhs = String::new();
    for &(coefficient, name) in &equation.terms {
        let element = format_element(coefficient, name, lhs.is_empty());
        lhs.push_str(&element);
    }
    if lhs.is_empty() {
        lhs.push('0');
    }
    format!("{lhs} = {}", equation.rhs)
}

/// All rows of a system, one per line, without a trailing newline.
pub fn format_equation_block(system: &EquationSystem) -> Result<String> {
    system.validate()?;
    Ok(system.equations.iter().map(format_equation).join("\n"))
}

pub fn format_batch_text(systems: &[EquationSystem]) -> Result<Vec<String>> {
    systems.iter().map(format_equation_block).collect()
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_equation(self))
    }
}

impl fmt::Display for EquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.equations.iter().map(format_equation).join("\n"))
    }
}

use std::fmt::Write;

use crate::{format::format_equation, EquationSystem, Result};

/// Systems with at most this many rows are laid out in two columns.
pub const TWO_COLUMN_MAX_ROWS: usize = 5;

const PREAMBLE: [&str; 3] = [r"\documentclass[12pt, a4paper]{article}", r"\usepackage[margin=0.5in]{geometry}", r"\usepackage[fleqn]{amsmath}"];

fn push_line(doc: &mut String, indent: usize, text: &str) {
    let _ = writeln!(doc, "{:width$}{text}", "", width = indent * 2);
}

/// Builds a complete LaTeX document with one numbered `cases` block per system.
///
/// The column layout is decided from the first system only; a batch built by
/// [`crate::generate_batch`] always has the same row count throughout.
pub fn latex_document(systems: &[EquationSystem]) -> Result<String> {
    for system in systems {
        system.validate()?;
    }
    let two_columns = systems.first().is_some_and(|system| system.rows() <= TWO_COLUMN_MAX_ROWS);

    let mut doc = String::new();
    for line in PREAMBLE {
        push_line(&mut doc, 0, line);
    }
    if two_columns {
        push_line(&mut doc, 0, r"\usepackage{multicol}");
    }
    push_line(&mut doc, 0, r"\begin{document}");
    if two_columns {
        push_line(&mut doc, 0, r"\begin{multicols}{2}");
    }

    for system in systems {
        push_line(&mut doc, 2, r"\begin{equation}");
        push_line(&mut doc, 3, r"\begin{cases}");
        let last = system.equations.len().saturating_sub(1);
        for (r, equation) in system.equations.iter().enumerate() {
            let row = format_equation(equation);
            if r == last {
                push_line(&mut doc, 4, &row);
            } else {
                push_line(&mut doc, 4, &format!(r"{row}\\"));
            }
        }
        push_line(&mut doc, 3, r"\end{cases}");
        push_line(&mut doc, 2, r"\end{equation}");
        push_line(&mut doc, 2, " ");
    }

    if two_columns {
        push_line(&mut doc, 0, r"\end{multicols}");
    }
    push_line(&mut doc, 0, r"\end{document}");
    Ok(doc)
}

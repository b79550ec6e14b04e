#![forbid(unsafe_code)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![forbid(clippy::enum_glob_use)]
#![forbid(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

//! Randomized systems of linear equations for practice sheets.
//!
//! A [`VariableSet`] holds the hidden solution and the coefficient matrix,
//! an [`EquationSystem`] turns it into rows with exact right-hand sides, and
//! the [`format`] and [`latex`] modules render a batch as plain text or as a
//! LaTeX document. Compiling that document is left to a [`Renderer`].

pub mod error;
pub mod format;
pub mod latex;
pub mod level;
pub mod render;
pub mod sheet;
pub mod system;
pub mod variables;

pub use error::{EquationError, Result};
pub use format::{format_batch_text, format_element, format_equation, format_equation_block};
pub use latex::{latex_document, TWO_COLUMN_MAX_ROWS};
pub use level::{DifficultyLevel, NamingPolicy};
pub use render::{generate_document, PdfLatex, Renderer};
pub use sheet::{practice_sheet, Sheet};
pub use system::{generate_batch, generate_batch_with, Batch, Equation, EquationSystem};
pub use variables::{dot, generate, generate_with, variable_names, VariableSet, ALPHABET_LEN};

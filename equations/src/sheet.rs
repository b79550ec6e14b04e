use std::path::PathBuf;

use crate::{format::format_batch_text, render::generate_document, system::generate_batch_with, DifficultyLevel, Renderer, Result};

/// What a practice sheet turned into.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Sheet {
    /// One text block per system.
    Text(Vec<String>),
    /// Path of the rendered document.
    Document(PathBuf),
}

/// Generates a batch and either formats it as text (`renderer` is `None`) or
/// typesets it through `renderer`. Nothing is returned unless every step
/// succeeded.
pub fn practice_sheet(rng: &mut fastrand::Rng, system_count: usize, variable_count: usize, level: DifficultyLevel, renderer: Option<&dyn Renderer>) -> Result<Sheet> {
    let batch = generate_batch_with(rng, system_count, variable_count, level)?;
    log::debug!("generated {} systems of {variable_count} variables at level {level}", batch.len());
    match renderer {
        Some(renderer) => generate_document(&batch, renderer).map(Sheet::Document),
        None => format_batch_text(&batch).map(Sheet::Text),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::EquationError;

    struct Counter(Cell<usize>);

    impl Renderer for Counter {
        fn render(&self, markup: &str) -> Result<PathBuf> {
            assert!(markup.contains(r"\begin{cases}"));
            self.0.set(self.0.get() + 1);
            Ok(PathBuf::from("sheet.pdf"))
        }
    }

    #[test]
    fn test_text_sheet() {
        let sheet = practice_sheet(&mut fastrand::Rng::with_seed(4), 3, 2, DifficultyLevel::Babe, None).expect("valid");
        let Sheet::Text(blocks) = sheet else {
            panic!("expected text blocks");
        };
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|block| block.lines().count() == 2));
    }

    #[test]
    fn test_document_sheet_renders_once() {
        let counter = Counter(Cell::new(0));
        let sheet = practice_sheet(&mut fastrand::Rng::with_seed(4), 5, 3, DifficultyLevel::Smartass, Some(&counter)).expect("valid");
        assert_eq!(sheet, Sheet::Document(PathBuf::from("sheet.pdf")));
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn test_invalid_input_renders_nothing() {
        let counter = Counter(Cell::new(0));
        let result = practice_sheet(&mut fastrand::Rng::new(), 0, 3, DifficultyLevel::Babe, Some(&counter));
        assert!(matches!(result, Err(EquationError::InvalidCount { .. })));
        assert_eq!(counter.0.get(), 0);
    }
}

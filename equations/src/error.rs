use thiserror::Error;

pub type Result<T> = std::result::Result<T, EquationError>;

#[derive(Debug, Error)]
pub enum EquationError {
    #[error("invalid level '{0}', expected 1-6 or one of babe, kido, novice, pupil, smart, smartass")]
    InvalidLevel(String),
    #[error("{what} must be a positive integer, got {got}")]
    InvalidCount { what: &'static str, got: i64 },
    #[error("cannot name {0} variables, only 26 letters are available")]
    TooManyVariables(usize),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("right-hand side overflows: {0}")]
    Overflow(String),
    #[error("rendering failed: {0}")]
    RenderFailure(String),
}

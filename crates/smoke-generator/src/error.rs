//! Error types for the generator crate.

use thiserror::Error;

/// Errors raised when a generator is called with arguments outside its
/// contract. These indicate a caller bug and should fail the run fast;
/// none of them are recoverable mid-generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Integer bound was zero or negative.
    #[error("integer bound must be positive, got {0}")]
    InvalidBound(i64),

    /// Float scale was zero, negative, or not finite.
    #[error("float scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    /// Field-name input contained a character outside `a`-`z`.
    #[error("field name must be lowercase alphabetic, got {0:?}")]
    NonAlphabetic(String),
}

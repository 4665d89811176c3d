//! Error types for the smoke driver.

use smoke_generator::GeneratorError;
use thiserror::Error;

/// Errors that can end a smoke run early.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Payload or key generation rejected its arguments.
    #[error("generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// The recording backend reported a failure. Propagated unmodified;
    /// the driver performs no retry and no suppression.
    #[error(transparent)]
    Recorder(#[from] anyhow::Error),
}

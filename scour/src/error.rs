//! Public error types

use scour_engine::EngineError;
use scour_patterns::PatternError;
use thiserror::Error;

/// Errors surfaced by the pipeline builders
#[derive(Error, Debug)]
pub enum Error {
    /// A custom pattern failed to compile, or a name lookup missed
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Engine-level failure while assembling the pipeline
    #[error("engine error: {0}")]
    Engine(EngineError),
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        // Pattern failures keep their own variant so callers can match
        // on InvalidPattern without digging through the engine layer.
        match err {
            EngineError::Pattern(pattern) => Error::Pattern(pattern),
            other => Error::Engine(other),
        }
    }
}

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, Error>;

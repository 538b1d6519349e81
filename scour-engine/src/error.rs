//! Engine-level error types

use crate::Mode;
use scour_patterns::PatternError;
use thiserror::Error;

/// Errors raised while assembling a pipeline
#[derive(Error, Debug)]
pub enum EngineError {
    /// Pattern lookup or compilation failed
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// A replacement value was supplied for a step whose mode ignores it
    #[error("replacement value is not allowed in {mode} mode")]
    ModeMismatch {
        /// The mode the offending step was built for
        mode: Mode,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

//! Pattern-level error types

use thiserror::Error;

/// Errors raised by the pattern registry and custom pattern compilation
#[derive(Error, Debug)]
pub enum PatternError {
    /// A name-based lookup asked for a pattern outside the fixed set
    #[error("unknown pattern name: '{name}'")]
    UnknownPattern {
        /// The name that failed to resolve
        name: String,
    },

    /// A user-supplied regular expression failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text as supplied by the caller
        pattern: String,
        /// The underlying compile error
        source: regex::Error,
    },
}

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;

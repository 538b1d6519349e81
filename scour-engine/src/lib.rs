//! Pipeline accumulation and execution for scour text normalization
//!
//! This crate provides the ordered step sequence, the mode model, and
//! the sequential executor that threads an input string through every
//! step in insertion order.

#![warn(missing_docs)]

pub mod error;
pub mod executor;
pub mod pipeline;
pub mod step;
pub mod tally;

// Re-export key types
pub use error::{EngineError, Result};
pub use pipeline::Pipeline;
pub use step::Step;
pub use tally::Tally;

// Re-export from the patterns crate for convenience
pub use scour_patterns::{Catalog, PatternError, PatternKind};

use std::fmt;

/// What happens to a matched span
///
/// Fixed per pipeline at construction time; every step in a pipeline
/// shares the pipeline's mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Matched spans are removed from the text
    Remove,
    /// Matched spans are replaced with a token
    Replace,
    /// Matched spans are extracted; the text is left untouched
    Collect,
}

impl Mode {
    /// Short name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Remove => "remove",
            Mode::Replace => "replace",
            Mode::Collect => "collect",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Built-in pattern rules for scour text normalization
//!
//! This crate holds the fixed catalog of matching rules the pipeline
//! builders select from: one compiled rule per supported pattern kind,
//! plus the emoji and emoticon catalogs behind the two catalog-backed
//! kinds. The table is process-wide, compiled once on first use, and
//! never mutated afterwards.

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod kind;
pub mod registry;

// Re-export key types
pub use catalog::Catalog;
pub use error::{PatternError, Result};
pub use kind::PatternKind;
pub use registry::{lookup, rule, Rule, DEFAULT_PUNCTUATION};

//! Emoji and emoticon catalogs
//!
//! Two independent, non-overlapping tables: pictographic emoji and
//! ASCII-art emoticons. Each entry maps a literal to a description
//! token used as the default replacement in replace mode.

pub mod emoji;
pub mod emoticons;

use std::collections::HashMap;
use std::sync::OnceLock;

/// Which catalog a catalog-backed rule draws its tokens from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// Pictographic emoji
    Emoji,
    /// ASCII-art emoticons
    Emoticons,
}

impl Catalog {
    /// The description token for a matched catalog entry, if present
    pub fn token(&self, matched: &str) -> Option<&'static str> {
        match self {
            Catalog::Emoji => emoji::token(matched),
            Catalog::Emoticons => emoticons::token(matched),
        }
    }

    /// The catalog's entry table
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Catalog::Emoji => emoji::ENTRIES,
            Catalog::Emoticons => emoticons::ENTRIES,
        }
    }
}

/// Build an alternation pattern over the catalog entries, longest entry
/// first so multi-character literals win over their prefixes
pub(crate) fn alternation(entries: &[(&str, &str)]) -> String {
    let mut literals: Vec<&str> = entries.iter().map(|(literal, _)| *literal).collect();
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let escaped: Vec<String> = literals.iter().map(|l| regex::escape(l)).collect();
    escaped.join("|")
}

pub(crate) fn token_map(
    cell: &'static OnceLock<HashMap<&'static str, &'static str>>,
    entries: &'static [(&'static str, &'static str)],
) -> &'static HashMap<&'static str, &'static str> {
    cell.get_or_init(|| entries.iter().copied().collect())
}

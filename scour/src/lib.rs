//! Chainable text normalization pipelines
//!
//! Assemble an ordered sequence of pattern operations — URLs, hashtags,
//! nicknames, HTML tags, punctuation, whitespace, emoji, emoticons,
//! custom regular expressions — and run it against any number of input
//! strings. Three pipeline modes exist, fixed by the initializer:
//! [`clean`] removes matches, [`replace`] substitutes tokens for them,
//! and [`collect`] extracts them without touching the text.
//!
//! Steps apply strictly in the order they were chained: each step's
//! output is the next step's input. Overlapping pattern classes
//! therefore interact — a punctuation step placed early strips the `#`
//! off hashtags and the `@` off nicknames, so chain punctuation as one
//! of the last steps.
//!
//! # Examples
//!
//! Clean a twitter message:
//!
//! ```
//! let result = scour::clean()
//!     .hashtag()
//!     .nickname()
//!     .url()
//!     .execute("#fun #lol    Why  @Alex33 is so funny? Check here: https://some-url.com");
//! assert_eq!(result, "Why is so funny? Check here:");
//! ```
//!
//! Replace nicknames and URLs with tokens:
//!
//! ```
//! let result = scour::replace()
//!     .hashtag_with("")
//!     .nickname()
//!     .url_with("CUSTOM_URL_TOKEN")
//!     .execute("#fun #lol    Why  @Alex33 is so funny? Check here: https://some-url.com");
//! assert_eq!(result, "Why TOKEN_NICKNAME is so funny? Check here: CUSTOM_URL_TOKEN");
//! ```
//!
//! Build a reusable cleanup function:
//!
//! ```
//! let func = scour::clean()
//!     .url()
//!     .hashtag()
//!     .html()
//!     .punctuation()
//!     .whitespace()
//!     .function();
//! let result =
//!     func("\t #fun #lol    Why  @Alex33 is so... funny? <tag> \nCheck\there: https://some-url.com");
//! assert_eq!(result, "Why Alex33 is so funny Check here");
//! ```
//!
//! Extract matches instead of rewriting:
//!
//! ```
//! let tags = scour::collect().hashtag().execute("#fun #lol wow");
//! assert_eq!(tags, vec!["#fun", "#lol"]);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;

// Re-export key types
pub use builder::{Cleaner, Collector, Replacer};
pub use error::{Error, Result};
pub use scour_engine::{Mode, Tally};
pub use scour_patterns::{PatternError, PatternKind, DEFAULT_PUNCTUATION};

/// Start a remove-mode pipeline
///
/// Matched spans are deleted (whitespace, emoji and emoticon matches
/// leave a single space behind so words cannot collide).
pub fn clean() -> Cleaner {
    Cleaner::new()
}

/// Start a replace-mode pipeline
///
/// Matched spans become tokens: the rule default, or the value given
/// to a `*_with` method, verbatim.
pub fn replace() -> Replacer {
    Replacer::new()
}

/// Start a collect-mode pipeline
///
/// Matched spans are extracted into an ordered sequence; the input
/// text is never modified.
pub fn collect() -> Collector {
    Collector::new()
}

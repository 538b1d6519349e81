//! The fixed rule table shared by all pipelines
//!
//! Rules are compiled once on first use and live for the rest of the
//! process. Lookups through [`PatternKind`] are total; the string-keyed
//! [`lookup`] exists for callers that resolve names at runtime and is
//! the only way to observe an unknown-pattern error.

use crate::catalog::{emoji, emoticons, Catalog};
use crate::error::Result;
use crate::kind::PatternKind;
use regex::Regex;
use std::sync::OnceLock;

/// The character set matched by the default punctuation rule
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One immutable entry of the rule table
///
/// A rule pairs a compiled matcher with its two replacement defaults:
/// the text a match becomes in remove mode, and the default token in
/// replace mode. Catalog-backed rules (emoji, emoticons) additionally
/// name their catalog so replace mode can substitute per-match
/// description tokens.
#[derive(Debug)]
pub struct Rule {
    kind: PatternKind,
    regex: Regex,
    removal: &'static str,
    token: &'static str,
    catalog: Option<Catalog>,
}

impl Rule {
    /// The kind this rule implements
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The compiled matcher
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// What a match becomes in remove mode
    ///
    /// Empty for most rules; a single space for whitespace, emoji and
    /// emoticons so removal cannot glue adjacent words together.
    pub fn removal(&self) -> &'static str {
        self.removal
    }

    /// The default replacement token in replace mode
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// The catalog backing this rule, for per-match replace tokens
    pub fn catalog(&self) -> Option<Catalog> {
        self.catalog
    }
}

struct Registry {
    rules: [Rule; 8],
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Build a character class matching exactly the given characters
///
/// ASCII punctuation is escaped so the set may contain class
/// metacharacters like `]`, `^` and `-`.
pub fn character_class(chars: &str) -> String {
    let mut class = String::with_capacity(chars.len() * 2 + 2);
    class.push('[');
    for ch in chars.chars() {
        // `<` and `>` are not class metacharacters and are reserved by
        // the regex engine as word-boundary escapes (`\<`, `\>`), so they
        // must be emitted unescaped; every other ASCII punctuation char is
        // escaped so the set may safely contain `]`, `^`, `-`, etc.
        if ch.is_ascii_punctuation() && ch != '<' && ch != '>' {
            class.push('\\');
        }
        class.push(ch);
    }
    class.push(']');
    class
}

fn compile() -> Registry {
    fn entry(
        kind: PatternKind,
        pattern: &str,
        removal: &'static str,
        token: &'static str,
        catalog: Option<Catalog>,
    ) -> Rule {
        Rule {
            kind,
            // Built-in patterns are fixed at compile time; a failure here
            // is a programming error, not caller input.
            regex: Regex::new(pattern).expect("built-in pattern must compile"),
            removal,
            token,
            catalog,
        }
    }

    Registry {
        rules: [
            entry(PatternKind::Url, r"https?://\S+", "", "TOKEN_URL", None),
            entry(PatternKind::Hashtag, r"#\w+", "", "TOKEN_HASHTAG", None),
            entry(PatternKind::Nickname, r"@\w+", "", "TOKEN_NICKNAME", None),
            entry(PatternKind::Html, r"<[^<>]*>", "", "TOKEN_HTML", None),
            entry(
                PatternKind::Punctuation,
                &character_class(DEFAULT_PUNCTUATION),
                "",
                " ",
                None,
            ),
            entry(PatternKind::Whitespace, r"\s+", " ", " ", None),
            entry(
                PatternKind::Emoji,
                emoji::pattern(),
                " ",
                "",
                Some(Catalog::Emoji),
            ),
            entry(
                PatternKind::Emoticons,
                emoticons::pattern(),
                " ",
                "",
                Some(Catalog::Emoticons),
            ),
        ],
    }
}

/// The rule for a pattern kind
///
/// Total over the closed kind set; the returned rule is shared,
/// read-only, process-wide state.
pub fn rule(kind: PatternKind) -> &'static Rule {
    let registry = REGISTRY.get_or_init(compile);
    let rule = &registry.rules[kind as usize];
    debug_assert_eq!(rule.kind(), kind);
    rule
}

/// Resolve a rule by symbolic name
///
/// Fails with [`PatternError::UnknownPattern`] for any name outside the
/// fixed set.
///
/// [`PatternError::UnknownPattern`]: crate::error::PatternError::UnknownPattern
pub fn lookup(name: &str) -> Result<&'static Rule> {
    let kind: PatternKind = name.parse()?;
    Ok(rule(kind))
}

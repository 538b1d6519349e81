//! The closed set of built-in pattern kinds

use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Identifier for a built-in pattern rule
///
/// The set is closed: selecting a rule through this enum cannot fail,
/// which is why the chainable builder methods never return an error for
/// registry-backed steps. Custom regular expressions are not registry
/// entries and carry their own compiled pattern instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    /// `http://` and `https://` URLs up to the next whitespace
    Url,
    /// `#` followed by word characters
    Hashtag,
    /// `@` followed by word characters
    Nickname,
    /// Any `<...>`-delimited span, including attributed and self-closing tags
    Html,
    /// A configurable set of punctuation characters, ASCII by default
    Punctuation,
    /// Any run of whitespace
    Whitespace,
    /// Pictographic emoji from the built-in catalog
    Emoji,
    /// ASCII-art emoticons from the built-in catalog
    Emoticons,
}

impl PatternKind {
    /// All built-in kinds, in a stable order
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Url,
        PatternKind::Hashtag,
        PatternKind::Nickname,
        PatternKind::Html,
        PatternKind::Punctuation,
        PatternKind::Whitespace,
        PatternKind::Emoji,
        PatternKind::Emoticons,
    ];

    /// The symbolic name of this kind, as used in collect-mode tallies
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Url => "url",
            PatternKind::Hashtag => "hashtag",
            PatternKind::Nickname => "nickname",
            PatternKind::Html => "html",
            PatternKind::Punctuation => "punctuation",
            PatternKind::Whitespace => "whitespace",
            PatternKind::Emoji => "emoji",
            PatternKind::Emoticons => "emoticons",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(PatternKind::Url),
            "hashtag" => Ok(PatternKind::Hashtag),
            "nickname" => Ok(PatternKind::Nickname),
            "html" => Ok(PatternKind::Html),
            "punctuation" => Ok(PatternKind::Punctuation),
            "whitespace" => Ok(PatternKind::Whitespace),
            "emoji" => Ok(PatternKind::Emoji),
            "emoticons" => Ok(PatternKind::Emoticons),
            _ => Err(PatternError::UnknownPattern {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        match "stemming".parse::<PatternKind>() {
            Err(PatternError::UnknownPattern { name }) => assert_eq!(name, "stemming"),
            other => panic!("expected UnknownPattern, got {other:?}"),
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&PatternKind::Emoticons).unwrap();
        assert_eq!(json, "\"emoticons\"");
    }
}

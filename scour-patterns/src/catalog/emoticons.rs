//! ASCII-art emoticon catalog
//!
//! Literal emoticon spellings and their description tokens. Several
//! spellings map to the same token (nose and no-nose variants). Note
//! that some emoticons overlap URL syntax (`:/`), so an emoticon step
//! is best chained after a url step.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Emoticon literals and their description tokens
pub static ENTRIES: &[(&str, &str)] = &[
    (":-)))", "TOKEN_EMOTICON_VERY_VERY_HAPPY_FACE_OR_SMILEY"),
    (":-))", "TOKEN_EMOTICON_VERY_HAPPY_FACE_OR_SMILEY"),
    (":-)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (":)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    ("=)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (":]", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (":-D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (":D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    ("=D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    ("xD", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    ("XD", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (":-(((", "TOKEN_EMOTICON_VERY_VERY_SAD_FACE"),
    (":-((", "TOKEN_EMOTICON_VERY_SAD_FACE"),
    (":-(", "TOKEN_EMOTICON_FROWN_SAD_ANGRY_OR_POUTING"),
    (":(", "TOKEN_EMOTICON_FROWN_SAD_ANGRY_OR_POUTING"),
    ("=(", "TOKEN_EMOTICON_FROWN_SAD_ANGRY_OR_POUTING"),
    (":[", "TOKEN_EMOTICON_FROWN_SAD_ANGRY_OR_POUTING"),
    (";-)", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (";)", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (";-]", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (";]", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (":-P", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (":P", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (":-p", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (":p", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    ("=P", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (":-O", "TOKEN_EMOTICON_SURPRISE"),
    (":O", "TOKEN_EMOTICON_SURPRISE"),
    (":-o", "TOKEN_EMOTICON_SURPRISE"),
    (":o", "TOKEN_EMOTICON_SURPRISE"),
    (":-|", "TOKEN_EMOTICON_STRAIGHT_FACE"),
    (":|", "TOKEN_EMOTICON_STRAIGHT_FACE"),
    (":-/", "TOKEN_EMOTICON_SKEPTICAL_ANNOYED_UNDECIDED_UNEASY_OR_HESITANT"),
    (":/", "TOKEN_EMOTICON_SKEPTICAL_ANNOYED_UNDECIDED_UNEASY_OR_HESITANT"),
    (":-\\", "TOKEN_EMOTICON_SKEPTICAL_ANNOYED_UNDECIDED_UNEASY_OR_HESITANT"),
    (":'-(", "TOKEN_EMOTICON_CRYING"),
    (":'(", "TOKEN_EMOTICON_CRYING"),
    (":'-)", "TOKEN_EMOTICON_TEARS_OF_HAPPINESS"),
    (":')", "TOKEN_EMOTICON_TEARS_OF_HAPPINESS"),
    ("D-:", "TOKEN_EMOTICON_GREAT_DISMAY"),
    ("D:", "TOKEN_EMOTICON_GREAT_DISMAY"),
    (":-*", "TOKEN_EMOTICON_KISS"),
    (":*", "TOKEN_EMOTICON_KISS"),
    (">:(", "TOKEN_EMOTICON_ANGRY_FACE"),
    (">:)", "TOKEN_EMOTICON_EVIL_OR_DEVILISH"),
    ("O:-)", "TOKEN_EMOTICON_ANGEL_SAINT_OR_INNOCENT"),
    ("O:)", "TOKEN_EMOTICON_ANGEL_SAINT_OR_INNOCENT"),
    ("8-)", "TOKEN_EMOTICON_COOL"),
    ("B-)", "TOKEN_EMOTICON_COOL"),
    (":-X", "TOKEN_EMOTICON_SEALED_LIPS_OR_WEARING_BRACES"),
    (":X", "TOKEN_EMOTICON_SEALED_LIPS_OR_WEARING_BRACES"),
    (":-#", "TOKEN_EMOTICON_SEALED_LIPS_OR_WEARING_BRACES"),
    (":#", "TOKEN_EMOTICON_SEALED_LIPS_OR_WEARING_BRACES"),
    ("<3", "TOKEN_EMOTICON_HEART"),
    ("</3", "TOKEN_EMOTICON_BROKEN_HEART"),
];

static PATTERN: OnceLock<String> = OnceLock::new();
static TOKENS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Alternation pattern matching every catalog entry, longest first
pub fn pattern() -> &'static str {
    PATTERN.get_or_init(|| super::alternation(ENTRIES))
}

/// The description token for an emoticon literal
pub fn token(emoticon: &str) -> Option<&'static str> {
    super::token_map(&TOKENS, ENTRIES).get(emoticon).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_pattern_compiles() {
        let re = Regex::new(pattern()).unwrap();
        for (literal, _) in ENTRIES {
            assert!(re.is_match(literal), "{literal:?} not matched");
        }
    }

    #[test]
    fn test_longest_spelling_wins() {
        let re = Regex::new(pattern()).unwrap();
        let m = re.find(":-))").unwrap();
        assert_eq!(m.as_str(), ":-))");
        let m = re.find("</3").unwrap();
        assert_eq!(m.as_str(), "</3");
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(token(":)"), Some("TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"));
        assert_eq!(
            token(":D"),
            Some("TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES")
        );
        assert_eq!(token("plain text"), None);
    }
}

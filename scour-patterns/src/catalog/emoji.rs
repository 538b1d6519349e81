//! Pictographic emoji catalog
//!
//! A table of common emoji and their description tokens. Entries that
//! exist both bare and with the emoji variation selector (U+FE0F) are
//! listed in both spellings; the alternation is built longest first so
//! the selector form wins when present.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Emoji literals and their description tokens
pub static ENTRIES: &[(&str, &str)] = &[
    ("😀", "TOKEN_EMOJI_GRINNING_FACE"),
    ("😃", "TOKEN_EMOJI_GRINNING_FACE_WITH_BIG_EYES"),
    ("😄", "TOKEN_EMOJI_GRINNING_FACE_WITH_SMILING_EYES"),
    ("😁", "TOKEN_EMOJI_BEAMING_FACE_WITH_SMILING_EYES"),
    ("😆", "TOKEN_EMOJI_GRINNING_SQUINTING_FACE"),
    ("😅", "TOKEN_EMOJI_GRINNING_FACE_WITH_SWEAT"),
    ("🤣", "TOKEN_EMOJI_ROLLING_ON_THE_FLOOR_LAUGHING"),
    ("😂", "TOKEN_EMOJI_FACE_WITH_TEARS_OF_JOY"),
    ("🙂", "TOKEN_EMOJI_SLIGHTLY_SMILING_FACE"),
    ("🙃", "TOKEN_EMOJI_UPSIDE_DOWN_FACE"),
    ("😉", "TOKEN_EMOJI_WINKING_FACE"),
    ("😊", "TOKEN_EMOJI_SMILING_FACE_WITH_SMILING_EYES"),
    ("😇", "TOKEN_EMOJI_SMILING_FACE_WITH_HALO"),
    ("🥰", "TOKEN_EMOJI_SMILING_FACE_WITH_HEARTS"),
    ("😍", "TOKEN_EMOJI_SMILING_FACE_WITH_HEART_EYES"),
    ("🤩", "TOKEN_EMOJI_STAR_STRUCK"),
    ("😘", "TOKEN_EMOJI_FACE_BLOWING_A_KISS"),
    ("😗", "TOKEN_EMOJI_KISSING_FACE"),
    ("😚", "TOKEN_EMOJI_KISSING_FACE_WITH_CLOSED_EYES"),
    ("😙", "TOKEN_EMOJI_KISSING_FACE_WITH_SMILING_EYES"),
    ("😋", "TOKEN_EMOJI_FACE_SAVORING_FOOD"),
    ("😛", "TOKEN_EMOJI_FACE_WITH_TONGUE"),
    ("😜", "TOKEN_EMOJI_WINKING_FACE_WITH_TONGUE"),
    ("🤪", "TOKEN_EMOJI_ZANY_FACE"),
    ("😝", "TOKEN_EMOJI_SQUINTING_FACE_WITH_TONGUE"),
    ("🤑", "TOKEN_EMOJI_MONEY_MOUTH_FACE"),
    ("🤗", "TOKEN_EMOJI_HUGGING_FACE"),
    ("🤭", "TOKEN_EMOJI_FACE_WITH_HAND_OVER_MOUTH"),
    ("🤫", "TOKEN_EMOJI_SHUSHING_FACE"),
    ("🤔", "TOKEN_EMOJI_THINKING_FACE"),
    ("🤐", "TOKEN_EMOJI_ZIPPER_MOUTH_FACE"),
    ("🤨", "TOKEN_EMOJI_FACE_WITH_RAISED_EYEBROW"),
    ("😐", "TOKEN_EMOJI_NEUTRAL_FACE"),
    ("😑", "TOKEN_EMOJI_EXPRESSIONLESS_FACE"),
    ("😶", "TOKEN_EMOJI_FACE_WITHOUT_MOUTH"),
    ("😏", "TOKEN_EMOJI_SMIRKING_FACE"),
    ("😒", "TOKEN_EMOJI_UNAMUSED_FACE"),
    ("🙄", "TOKEN_EMOJI_FACE_WITH_ROLLING_EYES"),
    ("😬", "TOKEN_EMOJI_GRIMACING_FACE"),
    ("😌", "TOKEN_EMOJI_RELIEVED_FACE"),
    ("😔", "TOKEN_EMOJI_PENSIVE_FACE"),
    ("😪", "TOKEN_EMOJI_SLEEPY_FACE"),
    ("😴", "TOKEN_EMOJI_SLEEPING_FACE"),
    ("😷", "TOKEN_EMOJI_FACE_WITH_MEDICAL_MASK"),
    ("🤒", "TOKEN_EMOJI_FACE_WITH_THERMOMETER"),
    ("🤕", "TOKEN_EMOJI_FACE_WITH_HEAD_BANDAGE"),
    ("🤢", "TOKEN_EMOJI_NAUSEATED_FACE"),
    ("🤮", "TOKEN_EMOJI_FACE_VOMITING"),
    ("🤧", "TOKEN_EMOJI_SNEEZING_FACE"),
    ("🥵", "TOKEN_EMOJI_HOT_FACE"),
    ("🥶", "TOKEN_EMOJI_COLD_FACE"),
    ("🥴", "TOKEN_EMOJI_WOOZY_FACE"),
    ("😵", "TOKEN_EMOJI_DIZZY_FACE"),
    ("🤯", "TOKEN_EMOJI_EXPLODING_HEAD"),
    ("🤠", "TOKEN_EMOJI_COWBOY_HAT_FACE"),
    ("🥳", "TOKEN_EMOJI_PARTYING_FACE"),
    ("😎", "TOKEN_EMOJI_SMILING_FACE_WITH_SUNGLASSES"),
    ("🤓", "TOKEN_EMOJI_NERD_FACE"),
    ("🧐", "TOKEN_EMOJI_FACE_WITH_MONOCLE"),
    ("😕", "TOKEN_EMOJI_CONFUSED_FACE"),
    ("😟", "TOKEN_EMOJI_WORRIED_FACE"),
    ("🙁", "TOKEN_EMOJI_SLIGHTLY_FROWNING_FACE"),
    ("😮", "TOKEN_EMOJI_FACE_WITH_OPEN_MOUTH"),
    ("😯", "TOKEN_EMOJI_HUSHED_FACE"),
    ("😲", "TOKEN_EMOJI_ASTONISHED_FACE"),
    ("😳", "TOKEN_EMOJI_FLUSHED_FACE"),
    ("🥺", "TOKEN_EMOJI_PLEADING_FACE"),
    ("😦", "TOKEN_EMOJI_FROWNING_FACE_WITH_OPEN_MOUTH"),
    ("😧", "TOKEN_EMOJI_ANGUISHED_FACE"),
    ("😨", "TOKEN_EMOJI_FEARFUL_FACE"),
    ("😰", "TOKEN_EMOJI_ANXIOUS_FACE_WITH_SWEAT"),
    ("😥", "TOKEN_EMOJI_SAD_BUT_RELIEVED_FACE"),
    ("😢", "TOKEN_EMOJI_CRYING_FACE"),
    ("😭", "TOKEN_EMOJI_LOUDLY_CRYING_FACE"),
    ("😱", "TOKEN_EMOJI_FACE_SCREAMING_IN_FEAR"),
    ("😖", "TOKEN_EMOJI_CONFOUNDED_FACE"),
    ("😣", "TOKEN_EMOJI_PERSEVERING_FACE"),
    ("😞", "TOKEN_EMOJI_DISAPPOINTED_FACE"),
    ("😓", "TOKEN_EMOJI_DOWNCAST_FACE_WITH_SWEAT"),
    ("😩", "TOKEN_EMOJI_WEARY_FACE"),
    ("😫", "TOKEN_EMOJI_TIRED_FACE"),
    ("🥱", "TOKEN_EMOJI_YAWNING_FACE"),
    ("😤", "TOKEN_EMOJI_FACE_WITH_STEAM_FROM_NOSE"),
    ("😡", "TOKEN_EMOJI_POUTING_FACE"),
    ("😠", "TOKEN_EMOJI_ANGRY_FACE"),
    ("🤬", "TOKEN_EMOJI_FACE_WITH_SYMBOLS_ON_MOUTH"),
    ("💀", "TOKEN_EMOJI_SKULL"),
    ("💩", "TOKEN_EMOJI_PILE_OF_POO"),
    ("🤡", "TOKEN_EMOJI_CLOWN_FACE"),
    ("👻", "TOKEN_EMOJI_GHOST"),
    ("👽", "TOKEN_EMOJI_ALIEN"),
    ("🤖", "TOKEN_EMOJI_ROBOT"),
    ("❤️", "TOKEN_EMOJI_RED_HEART"),
    ("❤", "TOKEN_EMOJI_RED_HEART"),
    ("🧡", "TOKEN_EMOJI_ORANGE_HEART"),
    ("💛", "TOKEN_EMOJI_YELLOW_HEART"),
    ("💚", "TOKEN_EMOJI_GREEN_HEART"),
    ("💙", "TOKEN_EMOJI_BLUE_HEART"),
    ("💜", "TOKEN_EMOJI_PURPLE_HEART"),
    ("🖤", "TOKEN_EMOJI_BLACK_HEART"),
    ("💔", "TOKEN_EMOJI_BROKEN_HEART"),
    ("💕", "TOKEN_EMOJI_TWO_HEARTS"),
    ("💖", "TOKEN_EMOJI_SPARKLING_HEART"),
    ("💗", "TOKEN_EMOJI_GROWING_HEART"),
    ("💯", "TOKEN_EMOJI_HUNDRED_POINTS"),
    ("💥", "TOKEN_EMOJI_COLLISION"),
    ("🔥", "TOKEN_EMOJI_FIRE"),
    ("✨", "TOKEN_EMOJI_SPARKLES"),
    ("🎉", "TOKEN_EMOJI_PARTY_POPPER"),
    ("👍", "TOKEN_EMOJI_THUMBS_UP"),
    ("👎", "TOKEN_EMOJI_THUMBS_DOWN"),
    ("👌", "TOKEN_EMOJI_OK_HAND"),
    ("👏", "TOKEN_EMOJI_CLAPPING_HANDS"),
    ("🙌", "TOKEN_EMOJI_RAISING_HANDS"),
    ("🙏", "TOKEN_EMOJI_FOLDED_HANDS"),
    ("💪", "TOKEN_EMOJI_FLEXED_BICEPS"),
    ("👀", "TOKEN_EMOJI_EYES"),
    ("✌️", "TOKEN_EMOJI_VICTORY_HAND"),
    ("✌", "TOKEN_EMOJI_VICTORY_HAND"),
    ("🤞", "TOKEN_EMOJI_CROSSED_FINGERS"),
    ("🤝", "TOKEN_EMOJI_HANDSHAKE"),
    ("👋", "TOKEN_EMOJI_WAVING_HAND"),
];

static PATTERN: OnceLock<String> = OnceLock::new();
static TOKENS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Alternation pattern matching every catalog entry, longest first
pub fn pattern() -> &'static str {
    PATTERN.get_or_init(|| super::alternation(ENTRIES))
}

/// The description token for an emoji literal
pub fn token(emoji: &str) -> Option<&'static str> {
    super::token_map(&TOKENS, ENTRIES).get(emoji).copied()
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
    fn test_variation_selector_form_wins() {
        let re = Regex::new(pattern()).unwrap();
        let m = re.find("❤️").unwrap();
        assert_eq!(m.as_str(), "❤️");
    }

    #[test]
    fn test_token_lookup() {
        assert_eq!(token("😂"), Some("TOKEN_EMOJI_FACE_WITH_TEARS_OF_JOY"));
        assert_eq!(token("a"), None);
    }

    #[test]
    fn test_no_ascii_entries() {
        for (literal, _) in ENTRIES {
            assert!(
                literal.chars().all(|c| !c.is_ascii()),
                "{literal:?} contains ASCII"
            );
        }
    }
}

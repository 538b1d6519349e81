//! Basic tests for the scour public surface

use scour::{Error, PatternError};

const TWEET: &str = "#fun #lol    Why  @Alex33 is so funny? Check here: https://some-url.com";

#[test]
fn test_clean_tweet() {
    let result = scour::clean().hashtag().nickname().url().execute(TWEET);
    assert_eq!(result, "Why is so funny? Check here:");
}

#[test]
fn test_replace_with_default_and_custom_tokens() {
    let result = scour::replace()
        .hashtag_with("")
        .nickname()
        .url_with("CUSTOM_URL_TOKEN")
        .execute(TWEET);
    assert_eq!(
        result,
        "Why TOKEN_NICKNAME is so funny? Check here: CUSTOM_URL_TOKEN"
    );
}

#[test]
fn test_function_equals_execute() {
    let cleaner = scour::clean().hashtag().nickname().url();
    let func = cleaner.function();
    assert_eq!(func(TWEET), cleaner.execute(TWEET));

    let collector = scour::collect().hashtag().url();
    let func = collector.function();
    assert_eq!(func(TWEET), collector.execute(TWEET));
}

#[test]
fn test_order_sensitivity() {
    // hashtag first: the whole tag disappears
    let result = scour::clean().hashtag().punctuation().execute("#tag!");
    assert_eq!(result, "");

    // punctuation first: '#' is stripped before the hashtag step runs,
    // so the bare word survives
    let result = scour::clean().punctuation().hashtag().execute("#tag!");
    assert_eq!(result, "tag");
}

#[test]
fn test_whitespace_step_is_idempotent() {
    let text = "a\t\t b\n\n\nc   d";
    let once = scour::clean().whitespace().keep_whitespace().execute(text);
    let twice = scour::clean()
        .whitespace()
        .whitespace()
        .keep_whitespace()
        .execute(text);
    assert_eq!(once, twice);
    assert_eq!(once, "a b c d");
}

#[test]
fn test_collect_returns_matches_in_step_then_text_order() {
    let text = "@first #a then #b @second https://x.example";
    let matches = scour::collect().hashtag().nickname().url().execute(text);
    assert_eq!(
        matches,
        vec!["#a", "#b", "@first", "@second", "https://x.example"]
    );
}

#[test]
fn test_collect_leaves_input_untouched() {
    let text = String::from("#a @b");
    let _ = scour::collect().hashtag().nickname().execute(&text);
    assert_eq!(text, "#a @b");
}

#[test]
fn test_invalid_regexp_raises_without_appending() {
    match scour::clean().hashtag().regexp("#\\w+(") {
        Err(Error::Pattern(PatternError::InvalidPattern { pattern, .. })) => {
            assert_eq!(pattern, "#\\w+(");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }

    // a fresh builder is unaffected
    assert_eq!(scour::clean().hashtag().execute("#a b"), "b");
}

#[test]
fn test_custom_regexp_step() {
    let result = scour::clean().regexp(r"\d+").unwrap().execute("a 12 b 345");
    assert_eq!(result, "a b");

    let result = scour::replace()
        .regexp_with(r"\d+", "N")
        .unwrap()
        .execute("a 12 b");
    assert_eq!(result, "a N b");
}

#[test]
fn test_clean_emoticons() {
    let result = scour::clean().emoticons().execute(":)word1:Dword2:)");
    assert_eq!(result, "word1 word2");
}

#[test]
fn test_replace_emoticons_with_description_tokens() {
    let result = scour::replace().emoticons().execute(":)word1:Dword2");
    assert_eq!(
        result,
        "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY word1 \
         TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES word2"
    );
}

#[test]
fn test_clean_emoji() {
    let result = scour::clean().emoji().execute("so 😂😂 funny");
    assert_eq!(result, "so funny");
}

#[test]
fn test_replace_emoji_with_description_tokens() {
    let result = scour::replace().emoji().execute("ok 👍");
    assert_eq!(result, "ok TOKEN_EMOJI_THUMBS_UP");
}

#[test]
fn test_html_removal() {
    let result = scour::clean()
        .html()
        .execute("a <b>bold</b> and <a href=\"https://x\">link</a> end");
    assert_eq!(result, "a bold and link end");
}

#[test]
fn test_punctuation_set_override() {
    let result = scour::clean()
        .punctuation_set("!?")
        .unwrap()
        .execute("keep. drop! this?");
    assert_eq!(result, "keep. drop this");
}

#[test]
fn test_tally_batch_counts_across_inputs() {
    let collector = scour::collect().emoticons();
    let tally = collector.tally_batch([":) :D :)", ":) :D :)"]);
    assert_eq!(tally.count("emoticons", ":)"), 4);
    assert_eq!(tally.count("emoticons", ":D"), 2);
    assert_eq!(tally.label_total("emoticons"), 6);
}

#[test]
fn test_tally_single_input() {
    let tally = scour::collect().hashtag().tally("#a #b #a");
    assert_eq!(tally.count("hashtag", "#a"), 2);
    assert_eq!(tally.count("hashtag", "#b"), 1);
}

#[test]
#[cfg(feature = "serde")]
fn test_tally_serialization() {
    let tally = scour::collect().hashtag().tally("#a #a");
    let json = serde_json::to_string(&tally).unwrap();
    assert!(json.contains("\"hashtag\""));
    let back: scour::Tally = serde_json::from_str(&json).unwrap();
    assert_eq!(tally, back);
}

#[test]
fn test_pipelines_are_reusable() {
    let cleaner = scour::clean().hashtag();
    assert_eq!(cleaner.execute("#a x"), "x");
    assert_eq!(cleaner.execute("#b y"), "y");

    let func = cleaner.function();
    assert_eq!(func("#c z"), "z");
    assert_eq!(func("#c z"), "z");
}

#[test]
fn test_shared_function_across_threads() {
    let func = scour::clean().hashtag().function();
    let handle = std::thread::spawn(move || func("#a x"));
    assert_eq!(handle.join().unwrap(), "x");
}

//! Property tests for the terminal-form equivalence and whitespace
//! idempotence guarantees

use proptest::prelude::*;

proptest! {
    /// `function()` then call must equal `execute()` for any input
    #[test]
    fn prop_function_equals_execute(text in "\\PC{0,120}") {
        let cleaner = scour::clean().hashtag().nickname().url().emoticons();
        let func = cleaner.function();
        prop_assert_eq!(func(&text), cleaner.execute(&text));
    }

    /// Same equivalence for collect mode
    #[test]
    fn prop_collect_function_equals_execute(text in "\\PC{0,120}") {
        let collector = scour::collect().hashtag().url();
        let func = collector.function();
        prop_assert_eq!(func(&text), collector.execute(&text));
    }

    /// Chaining the whitespace step twice changes nothing
    #[test]
    fn prop_whitespace_is_idempotent(text in "[a-z \\t\\n]{0,80}") {
        let once = scour::clean().whitespace().keep_whitespace().execute(&text);
        let twice = scour::clean()
            .whitespace()
            .whitespace()
            .keep_whitespace()
            .execute(&text);
        prop_assert_eq!(once, twice);
    }

    /// Collect never rewrites its input, whatever the steps
    #[test]
    fn prop_collect_output_is_substrings(text in "\\PC{0,120}") {
        let matches = scour::collect().hashtag().nickname().execute(&text);
        for m in matches {
            prop_assert!(text.contains(&m));
        }
    }
}

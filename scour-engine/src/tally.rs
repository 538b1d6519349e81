//! Counted view of collect-mode matches

use std::collections::BTreeMap;

/// Per-label match counts for one or more inputs
///
/// Labels are step labels (the pattern kind name, or `regexp` for
/// custom steps); under each label every distinct matched string is
/// counted. Ordered maps keep the output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    patterns: BTreeMap<String, BTreeMap<String, usize>>,
}

impl Tally {
    /// Count one match under a label
    pub fn record(&mut self, label: &str, matched: &str) {
        *self
            .patterns
            .entry(label.to_string())
            .or_default()
            .entry(matched.to_string())
            .or_default() += 1;
    }

    /// Fold another tally into this one, summing counts
    pub fn merge(&mut self, other: Tally) {
        for (label, counts) in other.patterns {
            let entry = self.patterns.entry(label).or_default();
            for (matched, count) in counts {
                *entry.entry(matched).or_default() += count;
            }
        }
    }

    /// The count recorded for a matched string under a label
    pub fn count(&self, label: &str, matched: &str) -> usize {
        self.patterns
            .get(label)
            .and_then(|counts| counts.get(matched))
            .copied()
            .unwrap_or(0)
    }

    /// Total matches recorded under a label
    pub fn label_total(&self, label: &str) -> usize {
        self.patterns
            .get(label)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    /// The full label → (match → count) table
    pub fn patterns(&self) -> &BTreeMap<String, BTreeMap<String, usize>> {
        &self.patterns
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut tally = Tally::default();
        tally.record("hashtag", "#fun");
        tally.record("hashtag", "#fun");
        tally.record("hashtag", "#lol");

        assert_eq!(tally.count("hashtag", "#fun"), 2);
        assert_eq!(tally.count("hashtag", "#lol"), 1);
        assert_eq!(tally.count("hashtag", "#other"), 0);
        assert_eq!(tally.label_total("hashtag"), 3);
        assert_eq!(tally.label_total("url"), 0);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut a = Tally::default();
        a.record("url", "https://x.example");
        let mut b = Tally::default();
        b.record("url", "https://x.example");
        b.record("emoticons", ":)");

        a.merge(b);
        assert_eq!(a.count("url", "https://x.example"), 2);
        assert_eq!(a.count("emoticons", ":)"), 1);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let mut tally = Tally::default();
        tally.record("hashtag", "#fun");

        let json = serde_json::to_string(&tally).unwrap();
        let back: Tally = serde_json::from_str(&json).unwrap();
        assert_eq!(tally, back);
    }
}

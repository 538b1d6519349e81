//! Sequential execution of a built pipeline
//!
//! Steps run in insertion order: step N's output is step N+1's input.
//! Pattern classes therefore interact — a punctuation step placed
//! before a hashtag step strips the `#` first, and the remaining word
//! is no longer a hashtag. Chain punctuation last unless that effect
//! is wanted. Execution never mutates the pipeline, so a built
//! pipeline can be run repeatedly against different inputs.

use crate::pipeline::Pipeline;
use crate::tally::Tally;
use crate::Mode;
use log::{debug, trace};

/// Thread the text through every step, then apply the output options
///
/// For remove- and replace-mode pipelines. The final whitespace pass
/// (when enabled) collapses runs to single spaces and trims the ends —
/// once, at the end of the whole pipeline, never between steps.
pub fn apply(pipeline: &Pipeline, text: &str) -> String {
    debug_assert!(
        pipeline.mode() != Mode::Collect,
        "apply is for remove/replace pipelines"
    );
    debug!(
        "applying {} steps to {} bytes of input",
        pipeline.steps().len(),
        text.len()
    );

    let mut current = text.to_string();
    for step in pipeline.steps() {
        current = step.apply(&current);
        trace!("step '{}' left {} bytes", step.label(), current.len());
    }

    if pipeline.normalize_whitespace() {
        current = collapse_whitespace(&current);
    }
    if pipeline.lowercase() {
        current = current.to_lowercase();
    }
    current
}

/// Extract every match from every step, in step order
///
/// For collect-mode pipelines. Each step matches against the original
/// input — the text is never modified — and within a step matches come
/// out in text order.
pub fn extract(pipeline: &Pipeline, text: &str) -> Vec<String> {
    debug_assert_eq!(
        pipeline.mode(),
        Mode::Collect,
        "extract is for collect pipelines"
    );

    let mut matches = Vec::new();
    for step in pipeline.steps() {
        step.collect_into(text, &mut matches);
    }
    matches
}

/// Count every match from every step under its step label
pub fn tally(pipeline: &Pipeline, text: &str) -> Tally {
    let mut tally = Tally::default();
    for step in pipeline.steps() {
        step.tally_into(text, &mut tally);
    }
    tally
}

/// Tally a batch of inputs, summing counts across the whole batch
pub fn tally_batch<I, S>(pipeline: &Pipeline, texts: I) -> Tally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = Tally::default();
    for text in texts {
        total.merge(tally(pipeline, text.as_ref()));
    }
    total
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

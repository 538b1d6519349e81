//! The three chainable pipeline builders

use crate::error::Result;
use scour_engine::{executor, Mode, Pipeline, Step, Tally};
use scour_patterns::PatternKind;

// Built-in steps without a replacement value are total over the closed
// kind set; the two helpers below are the only places that rely on it.
fn builtin(kind: PatternKind, mode: Mode) -> Step {
    Step::from_rule(kind, mode, None).expect("built-in step construction cannot fail")
}

fn replacing(kind: PatternKind, replacement: Option<String>) -> Step {
    Step::from_rule(kind, Mode::Replace, replacement)
        .expect("replace-mode step accepts any replacement")
}

/// Builder for remove-mode pipelines
///
/// Created by [`clean`](crate::clean). Each chainable call appends one
/// step and returns the builder; steps run in insertion order, each
/// one's output feeding the next. By default the final result gets a
/// single whitespace collapse-and-trim pass after the last step.
///
/// Builders are single-writer. Once fully built, the pipeline behind
/// [`execute`](Self::execute) and [`function`](Self::function) is
/// immutable and safe to use from multiple threads.
#[derive(Debug, Clone)]
pub struct Cleaner {
    pipeline: Pipeline,
}

impl Cleaner {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: Pipeline::new(Mode::Remove),
        }
    }

    fn push(mut self, kind: PatternKind) -> Self {
        self.pipeline.push(builtin(kind, Mode::Remove));
        self
    }

    /// Remove `http://` and `https://` URLs
    pub fn url(self) -> Self {
        self.push(PatternKind::Url)
    }

    /// Remove `#hashtag` words
    pub fn hashtag(self) -> Self {
        self.push(PatternKind::Hashtag)
    }

    /// Remove `@nickname` words
    pub fn nickname(self) -> Self {
        self.push(PatternKind::Nickname)
    }

    /// Remove `<...>` spans, including attributed and self-closing tags
    pub fn html(self) -> Self {
        self.push(PatternKind::Html)
    }

    /// Remove ASCII punctuation
    ///
    /// This strips `#` and `@` too, so chain it after hashtag and
    /// nickname steps unless breaking them apart is the intent.
    pub fn punctuation(self) -> Self {
        self.push(PatternKind::Punctuation)
    }

    /// Remove punctuation from a caller-supplied character set
    pub fn punctuation_set(mut self, chars: &str) -> Result<Self> {
        self.pipeline
            .push(Step::punctuation_set(chars, Mode::Remove, None)?);
        Ok(self)
    }

    /// Collapse every whitespace run to a single space
    pub fn whitespace(self) -> Self {
        self.push(PatternKind::Whitespace)
    }

    /// Remove catalog emoji
    pub fn emoji(self) -> Self {
        self.push(PatternKind::Emoji)
    }

    /// Remove catalog emoticons
    ///
    /// Best chained after [`url`](Self::url); some emoticon spellings
    /// (`:/`) overlap URL syntax.
    pub fn emoticons(self) -> Self {
        self.push(PatternKind::Emoticons)
    }

    /// Remove every match of a custom regular expression
    ///
    /// Fails if the pattern does not compile; no step is appended in
    /// that case.
    pub fn regexp(mut self, pattern: &str) -> Result<Self> {
        self.pipeline.push(Step::custom(pattern, Mode::Remove, None)?);
        Ok(self)
    }

    /// Keep whitespace exactly as the steps left it
    ///
    /// Skips the final collapse-and-trim pass.
    pub fn keep_whitespace(mut self) -> Self {
        self.pipeline.set_normalize_whitespace(false);
        self
    }

    /// Lowercase the final result
    pub fn lowercase(mut self) -> Self {
        self.pipeline.set_lowercase(true);
        self
    }

    /// Run the pipeline against one input
    ///
    /// Repeatable: execution never mutates the pipeline.
    pub fn execute(&self, text: &str) -> String {
        executor::apply(&self.pipeline, text)
    }

    /// Snapshot the pipeline into a reusable function
    ///
    /// The closure captures the step sequence by value at the moment of
    /// this call; appending to the builder afterwards does not change a
    /// function that was already returned.
    pub fn function(&self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        let snapshot = self.pipeline.clone();
        move |text| executor::apply(&snapshot, text)
    }
}

/// Builder for replace-mode pipelines
///
/// Created by [`replace`](crate::replace). The no-argument form of each
/// operation substitutes the rule's default token (`TOKEN_URL`,
/// `TOKEN_HASHTAG`, per-entry description tokens for emoji and
/// emoticons, …); the `*_with` form substitutes the given text
/// verbatim.
#[derive(Debug, Clone)]
pub struct Replacer {
    pipeline: Pipeline,
}

impl Replacer {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: Pipeline::new(Mode::Replace),
        }
    }

    fn push(mut self, kind: PatternKind, replacement: Option<String>) -> Self {
        self.pipeline.push(replacing(kind, replacement));
        self
    }

    /// Replace URLs with `TOKEN_URL`
    pub fn url(self) -> Self {
        self.push(PatternKind::Url, None)
    }

    /// Replace URLs with a custom token
    pub fn url_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Url, Some(replacement.into()))
    }

    /// Replace hashtags with `TOKEN_HASHTAG`
    pub fn hashtag(self) -> Self {
        self.push(PatternKind::Hashtag, None)
    }

    /// Replace hashtags with a custom token
    pub fn hashtag_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Hashtag, Some(replacement.into()))
    }

    /// Replace nicknames with `TOKEN_NICKNAME`
    pub fn nickname(self) -> Self {
        self.push(PatternKind::Nickname, None)
    }

    /// Replace nicknames with a custom token
    pub fn nickname_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Nickname, Some(replacement.into()))
    }

    /// Replace `<...>` spans with `TOKEN_HTML`
    pub fn html(self) -> Self {
        self.push(PatternKind::Html, None)
    }

    /// Replace `<...>` spans with a custom token
    pub fn html_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Html, Some(replacement.into()))
    }

    /// Replace ASCII punctuation with a space
    pub fn punctuation(self) -> Self {
        self.push(PatternKind::Punctuation, None)
    }

    /// Replace ASCII punctuation with a custom token
    pub fn punctuation_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Punctuation, Some(replacement.into()))
    }

    /// Replace punctuation from a caller-supplied set with a space
    pub fn punctuation_set(mut self, chars: &str) -> Result<Self> {
        self.pipeline
            .push(Step::punctuation_set(chars, Mode::Replace, None)?);
        Ok(self)
    }

    /// Replace punctuation from a caller-supplied set with a custom token
    pub fn punctuation_set_with(
        mut self,
        chars: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        self.pipeline.push(Step::punctuation_set(
            chars,
            Mode::Replace,
            Some(replacement.into()),
        )?);
        Ok(self)
    }

    /// Replace every whitespace run with a space
    pub fn whitespace(self) -> Self {
        self.push(PatternKind::Whitespace, None)
    }

    /// Replace every whitespace run with a custom token
    pub fn whitespace_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Whitespace, Some(replacement.into()))
    }

    /// Replace each emoji with its description token
    pub fn emoji(self) -> Self {
        self.push(PatternKind::Emoji, None)
    }

    /// Replace every emoji with one custom token
    pub fn emoji_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Emoji, Some(replacement.into()))
    }

    /// Replace each emoticon with its description token
    pub fn emoticons(self) -> Self {
        self.push(PatternKind::Emoticons, None)
    }

    /// Replace every emoticon with one custom token
    pub fn emoticons_with(self, replacement: impl Into<String>) -> Self {
        self.push(PatternKind::Emoticons, Some(replacement.into()))
    }

    /// Replace matches of a custom regular expression with `TOKEN_CUSTOM`
    pub fn regexp(mut self, pattern: &str) -> Result<Self> {
        self.pipeline.push(Step::custom(pattern, Mode::Replace, None)?);
        Ok(self)
    }

    /// Replace matches of a custom regular expression with a custom token
    pub fn regexp_with(mut self, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        self.pipeline.push(Step::custom(
            pattern,
            Mode::Replace,
            Some(replacement.into()),
        )?);
        Ok(self)
    }

    /// Keep whitespace exactly as the steps left it
    pub fn keep_whitespace(mut self) -> Self {
        self.pipeline.set_normalize_whitespace(false);
        self
    }

    /// Lowercase the final result
    pub fn lowercase(mut self) -> Self {
        self.pipeline.set_lowercase(true);
        self
    }

    /// Run the pipeline against one input
    pub fn execute(&self, text: &str) -> String {
        executor::apply(&self.pipeline, text)
    }

    /// Snapshot the pipeline into a reusable function
    pub fn function(&self) -> impl Fn(&str) -> String + Send + Sync + 'static {
        let snapshot = self.pipeline.clone();
        move |text| executor::apply(&snapshot, text)
    }
}

/// Builder for collect-mode pipelines
///
/// Created by [`collect`](crate::collect). Terminal methods extract
/// matches instead of rewriting text: the input is never modified, and
/// matches come out concatenated across steps in step order, in text
/// order within a step.
#[derive(Debug, Clone)]
pub struct Collector {
    pipeline: Pipeline,
}

impl Collector {
    pub(crate) fn new() -> Self {
        Self {
            pipeline: Pipeline::new(Mode::Collect),
        }
    }

    fn push(mut self, kind: PatternKind) -> Self {
        self.pipeline.push(builtin(kind, Mode::Collect));
        self
    }

    /// Collect `http://` and `https://` URLs
    pub fn url(self) -> Self {
        self.push(PatternKind::Url)
    }

    /// Collect `#hashtag` words
    pub fn hashtag(self) -> Self {
        self.push(PatternKind::Hashtag)
    }

    /// Collect `@nickname` words
    pub fn nickname(self) -> Self {
        self.push(PatternKind::Nickname)
    }

    /// Collect `<...>` spans
    pub fn html(self) -> Self {
        self.push(PatternKind::Html)
    }

    /// Collect ASCII punctuation characters
    pub fn punctuation(self) -> Self {
        self.push(PatternKind::Punctuation)
    }

    /// Collect punctuation from a caller-supplied character set
    pub fn punctuation_set(mut self, chars: &str) -> Result<Self> {
        self.pipeline
            .push(Step::punctuation_set(chars, Mode::Collect, None)?);
        Ok(self)
    }

    /// Collect whitespace runs
    pub fn whitespace(self) -> Self {
        self.push(PatternKind::Whitespace)
    }

    /// Collect catalog emoji
    pub fn emoji(self) -> Self {
        self.push(PatternKind::Emoji)
    }

    /// Collect catalog emoticons
    ///
    /// Matches are the emoticon spellings themselves. Note that `:/`
    /// also occurs inside URLs; collect URLs in an earlier pipeline or
    /// accept the overlap.
    pub fn emoticons(self) -> Self {
        self.push(PatternKind::Emoticons)
    }

    /// Collect matches of a custom regular expression
    pub fn regexp(mut self, pattern: &str) -> Result<Self> {
        self.pipeline.push(Step::custom(pattern, Mode::Collect, None)?);
        Ok(self)
    }

    /// Extract every match from the input
    pub fn execute(&self, text: &str) -> Vec<String> {
        executor::extract(&self.pipeline, text)
    }

    /// Snapshot the pipeline into a reusable extraction function
    pub fn function(&self) -> impl Fn(&str) -> Vec<String> + Send + Sync + 'static {
        let snapshot = self.pipeline.clone();
        move |text| executor::extract(&snapshot, text)
    }

    /// Count matches per step label for one input
    pub fn tally(&self, text: &str) -> Tally {
        executor::tally(&self.pipeline, text)
    }

    /// Count matches per step label across a batch of inputs
    pub fn tally_batch<I, S>(&self, texts: I) -> Tally
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        executor::tally_batch(&self.pipeline, texts)
    }
}

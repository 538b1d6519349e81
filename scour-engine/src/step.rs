//! A single configured pipeline stage

use crate::error::{EngineError, Result};
use crate::tally::Tally;
use crate::Mode;
use regex::{Captures, NoExpand, Regex};
use scour_patterns::registry::character_class;
use scour_patterns::{Catalog, PatternError, PatternKind};

/// Default replacement token for custom-regexp steps in replace mode
const TOKEN_CUSTOM: &str = "TOKEN_CUSTOM";

/// What this step does with a match
#[derive(Debug, Clone)]
enum Action {
    /// Substitute the rule's removal text
    Remove(&'static str),
    /// Substitute a fixed token, verbatim
    Replace(String),
    /// Substitute the per-match catalog description token, space-padded
    ReplaceCatalog(Catalog),
    /// Leave the text untouched; matches are read out separately
    Collect,
}

/// One configured pattern-match-and-transform operation
///
/// Immutable once constructed. The matcher is either a clone of a
/// registry rule's compiled regex (cheap, the crate shares the
/// underlying program) or a caller-supplied pattern compiled here.
#[derive(Debug, Clone)]
pub struct Step {
    label: &'static str,
    regex: Regex,
    action: Action,
}

impl Step {
    /// Build a step from a built-in rule
    ///
    /// Fails only with [`EngineError::ModeMismatch`], when a replacement
    /// value is supplied for a remove- or collect-mode step.
    pub fn from_rule(kind: PatternKind, mode: Mode, replacement: Option<String>) -> Result<Self> {
        let rule = scour_patterns::rule(kind);
        let default = match rule.catalog() {
            Some(catalog) => Action::ReplaceCatalog(catalog),
            None => Action::Replace(rule.token().to_string()),
        };
        Ok(Self {
            label: kind.name(),
            regex: rule.regex().clone(),
            action: resolve_action(mode, replacement, rule.removal(), default)?,
        })
    }

    /// Build a step from a caller-supplied regular expression
    ///
    /// Fails with [`PatternError::InvalidPattern`] when the pattern does
    /// not compile; nothing is constructed in that case.
    pub fn custom(pattern: &str, mode: Mode, replacement: Option<String>) -> Result<Self> {
        let regex = compile(pattern)?;
        Ok(Self {
            label: "regexp",
            regex,
            action: resolve_action(
                mode,
                replacement,
                "",
                Action::Replace(TOKEN_CUSTOM.to_string()),
            )?,
        })
    }

    /// Build a punctuation step over a caller-supplied character set
    pub fn punctuation_set(chars: &str, mode: Mode, replacement: Option<String>) -> Result<Self> {
        let regex = compile(&character_class(chars))?;
        Ok(Self {
            label: PatternKind::Punctuation.name(),
            regex,
            action: resolve_action(mode, replacement, "", Action::Replace(" ".to_string()))?,
        })
    }

    /// The step's label, used by collect-mode tallies
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Apply this step to the text, returning the transformed string
    pub(crate) fn apply(&self, text: &str) -> String {
        match &self.action {
            Action::Remove(replacement) => {
                self.regex.replace_all(text, NoExpand(*replacement)).into_owned()
            }
            Action::Replace(token) => self
                .regex
                .replace_all(text, NoExpand(token.as_str()))
                .into_owned(),
            Action::ReplaceCatalog(catalog) => self
                .regex
                .replace_all(text, |caps: &Captures<'_>| {
                    let matched = &caps[0];
                    match catalog.token(matched) {
                        Some(token) => format!(" {token} "),
                        None => matched.to_string(),
                    }
                })
                .into_owned(),
            Action::Collect => text.to_string(),
        }
    }

    /// Append every match in the text to the output sequence
    pub(crate) fn collect_into(&self, text: &str, matches: &mut Vec<String>) {
        matches.extend(self.regex.find_iter(text).map(|m| m.as_str().to_string()));
    }

    /// Count every match in the text under this step's label
    pub(crate) fn tally_into(&self, text: &str, tally: &mut Tally) {
        for m in self.regex.find_iter(text) {
            tally.record(self.label, m.as_str());
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| {
        EngineError::Pattern(PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
    })
}

fn resolve_action(
    mode: Mode,
    replacement: Option<String>,
    removal: &'static str,
    default: Action,
) -> Result<Action> {
    match (mode, replacement) {
        (Mode::Remove, None) => Ok(Action::Remove(removal)),
        (Mode::Collect, None) => Ok(Action::Collect),
        (Mode::Replace, Some(token)) => Ok(Action::Replace(token)),
        (Mode::Replace, None) => Ok(default),
        (mode, Some(_)) => Err(EngineError::ModeMismatch { mode }),
    }
}

//! The ordered step sequence behind a builder

use crate::step::Step;
use crate::Mode;

/// An ordered sequence of steps plus a pipeline-level mode
///
/// Append-only: steps cannot be removed or reordered once pushed, and
/// the mode is fixed at construction. Builders are single-writer; a
/// fully built pipeline is immutable in practice and safe to share
/// across threads for concurrent execution (the executor never mutates
/// it). Cloning takes an independent snapshot — the compiled matchers
/// inside are reference-counted, so a clone is cheap.
#[derive(Debug, Clone)]
pub struct Pipeline {
    mode: Mode,
    steps: Vec<Step>,
    normalize_whitespace: bool,
    lowercase: bool,
}

impl Pipeline {
    /// Create an empty pipeline with the given mode
    ///
    /// Remove and replace pipelines default to normalizing whitespace
    /// once, after the last step; collect pipelines never rewrite text.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            steps: Vec::new(),
            normalize_whitespace: mode != Mode::Collect,
            lowercase: false,
        }
    }

    /// Append one step; insertion order is execution order
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The pipeline's mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The accumulated steps, in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the final result gets a whitespace collapse-and-trim pass
    pub fn normalize_whitespace(&self) -> bool {
        self.normalize_whitespace
    }

    /// Disable or re-enable the final whitespace pass
    pub fn set_normalize_whitespace(&mut self, on: bool) {
        self.normalize_whitespace = on;
    }

    /// Whether the final result is lowercased
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Enable or disable lowercasing of the final result
    pub fn set_lowercase(&mut self, on: bool) {
        self.lowercase = on;
    }
}

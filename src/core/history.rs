//! Step-by-step history of a recognition run.
//!
//! Histories are only recorded when a run is started with tracing
//! enabled; they exist for diagnostics and never influence recognition.

use super::symbol::{StackEffect, Symbol};
use serde::{Deserialize, Serialize};

/// Record of a single applied relation.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{StackEffect, Step, EMPTY};
///
/// let step = Step {
///     position: 0,
///     from: "q0".to_string(),
///     input: '(',
///     stack_top: EMPTY,
///     to: "q1".to_string(),
///     effect: StackEffect::Push('B'),
/// };
/// assert_eq!(step.effect.depth_delta(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Index of the consumed input symbol
    pub position: usize,
    /// State the relation was applied in
    pub from: String,
    /// Input symbol consumed
    pub input: Symbol,
    /// Stack top observed before the effect
    pub stack_top: Symbol,
    /// State entered
    pub to: String,
    /// Effect applied to the stack
    pub effect: StackEffect,
}

/// Ordered history of applied relations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the state of the first step, then the target of every step.
    /// Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.steps.iter().map(|step| step.to.as_str()));
        path
    }

    /// Net change in stack depth over the recorded steps.
    pub fn depth_delta(&self) -> isize {
        self.steps.iter().map(|step| step.effect.depth_delta()).sum()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

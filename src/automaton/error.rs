//! Recognition errors.

use crate::core::Symbol;
use thiserror::Error;

/// Errors that abort a recognition run.
///
/// Each of these points at a structural problem with the automaton
/// relative to the input. Ending in a non-accepting state is not an error;
/// it is reported as `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecognitionError {
    #[error(
        "Automaton stuck in state '{state}' at position {position}: \
         no relation for input '{input}' with stack top '{stack_top}'"
    )]
    Stuck {
        state: String,
        input: Symbol,
        stack_top: Symbol,
        position: usize,
        stack_depth: usize,
    },

    #[error("Stack underflow in state '{state}' at position {position}")]
    StackUnderflow { state: String, position: usize },

    #[error("Relation targets undefined state '{name}'")]
    UndefinedState { name: String },
}

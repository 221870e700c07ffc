//! Recognition: the automaton and its runs.
//!
//! This module is the mutable shell around the immutable core:
//!
//! - [`PushdownAutomaton`] owns the validated state graph.
//! - [`Run`] owns one recognition's current state, stack and position.
//!
//! Recognition is an explicit loop over the input, one relation per
//! symbol, so call-stack usage does not grow with input length.

mod error;
mod machine;
mod run;

pub use error::RecognitionError;
pub use machine::PushdownAutomaton;
pub use run::Run;

pub(crate) use machine::validate_graph;

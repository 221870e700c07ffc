//! Pushdown: a deterministic pushdown automaton simulator
//!
//! A pushdown automaton is a finite-state machine with an unbounded stack.
//! Each transition rule (a [`Relation`]) fires on a combination of the
//! current state, the next input symbol and the symbol on top of the stack,
//! moves to a next state, and pops, pushes or leaves the stack alone.
//!
//! # Core Concepts
//!
//! - **Relation**: an immutable transition rule
//! - **State**: a named node that resolves which of its relations apply
//! - **PushdownAutomaton**: the validated state graph
//! - **Run**: one recognition's current state, stack and position
//!
//! Recognition is deterministic: when several relations apply, the first
//! one declared wins. Running out of input in a non-accepting state
//! rejects with `Ok(false)`; finding no applicable relation mid-input is a
//! [`RecognitionError::Stuck`] error.
//!
//! # Example
//!
//! ```rust
//! use pushdown::pda;
//! use pushdown::core::{EMPTY, WILDCARD};
//!
//! // Balanced parentheses: the outermost '(' pushes a distinct marker so
//! // the matching ')' can return to the accepting state.
//! let automaton = pda! {
//!     initial: "idle";
//!     "idle" [accepting] {
//!         ('(', EMPTY) => ("open", 'B'),
//!     }
//!     "open" {
//!         ('(', WILDCARD) => ("open", 'X'),
//!         (')', 'X') => ("open", WILDCARD),
//!         (')', 'B') => ("idle", WILDCARD),
//!     }
//! }
//! .unwrap();
//!
//! assert_eq!(automaton.recognize("(())"), Ok(true));
//!
//! let mut run = automaton.start();
//! assert_eq!(run.feed("(()".chars()), Ok(false));
//! assert_eq!(run.stack_depth(), 2);
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod definition;

// Re-export commonly used types
pub use automaton::{PushdownAutomaton, RecognitionError, Run};
pub use builder::{AutomatonBuilder, BuildError, DefinitionError};
pub use crate::core::{Relation, StackEffect, State, Symbol, EMPTY, WILDCARD};
pub use definition::{AutomatonDefinition, DefinitionLoadError};

//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the [`pda!`](crate::pda)
//! macro. Both validate the whole declaration at once and report every
//! problem they find, using Stillwater's `Validation` to accumulate them.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::{BuildError, DefinitionError};
pub use machine::AutomatonBuilder;

use crate::automaton::PushdownAutomaton;
use crate::core::{EMPTY, WILDCARD};

/// Create a single-state automaton that accepts any sequence drawn from
/// `alphabet`, leaving the stack untouched.
///
/// # Example
///
/// ```
/// use pushdown::builder::accept_all;
///
/// let automaton = accept_all("ab").unwrap();
/// assert_eq!(automaton.recognize("abba"), Ok(true));
/// assert!(automaton.recognize("abc").is_err());
/// ```
pub fn accept_all(alphabet: &str) -> Result<PushdownAutomaton, BuildError> {
    let builder = AutomatonBuilder::new().initial("q0").state("q0", true);
    alphabet
        .chars()
        .fold(builder, |builder, symbol| {
            builder.relation("q0", symbol, WILDCARD, "q0", EMPTY)
        })
        .build()
}

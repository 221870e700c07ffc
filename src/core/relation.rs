//! Transition rules.
//!
//! A relation is a declarative value: it says which configuration it
//! applies to and what the automaton becomes after applying it. Deciding
//! when to apply it is the job of [`State`](super::State) and the run.

use super::symbol::{matches, StackEffect, Symbol};
use crate::builder::DefinitionError;
use serde::{Deserialize, Serialize};

/// An immutable transition rule.
///
/// Reading left to right: in `current_state`, reading `input` with
/// `stack_top` on the stack, move to `next_state` and apply the stack
/// effect encoded by `next_stack`.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Relation, StackEffect, EMPTY, WILDCARD};
///
/// let relation = Relation::new("q0", 'a', WILDCARD, "q1", EMPTY).unwrap();
///
/// assert!(relation.applies_to('a', 'X'));
/// assert!(!relation.applies_to('b', 'X'));
/// assert_eq!(relation.stack_effect(), StackEffect::Keep);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RelationFields")]
pub struct Relation {
    current_state: String,
    input: Symbol,
    stack_top: Symbol,
    next_state: String,
    next_stack: Symbol,
}

/// Wire shape of a relation; decoding goes through [`Relation::new`].
#[derive(Deserialize)]
struct RelationFields {
    current_state: String,
    input: Symbol,
    stack_top: Symbol,
    next_state: String,
    next_stack: Symbol,
}

impl TryFrom<RelationFields> for Relation {
    type Error = DefinitionError;

    fn try_from(fields: RelationFields) -> Result<Self, Self::Error> {
        Relation::new(
            fields.current_state,
            fields.input,
            fields.stack_top,
            fields.next_state,
            fields.next_stack,
        )
    }
}

impl Relation {
    /// Create a relation.
    ///
    /// Fails with [`DefinitionError::InvalidArgument`] if either state
    /// name is empty.
    pub fn new(
        current_state: impl Into<String>,
        input: Symbol,
        stack_top: Symbol,
        next_state: impl Into<String>,
        next_stack: Symbol,
    ) -> Result<Self, DefinitionError> {
        let current_state = current_state.into();
        let next_state = next_state.into();

        if current_state.is_empty() {
            return Err(DefinitionError::InvalidArgument {
                field: "current_state",
            });
        }
        if next_state.is_empty() {
            return Err(DefinitionError::InvalidArgument {
                field: "next_state",
            });
        }

        Ok(Self {
            current_state,
            input,
            stack_top,
            next_state,
            next_stack,
        })
    }

    pub fn current_state(&self) -> &str {
        &self.current_state
    }

    pub fn input(&self) -> Symbol {
        self.input
    }

    pub fn stack_top(&self) -> Symbol {
        self.stack_top
    }

    pub fn next_state(&self) -> &str {
        &self.next_state
    }

    pub fn next_stack(&self) -> Symbol {
        self.next_stack
    }

    /// Stack effect encoded by the next stack symbol.
    pub fn stack_effect(&self) -> StackEffect {
        StackEffect::from_symbol(self.next_stack)
    }

    /// Check whether this relation applies to the given input symbol and
    /// stack top. Wildcards in the rule match anything.
    pub fn applies_to(&self, input: Symbol, stack_top: Symbol) -> bool {
        matches(self.input, input) && matches(self.stack_top, stack_top)
    }
}

//! Automaton states.
//!
//! A state is a node of the automaton's graph together with the relations
//! leaving it. Resolving which of those relations apply to the current
//! input symbol and stack top lives here, so the recognition loop never
//! inspects a relation list itself.

use super::relation::Relation;
use super::symbol::Symbol;
use crate::builder::DefinitionError;
use serde::{Deserialize, Serialize};

/// A named automaton node owning its outgoing relations.
///
/// Relation order is declaration order and is significant: when several
/// relations apply, the recognition loop picks the first one.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{Relation, State, EMPTY, WILDCARD};
///
/// let state = State::new(
///     "q0",
///     true,
///     vec![
///         Relation::new("q0", 'a', WILDCARD, "q0", EMPTY).unwrap(),
///         Relation::new("q0", 'b', EMPTY, "q0", 'B').unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(state.name(), "q0");
/// assert!(state.is_accepting());
/// assert_eq!(state.query('a', 'X').count(), 1);
/// assert_eq!(state.query('b', 'X').count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateFields")]
pub struct State {
    name: String,
    accepting: bool,
    relations: Vec<Relation>,
}

#[derive(Deserialize)]
struct StateFields {
    name: String,
    accepting: bool,
    relations: Vec<Relation>,
}

impl TryFrom<StateFields> for State {
    type Error = DefinitionError;

    fn try_from(fields: StateFields) -> Result<Self, Self::Error> {
        State::new(fields.name, fields.accepting, fields.relations)
    }
}

impl State {
    /// Create a state.
    ///
    /// Fails with [`DefinitionError::InvalidArgument`] if the name is empty.
    /// Every relation should be declared for this state; the automaton
    /// constructor rejects relations that are not.
    pub fn new(
        name: impl Into<String>,
        accepting: bool,
        relations: Vec<Relation>,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DefinitionError::InvalidArgument { field: "name" });
        }

        Ok(Self {
            name,
            accepting,
            relations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a run ending here accepts its input.
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// All relations leaving this state, in declaration order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Relations that can legally be applied for the given input symbol
    /// and stack top, in declaration order.
    ///
    /// A deterministic automaton yields at most one relation here.
    pub fn query(
        &self,
        input: Symbol,
        stack_top: Symbol,
    ) -> impl Iterator<Item = &Relation> + '_ {
        self.relations
            .iter()
            .filter(move |relation| relation.applies_to(input, stack_top))
    }
}

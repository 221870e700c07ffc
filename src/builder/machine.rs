//! Builder for constructing pushdown automata.

use crate::automaton::{validate_graph, PushdownAutomaton};
use crate::builder::error::{into_result, BuildError, DefinitionError};
use crate::core::{Relation, State, Symbol};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A relation as declared, validated only when the automaton is built.
struct PendingRelation {
    from: String,
    input: Symbol,
    stack_top: Symbol,
    to: String,
    next_stack: Symbol,
}

/// Builder for constructing pushdown automata with a fluent API.
///
/// Relations are attached to their source state in declaration order,
/// which is the order used to break ties during recognition.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::AutomatonBuilder;
/// use pushdown::core::EMPTY;
///
/// let automaton = AutomatonBuilder::new()
///     .initial("q0")
///     .state("q0", false)
///     .state("q1", true)
///     .relation("q0", 'x', EMPTY, "q1", EMPTY)
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.recognize("x"), Ok(true));
/// assert_eq!(automaton.recognize(""), Ok(false));
/// ```
#[derive(Default)]
pub struct AutomatonBuilder {
    initial: Option<String>,
    states: Vec<(String, bool)>,
    relations: Vec<PendingRelation>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>, accepting: bool) -> Self {
        self.states.push((name.into(), accepting));
        self
    }

    /// Declare a relation from `from` to `to`.
    pub fn relation(
        mut self,
        from: impl Into<String>,
        input: Symbol,
        stack_top: Symbol,
        to: impl Into<String>,
        next_stack: Symbol,
    ) -> Self {
        self.relations.push(PendingRelation {
            from: from.into(),
            input,
            stack_top,
            to: to.into(),
            next_stack,
        });
        self
    }

    /// Add a pre-built relation.
    pub fn add_relation(self, relation: Relation) -> Self {
        self.relation(
            relation.current_state(),
            relation.input(),
            relation.stack_top(),
            relation.next_state(),
            relation.next_stack(),
        )
    }

    /// Add multiple pre-built relations at once.
    pub fn relations(self, relations: impl IntoIterator<Item = Relation>) -> Self {
        relations.into_iter().fold(self, Self::add_relation)
    }

    /// Build the automaton.
    ///
    /// Every problem in the declaration is collected before failing: empty
    /// names, duplicate states, missing or unknown initial state, and
    /// relations whose source or target is not a declared state.
    pub fn build(self) -> Result<PushdownAutomaton, BuildError> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

        let mut declared: Vec<(String, bool)> = Vec::with_capacity(self.states.len());
        for (name, accepting) in self.states {
            if name.is_empty() {
                checks.push(Validation::fail(DefinitionError::InvalidArgument {
                    field: "name",
                }));
            } else if declared.iter().any(|(existing, _)| *existing == name) {
                checks.push(Validation::fail(DefinitionError::DuplicateState { name }));
            } else {
                declared.push((name, accepting));
            }
        }

        let relation_count = self.relations.len();
        let mut owned: HashMap<String, Vec<Relation>> = HashMap::new();
        for pending in self.relations {
            let relation = match Relation::new(
                pending.from,
                pending.input,
                pending.stack_top,
                pending.to,
                pending.next_stack,
            ) {
                Ok(relation) => relation,
                Err(problem) => {
                    checks.push(Validation::fail(problem));
                    continue;
                }
            };

            if declared
                .iter()
                .any(|(name, _)| name == relation.current_state())
            {
                owned
                    .entry(relation.current_state().to_string())
                    .or_default()
                    .push(relation);
            } else {
                checks.push(Validation::fail(DefinitionError::UndefinedSource {
                    state: relation.current_state().to_string(),
                }));
            }
        }

        let mut states = HashMap::with_capacity(declared.len());
        for (name, accepting) in declared {
            let relations = owned.remove(&name).unwrap_or_default();
            match State::new(name.clone(), accepting, relations) {
                Ok(state) => {
                    states.insert(name, state);
                }
                Err(problem) => checks.push(Validation::fail(problem)),
            }
        }

        if self.initial.is_none() {
            checks.push(Validation::fail(DefinitionError::MissingInitialState));
        }
        checks.push(validate_graph(&states, self.initial.as_deref()));

        into_result(Validation::all_vec(checks).map(|_| ()))?;
        let initial = self.initial.ok_or(DefinitionError::MissingInitialState)?;

        tracing::debug!(relations = relation_count, "Automaton built");
        Ok(PushdownAutomaton::from_parts(states, initial))
    }
}

//! The pushdown automaton and its recognition entry points.

use crate::automaton::error::RecognitionError;
use crate::automaton::run::Run;
use crate::builder::error::into_result;
use crate::builder::{BuildError, DefinitionError};
use crate::core::{State, Symbol};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A fully assembled pushdown automaton.
///
/// The automaton itself is immutable: it owns the state graph and the name
/// of the initial state. Everything that changes during recognition lives
/// in a [`Run`], so one automaton can serve any number of runs, including
/// runs on different threads.
#[derive(Clone, Debug)]
pub struct PushdownAutomaton {
    states: HashMap<String, State>,
    initial: String,
}

impl PushdownAutomaton {
    /// Create an automaton from a map of states and the initial state name.
    ///
    /// Every key must equal the name of its state, every relation must be
    /// declared for the state that owns it and target a defined state, and
    /// the initial state must be defined. All violations are reported
    /// together.
    pub fn new(
        states: HashMap<String, State>,
        initial: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let initial = initial.into();
        into_result(validate_graph(&states, Some(&initial)))?;
        Ok(Self::from_parts(states, initial))
    }

    /// Assemble an automaton from an already validated graph.
    pub(crate) fn from_parts(states: HashMap<String, State>, initial: String) -> Self {
        tracing::debug!(
            states = states.len(),
            initial = %initial,
            "Automaton assembled"
        );
        Self { states, initial }
    }

    /// Get the initial state.
    pub fn initial_state(&self) -> &State {
        // The constructor guarantees the initial state is present.
        &self.states[&self.initial]
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// All states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values()
    }

    /// Start a fresh run in the initial state with a stack holding only
    /// the bottom marker.
    pub fn start(&self) -> Run<'_> {
        Run::new(self, false)
    }

    /// Start a fresh run that records every applied relation.
    pub fn start_traced(&self) -> Run<'_> {
        Run::new(self, true)
    }

    /// Decide whether the automaton accepts `input`, one `char` per symbol.
    ///
    /// Returns `Ok(false)` when the input is consumed but the final state
    /// does not accept, and an error when no relation applies mid-input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::builder::AutomatonBuilder;
    /// use pushdown::automaton::RecognitionError;
    /// use pushdown::core::{EMPTY, WILDCARD};
    ///
    /// let automaton = AutomatonBuilder::new()
    ///     .initial("q0")
    ///     .state("q0", true)
    ///     .relation("q0", 'a', WILDCARD, "q0", EMPTY)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(automaton.recognize("aaa"), Ok(true));
    /// assert!(matches!(
    ///     automaton.recognize("aab"),
    ///     Err(RecognitionError::Stuck { position: 2, .. })
    /// ));
    /// ```
    pub fn recognize(&self, input: &str) -> Result<bool, RecognitionError> {
        self.recognize_symbols(input.chars())
    }

    /// Decide whether the automaton accepts a sequence of symbols.
    pub fn recognize_symbols<I>(&self, input: I) -> Result<bool, RecognitionError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut run = self.start();
        tracing::debug!(initial = %self.initial, "Recognition started");

        let result = run.feed(input);
        match &result {
            Ok(accepted) => tracing::debug!(
                accepted = *accepted,
                state = %run.current_state().name(),
                consumed = run.position(),
                "Recognition finished"
            ),
            Err(error) => tracing::debug!(
                error = %error,
                consumed = run.position(),
                "Recognition aborted"
            ),
        }
        result
    }
}

/// Check the structural invariants of a state graph, accumulating every
/// violation. The initial state is only checked when one is given.
pub(crate) fn validate_graph(
    states: &HashMap<String, State>,
    initial: Option<&str>,
) -> Validation<(), NonEmptyVec<DefinitionError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

    match initial {
        Some("") => checks.push(Validation::fail(DefinitionError::InvalidArgument {
            field: "initial_state",
        })),
        Some(initial) if !states.contains_key(initial) => {
            checks.push(Validation::fail(DefinitionError::UnknownInitialState {
                name: initial.to_string(),
            }))
        }
        _ => {}
    }

    // Sorted so problems are reported in a stable order.
    let mut entries: Vec<_> = states.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, state) in entries {
        if key.is_empty() || state.name().is_empty() {
            checks.push(Validation::fail(DefinitionError::InvalidArgument {
                field: "name",
            }));
        } else if key != state.name() {
            checks.push(Validation::fail(DefinitionError::MismatchedKey {
                key: key.clone(),
                name: state.name().to_string(),
            }));
        }

        for relation in state.relations() {
            if relation.current_state().is_empty() {
                checks.push(Validation::fail(DefinitionError::InvalidArgument {
                    field: "current_state",
                }));
            } else if relation.current_state() != state.name() {
                checks.push(Validation::fail(DefinitionError::ForeignRelation {
                    state: state.name().to_string(),
                    source_state: relation.current_state().to_string(),
                }));
            }
            if relation.next_state().is_empty() {
                checks.push(Validation::fail(DefinitionError::InvalidArgument {
                    field: "next_state",
                }));
            } else if !states.contains_key(relation.next_state()) {
                checks.push(Validation::fail(DefinitionError::UndefinedTarget {
                    from: state.name().to_string(),
                    to: relation.next_state().to_string(),
                }));
            }
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

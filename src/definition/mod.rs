//! Serializable automaton definitions.
//!
//! A definition is the portable form of a [`PushdownAutomaton`]: plain
//! data that can be written as JSON for humans or as compact binary, and
//! loaded back through the builder so it is validated like any other
//! declaration.
//!
//! # Example
//!
//! ```rust
//! use pushdown::builder::AutomatonBuilder;
//! use pushdown::core::{EMPTY, WILDCARD};
//! use pushdown::definition::AutomatonDefinition;
//!
//! let automaton = AutomatonBuilder::new()
//!     .initial("q0")
//!     .state("q0", true)
//!     .relation("q0", 'a', WILDCARD, "q0", EMPTY)
//!     .build()
//!     .unwrap();
//!
//! let json = AutomatonDefinition::from_automaton(&automaton).to_json().unwrap();
//! let loaded = AutomatonDefinition::from_json(&json)
//!     .unwrap()
//!     .into_automaton()
//!     .unwrap();
//!
//! assert_eq!(loaded.recognize("aa"), Ok(true));
//! ```

use crate::automaton::PushdownAutomaton;
use crate::builder::AutomatonBuilder;
use crate::core::{Relation, State, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::DefinitionLoadError;

/// Version identifier for the definition format
pub const DEFINITION_VERSION: u32 = 1;

/// A relation as stored inside its source state's definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDefinition {
    pub input: Symbol,
    pub stack_top: Symbol,
    pub next_state: String,
    pub next_stack: Symbol,
}

impl From<&Relation> for RelationDefinition {
    fn from(relation: &Relation) -> Self {
        Self {
            input: relation.input(),
            stack_top: relation.stack_top(),
            next_state: relation.next_state().to_string(),
            next_stack: relation.next_stack(),
        }
    }
}

/// A state and the relations leaving it, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    pub name: String,
    #[serde(default)]
    pub accepting: bool,
    #[serde(default)]
    pub relations: Vec<RelationDefinition>,
}

impl From<&State> for StateDefinition {
    fn from(state: &State) -> Self {
        Self {
            name: state.name().to_string(),
            accepting: state.is_accepting(),
            relations: state.relations().iter().map(Into::into).collect(),
        }
    }
}

/// Serializable description of a complete automaton.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    /// Definition format version
    pub version: u32,

    /// Unique definition identifier
    pub id: Uuid,

    /// When the definition was created
    pub created_at: DateTime<Utc>,

    /// Name of the initial state
    pub initial_state: String,

    /// All states
    pub states: Vec<StateDefinition>,
}

impl AutomatonDefinition {
    /// Create an empty definition with the given initial state.
    pub fn new(initial_state: impl Into<String>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            initial_state: initial_state.into(),
            states: Vec::new(),
        }
    }

    /// Capture an automaton. States are sorted by name so the output is
    /// stable; relation order within each state is preserved.
    pub fn from_automaton(automaton: &PushdownAutomaton) -> Self {
        let mut states: Vec<StateDefinition> = automaton.states().map(Into::into).collect();
        states.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            states,
            ..Self::new(automaton.initial_state().name())
        }
    }

    /// Build and validate the automaton this definition describes.
    pub fn into_automaton(self) -> Result<PushdownAutomaton, DefinitionLoadError> {
        self.check_version()?;

        let builder = AutomatonBuilder::new().initial(self.initial_state);
        let builder = self.states.into_iter().fold(builder, |builder, state| {
            let builder = builder.state(state.name.clone(), state.accepting);
            state.relations.into_iter().fold(builder, |builder, relation| {
                builder.relation(
                    state.name.clone(),
                    relation.input,
                    relation.stack_top,
                    relation.next_state,
                    relation.next_stack,
                )
            })
        });

        let automaton = builder.build()?;
        tracing::debug!(id = %self.id, "Definition loaded");
        Ok(automaton)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, DefinitionLoadError> {
        serde_json::to_string(self)
            .map_err(|e| DefinitionLoadError::SerializationFailed(e.to_string()))
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, DefinitionLoadError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionLoadError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON and check the format version.
    pub fn from_json(json: &str) -> Result<Self, DefinitionLoadError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionLoadError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    /// Serialize to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DefinitionLoadError> {
        bincode::serialize(self).map_err(|e| DefinitionLoadError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from bincode and check the format version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DefinitionLoadError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionLoadError::DeserializationFailed(e.to_string()))?;
        definition.check_version()?;
        Ok(definition)
    }

    fn check_version(&self) -> Result<(), DefinitionLoadError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionLoadError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DefinitionError;
    use crate::core::{EMPTY, WILDCARD};

    fn balanced_parens() -> PushdownAutomaton {
        AutomatonBuilder::new()
            .initial("idle")
            .state("idle", true)
            .state("open", false)
            .relation("idle", '(', EMPTY, "open", 'B')
            .relation("open", '(', WILDCARD, "open", 'X')
            .relation("open", ')', 'X', "open", WILDCARD)
            .relation("open", ')', 'B', "idle", WILDCARD)
            .build()
            .unwrap()
    }

    #[test]
    fn from_automaton_captures_states_in_name_order() {
        let definition = AutomatonDefinition::from_automaton(&balanced_parens());

        assert_eq!(definition.version, DEFINITION_VERSION);
        assert_eq!(definition.initial_state, "idle");
        let names: Vec<_> = definition.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["idle", "open"]);

        let open = &definition.states[1];
        assert!(!open.accepting);
        assert_eq!(open.relations.len(), 3);
        assert_eq!(
            open.relations[2],
            RelationDefinition {
                input: ')',
                stack_top: 'B',
                next_state: "idle".to_string(),
                next_stack: WILDCARD,
            }
        );
    }

    #[test]
    fn json_round_trip_preserves_behaviour() {
        let definition = AutomatonDefinition::from_automaton(&balanced_parens());
        let json = definition.to_json_pretty().unwrap();

        let restored = AutomatonDefinition::from_json(&json).unwrap();
        assert_eq!(restored.id, definition.id);
        assert_eq!(restored.states, definition.states);

        let automaton = restored.into_automaton().unwrap();
        assert_eq!(automaton.recognize("(()())"), Ok(true));
        assert_eq!(automaton.recognize("(()"), Ok(false));
    }

    #[test]
    fn binary_round_trip_preserves_behaviour() {
        let definition = AutomatonDefinition::from_automaton(&balanced_parens());
        let bytes = definition.to_bytes().unwrap();

        let restored = AutomatonDefinition::from_bytes(&bytes).unwrap();
        assert_eq!(restored.states, definition.states);
        assert_eq!(restored.created_at, definition.created_at);

        let automaton = restored.into_automaton().unwrap();
        assert_eq!(automaton.recognize("()()"), Ok(true));
    }

    #[test]
    fn handwritten_json_loads_with_defaults() {
        let json = r##"{
            "version": 1,
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "created_at": "2024-01-01T00:00:00Z",
            "initial_state": "q0",
            "states": [
                {
                    "name": "q0",
                    "relations": [
                        { "input": "x", "stack_top": "#", "next_state": "q1", "next_stack": "#" }
                    ]
                },
                { "name": "q1", "accepting": true }
            ]
        }"##;

        let automaton = AutomatonDefinition::from_json(json)
            .unwrap()
            .into_automaton()
            .unwrap();

        assert_eq!(automaton.recognize("x"), Ok(true));
        assert_eq!(automaton.recognize(""), Ok(false));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut definition = AutomatonDefinition::from_automaton(&balanced_parens());
        definition.version = 99;

        let json = definition.to_json().unwrap();
        let result = AutomatonDefinition::from_json(&json);
        assert!(matches!(
            result,
            Err(DefinitionLoadError::UnsupportedVersion {
                found: 99,
                supported: DEFINITION_VERSION
            })
        ));

        assert!(matches!(
            definition.into_automaton(),
            Err(DefinitionLoadError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn malformed_input_fails_to_deserialize() {
        assert!(matches!(
            AutomatonDefinition::from_json("{ not json"),
            Err(DefinitionLoadError::DeserializationFailed(_))
        ));
        assert!(matches!(
            AutomatonDefinition::from_bytes(&[0xff, 0x01]),
            Err(DefinitionLoadError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn invalid_definition_reports_build_problems() {
        let mut definition = AutomatonDefinition::new("q0");
        definition.states.push(StateDefinition {
            name: "q0".to_string(),
            accepting: true,
            relations: vec![RelationDefinition {
                input: 'a',
                stack_top: WILDCARD,
                next_state: "q1".to_string(),
                next_stack: EMPTY,
            }],
        });

        match definition.into_automaton() {
            Err(DefinitionLoadError::Invalid(error)) => {
                assert_eq!(
                    error.problems(),
                    &[DefinitionError::UndefinedTarget {
                        from: "q0".to_string(),
                        to: "q1".to_string()
                    }]
                );
            }
            other => panic!("Expected invalid definition, got {other:?}"),
        }
    }

    #[test]
    fn new_definition_gets_unique_id() {
        let a = AutomatonDefinition::new("q0");
        let b = AutomatonDefinition::new("q0");
        assert_ne!(a.id, b.id);
        assert!(a.states.is_empty());
    }
}

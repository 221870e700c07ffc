//! Build errors for relations, states and automata.

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single structural problem in an automaton definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Required identifier '{field}' is empty")]
    InvalidArgument { field: &'static str },

    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("Initial state '{name}' is not defined")]
    UnknownInitialState { name: String },

    #[error("State '{name}' is defined more than once")]
    DuplicateState { name: String },

    #[error("State '{name}' is stored under key '{key}'")]
    MismatchedKey { key: String, name: String },

    #[error("State '{state}' owns a relation declared for state '{source_state}'")]
    ForeignRelation { state: String, source_state: String },

    #[error("Relation source state '{state}' is not defined")]
    UndefinedSource { state: String },

    #[error("Relation from '{from}' targets undefined state '{to}'")]
    UndefinedTarget { from: String, to: String },
}

/// Every problem found while assembling an automaton.
///
/// Problems are accumulated rather than reported one at a time, so a
/// single failed build lists everything that needs fixing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid automaton definition ({} problem(s)): {}", .problems.len(), summarize(.problems))]
pub struct BuildError {
    problems: Vec<DefinitionError>,
}

impl BuildError {
    pub(crate) fn new(problems: Vec<DefinitionError>) -> Self {
        Self { problems }
    }

    /// All problems, in the order they were found.
    pub fn problems(&self) -> &[DefinitionError] {
        &self.problems
    }
}

/// Collapse accumulated validation results into a build result.
pub(crate) fn into_result(
    validation: Validation<(), NonEmptyVec<DefinitionError>>,
) -> Result<(), BuildError> {
    match validation {
        Validation::Success(()) => Ok(()),
        Validation::Failure(problems) => Err(BuildError::new(problems.iter().cloned().collect())),
    }
}

impl From<DefinitionError> for BuildError {
    fn from(problem: DefinitionError) -> Self {
        Self::new(vec![problem])
    }
}

fn summarize(problems: &[DefinitionError]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_problem() {
        let error = BuildError::new(vec![
            DefinitionError::MissingInitialState,
            DefinitionError::DuplicateState {
                name: "q0".to_string(),
            },
        ]);

        let message = error.to_string();
        assert!(message.contains("2 problem(s)"));
        assert!(message.contains("Initial state not specified"));
        assert!(message.contains("'q0' is defined more than once"));
    }

    #[test]
    fn failures_accumulate_into_build_error() {
        let checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = vec![
            Validation::fail(DefinitionError::MissingInitialState),
            Validation::success(()),
            Validation::fail(DefinitionError::UndefinedSource {
                state: "q9".to_string(),
            }),
        ];

        let error = into_result(Validation::all_vec(checks).map(|_| ())).unwrap_err();
        assert_eq!(
            error.problems(),
            &[
                DefinitionError::MissingInitialState,
                DefinitionError::UndefinedSource {
                    state: "q9".to_string()
                },
            ]
        );
    }

    #[test]
    fn all_successes_build() {
        let checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> =
            vec![Validation::success(()), Validation::success(())];

        assert!(into_result(Validation::all_vec(checks).map(|_| ())).is_ok());
    }

    #[test]
    fn single_problem_converts() {
        let error: BuildError = DefinitionError::InvalidArgument { field: "name" }.into();
        assert_eq!(error.problems().len(), 1);
    }
}

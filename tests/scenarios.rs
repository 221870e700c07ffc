//! End-to-end recognition scenarios through the public API.

use pushdown::core::{EMPTY, WILDCARD};
use pushdown::{
    pda, AutomatonBuilder, AutomatonDefinition, PushdownAutomaton, RecognitionError, Relation,
    State,
};
use std::collections::HashMap;

fn balanced_parens() -> PushdownAutomaton {
    let automaton = pda! {
        initial: "idle";
        "idle" [accepting] {
            ('(', EMPTY) => ("open", 'B'),
        }
        "open" {
            ('(', WILDCARD) => ("open", 'X'),
            (')', 'X') => ("open", WILDCARD),
            (')', 'B') => ("idle", WILDCARD),
        }
    };
    automaton.unwrap()
}

#[test]
fn single_accepting_state_with_wildcard_top() {
    let q0 = State::new(
        "q0",
        true,
        vec![Relation::new("q0", 'a', WILDCARD, "q0", EMPTY).unwrap()],
    )
    .unwrap();
    let automaton = PushdownAutomaton::new(HashMap::from([("q0".to_string(), q0)]), "q0").unwrap();

    assert_eq!(automaton.recognize("aaa"), Ok(true));
    assert_eq!(
        automaton.recognize("aab"),
        Err(RecognitionError::Stuck {
            state: "q0".to_string(),
            input: 'b',
            stack_top: EMPTY,
            position: 2,
            stack_depth: 1,
        })
    );
}

#[test]
fn transition_on_bottom_marker_reaches_accepting_state() {
    let automaton = AutomatonBuilder::new()
        .initial("q0")
        .state("q0", false)
        .state("q1", true)
        .relation("q0", 'x', EMPTY, "q1", EMPTY)
        .build()
        .unwrap();

    assert_eq!(automaton.recognize("x"), Ok(true));
    assert_eq!(automaton.recognize(""), Ok(false));
}

#[test]
fn balanced_parens_count_pushes_and_pops() {
    let automaton = balanced_parens();
    assert_eq!(automaton.recognize("(())"), Ok(true));

    let mut run = automaton.start();
    assert_eq!(run.feed("(()".chars()), Ok(false));
    assert_eq!(run.stack_depth(), 2);

    let mut run = automaton.start();
    let error = run.feed("(()))".chars()).unwrap_err();
    assert!(matches!(
        error,
        RecognitionError::Stuck {
            position: 4,
            stack_depth: 1,
            ..
        }
    ));
    assert_eq!(run.stack_depth(), 1);
}

#[test]
fn long_input_does_not_grow_the_call_stack() {
    let automaton = balanced_parens();
    let depth = 200_000;
    let input: String = "(".repeat(depth) + &")".repeat(depth);

    assert_eq!(automaton.recognize(&input), Ok(true));

    let mut run = automaton.start();
    run.feed("(".repeat(depth).chars()).unwrap();
    assert_eq!(run.stack_depth(), depth + 1);
}

#[test]
fn definition_survives_json_and_binary() {
    let original = balanced_parens();
    let definition = AutomatonDefinition::from_automaton(&original);

    let from_json = AutomatonDefinition::from_json(&definition.to_json().unwrap())
        .unwrap()
        .into_automaton()
        .unwrap();
    let from_bytes = AutomatonDefinition::from_bytes(&definition.to_bytes().unwrap())
        .unwrap()
        .into_automaton()
        .unwrap();

    for input in ["", "()", "(()())", "(()", "())"] {
        let expected = original.recognize(input);
        assert_eq!(from_json.recognize(input), expected, "json: {input}");
        assert_eq!(from_bytes.recognize(input), expected, "binary: {input}");
    }
}

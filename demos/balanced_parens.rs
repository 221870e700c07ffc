//! Balanced Parentheses
//!
//! This example demonstrates recognition with a pushdown automaton.
//!
//! Key concepts:
//! - Declaring an automaton with the `pda!` macro
//! - Accepting vs getting stuck
//! - Inspecting the stack of a run
//! - Saving the automaton as a JSON definition
//!
//! Run with: RUST_LOG=trace cargo run --example balanced_parens

use pushdown::core::{EMPTY, WILDCARD};
use pushdown::{pda, AutomatonDefinition, RecognitionError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Balanced Parentheses Example ===\n");

    let declared = pda! {
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

    let automaton = match declared {
        Ok(automaton) => automaton,
        Err(error) => {
            eprintln!("Failed to build automaton: {error}");
            return;
        }
    };

    for input in ["", "()", "(())()", "(()", "())", "((()))"] {
        let mut run = automaton.start_traced();
        match run.feed(input.chars()) {
            Ok(true) => println!("  {input:>8}  accepted"),
            Ok(false) => println!(
                "  {input:>8}  rejected, {} unclosed",
                run.stack_depth().saturating_sub(1)
            ),
            Err(RecognitionError::Stuck { position, .. }) => {
                println!("  {input:>8}  stuck at position {position}")
            }
            Err(error) => println!("  {input:>8}  error: {error}"),
        }

        if let Some(history) = run.history() {
            println!("            path: {}", history.get_path().join(" -> "));
        }
    }

    println!("\nDefinition:");
    match AutomatonDefinition::from_automaton(&automaton).to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("Failed to serialize definition: {error}"),
    }
}

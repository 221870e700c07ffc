//! Core automaton types.
//!
//! This module contains the immutable building blocks of an automaton:
//! - Symbols, sentinels and stack effects
//! - Relations (transition rules)
//! - States and the resolution of applicable relations
//! - Run histories
//!
//! Nothing in this module mutates; the recognition loop lives in
//! [`crate::automaton`].

mod history;
mod relation;
mod state;
mod symbol;

pub use history::{History, Step};
pub use relation::Relation;
pub use state::State;
pub use symbol::{matches, StackEffect, Symbol, EMPTY, WILDCARD};

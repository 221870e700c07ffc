//! Symbols, the reserved sentinels and the stack effects they encode.
//!
//! Input symbols and stack symbols share one alphabet of `char`s. Two of
//! them are reserved and never part of an automaton's real alphabet:
//!
//! - [`WILDCARD`] (`*`) matches any symbol on the left-hand side of a rule
//!   and means "pop" when used as a rule's next stack symbol.
//! - [`EMPTY`] (`#`) means "leave the stack alone" as a next stack symbol,
//!   and is the marker seeded at the bottom of every run's stack.

use serde::{Deserialize, Serialize};

/// A single input or stack symbol.
pub type Symbol = char;

/// Matches any symbol; as a next stack symbol, pops the stack.
pub const WILDCARD: Symbol = '*';

/// No-op stack symbol and bottom-of-stack marker.
pub const EMPTY: Symbol = '#';

/// Check a rule-side pattern against a concrete symbol.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{matches, WILDCARD};
///
/// assert!(matches('a', 'a'));
/// assert!(matches(WILDCARD, 'z'));
/// assert!(!matches('a', 'b'));
/// ```
pub fn matches(pattern: Symbol, symbol: Symbol) -> bool {
    pattern == WILDCARD || pattern == symbol
}

/// What applying a relation does to the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackEffect {
    /// Remove the top symbol
    Pop,
    /// Leave the stack unchanged
    Keep,
    /// Push a symbol on top
    Push(Symbol),
}

impl StackEffect {
    /// Decode a relation's next stack symbol.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::core::{StackEffect, EMPTY, WILDCARD};
    ///
    /// assert_eq!(StackEffect::from_symbol(WILDCARD), StackEffect::Pop);
    /// assert_eq!(StackEffect::from_symbol(EMPTY), StackEffect::Keep);
    /// assert_eq!(StackEffect::from_symbol('X'), StackEffect::Push('X'));
    /// ```
    pub fn from_symbol(symbol: Symbol) -> Self {
        match symbol {
            WILDCARD => Self::Pop,
            EMPTY => Self::Keep,
            other => Self::Push(other),
        }
    }

    /// Change in stack depth caused by this effect.
    pub fn depth_delta(&self) -> isize {
        match self {
            Self::Pop => -1,
            Self::Keep => 0,
            Self::Push(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_every_symbol() {
        for symbol in ['a', 'Z', '(', EMPTY, WILDCARD] {
            assert!(matches(WILDCARD, symbol));
        }
    }

    #[test]
    fn concrete_pattern_matches_only_itself() {
        assert!(matches('a', 'a'));
        assert!(!matches('a', 'b'));
        assert!(!matches(EMPTY, 'a'));
        assert!(matches(EMPTY, EMPTY));
    }

    #[test]
    fn sentinels_decode_to_pop_and_keep() {
        assert_eq!(StackEffect::from_symbol(WILDCARD), StackEffect::Pop);
        assert_eq!(StackEffect::from_symbol(EMPTY), StackEffect::Keep);
        assert_eq!(StackEffect::from_symbol('('), StackEffect::Push('('));
    }

    #[test]
    fn depth_delta_per_effect() {
        assert_eq!(StackEffect::Pop.depth_delta(), -1);
        assert_eq!(StackEffect::Keep.depth_delta(), 0);
        assert_eq!(StackEffect::Push('X').depth_delta(), 1);
    }

    #[test]
    fn stack_effect_serializes_correctly() {
        let effect = StackEffect::Push('X');
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: StackEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}

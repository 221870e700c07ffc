//! Macros for declarative automaton construction.

/// Declare a pushdown automaton state by state.
///
/// Each state lists the relations leaving it as
/// `(input, stack_top) => (next_state, next_stack)`. States marked
/// `[accepting]` accept. Expands to [`AutomatonBuilder`] calls and
/// evaluates to `Result<PushdownAutomaton, BuildError>`.
///
/// [`AutomatonBuilder`]: crate::builder::AutomatonBuilder
///
/// # Example
///
/// ```
/// use pushdown::pda;
/// use pushdown::core::{EMPTY, WILDCARD};
///
/// let automaton = pda! {
///     initial: "idle";
///     "idle" [accepting] {
///         ('(', EMPTY) => ("open", 'B'),
///     }
///     "open" {
///         ('(', WILDCARD) => ("open", 'X'),
///         (')', 'X') => ("open", WILDCARD),
///         (')', 'B') => ("idle", WILDCARD),
///     }
/// }
/// .unwrap();
///
/// assert_eq!(automaton.recognize("(()())"), Ok(true));
/// assert_eq!(automaton.recognize("(()"), Ok(false));
/// ```
#[macro_export]
macro_rules! pda {
    (
        initial: $initial:expr;
        $(
            $state:literal $([$accepting:ident])? {
                $(
                    ($input:expr, $top:expr) => ($next:expr, $push:expr)
                ),* $(,)?
            }
        )*
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new().initial($initial);
        $(
            let builder = builder.state($state, $crate::pda!(@accepting $($accepting)?));
            $(
                let builder = builder.relation($state, $input, $top, $next, $push);
            )*
        )*
        builder.build()
    }};

    (@accepting accepting) => { true };
    (@accepting) => { false };
}

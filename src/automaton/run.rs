//! Run-scoped recognition state.

use crate::automaton::error::RecognitionError;
use crate::automaton::machine::PushdownAutomaton;
use crate::core::{History, Relation, StackEffect, State, Step, Symbol, EMPTY};

/// One recognition in progress.
///
/// A run borrows its automaton immutably and owns everything that changes
/// while input is consumed: the current state, the stack and the input
/// position. It always starts in the initial state with a stack holding
/// only the [`EMPTY`] bottom marker.
///
/// After a failed [`step`](Run::step) the run keeps the configuration it
/// had when the error was raised.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::AutomatonBuilder;
/// use pushdown::core::{EMPTY, WILDCARD};
///
/// let automaton = AutomatonBuilder::new()
///     .initial("q0")
///     .state("q0", false)
///     .relation("q0", '(', WILDCARD, "q0", 'X')
///     .build()
///     .unwrap();
///
/// let mut run = automaton.start();
/// assert_eq!(run.feed("((".chars()), Ok(false));
/// assert_eq!(run.stack(), &[EMPTY, 'X', 'X']);
/// assert_eq!(run.position(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Run<'a> {
    automaton: &'a PushdownAutomaton,
    current: &'a State,
    stack: Vec<Symbol>,
    position: usize,
    history: Option<History>,
}

impl<'a> Run<'a> {
    pub(crate) fn new(automaton: &'a PushdownAutomaton, record: bool) -> Self {
        Self {
            automaton,
            current: automaton.initial_state(),
            stack: vec![EMPTY],
            position: 0,
            history: record.then(History::new),
        }
    }

    /// Consume one input symbol by applying the first relation that
    /// matches it and the current stack top.
    ///
    /// Returns the applied relation.
    pub fn step(&mut self, symbol: Symbol) -> Result<&'a Relation, RecognitionError> {
        let automaton: &'a PushdownAutomaton = self.automaton;
        let current: &'a State = self.current;
        let top = self.stack_top().ok_or_else(|| self.underflow())?;

        let mut candidates = current.query(symbol, top);
        let Some(relation) = candidates.next() else {
            return Err(RecognitionError::Stuck {
                state: current.name().to_string(),
                input: symbol,
                stack_top: top,
                position: self.position,
                stack_depth: self.stack.len(),
            });
        };
        if candidates.next().is_some() {
            tracing::trace!(
                state = %current.name(),
                input = %symbol,
                stack_top = %top,
                "Several relations apply, using the first declared"
            );
        }

        let next = if relation.next_state() == current.name() {
            current
        } else {
            automaton
                .state(relation.next_state())
                .ok_or_else(|| RecognitionError::UndefinedState {
                    name: relation.next_state().to_string(),
                })?
        };

        let effect = relation.stack_effect();
        match effect {
            StackEffect::Pop => {
                if self.stack.pop().is_none() {
                    return Err(self.underflow());
                }
            }
            StackEffect::Keep => {}
            StackEffect::Push(pushed) => self.stack.push(pushed),
        }

        tracing::trace!(
            position = self.position,
            from = %current.name(),
            to = %next.name(),
            input = %symbol,
            stack_top = %top,
            depth = self.stack.len(),
            "Relation applied"
        );

        if let Some(history) = &mut self.history {
            history.record(Step {
                position: self.position,
                from: current.name().to_string(),
                input: symbol,
                stack_top: top,
                to: next.name().to_string(),
                effect,
            });
        }

        self.current = next;
        self.position += 1;
        Ok(relation)
    }

    /// Consume every symbol of `input`, then report whether the run ends
    /// in an accepting state.
    pub fn feed<I>(&mut self, input: I) -> Result<bool, RecognitionError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        for symbol in input {
            self.step(symbol)?;
        }
        Ok(self.is_accepting())
    }

    pub fn current_state(&self) -> &'a State {
        self.current
    }

    /// Whether the current state accepts.
    pub fn is_accepting(&self) -> bool {
        self.current.is_accepting()
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[Symbol] {
        &self.stack
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stack_top(&self) -> Option<Symbol> {
        self.stack.last().copied()
    }

    /// Number of input symbols consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Recorded steps, if the run was started with tracing.
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    fn underflow(&self) -> RecognitionError {
        RecognitionError::StackUnderflow {
            state: self.current.name().to_string(),
            position: self.position,
        }
    }
}

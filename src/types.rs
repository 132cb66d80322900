//! This module defines the core data structures and types used throughout the pushdown
//! automaton simulator, including states, configurations, traces, decisions and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use thiserror::Error;

/// The end marker appended to every input. It never appears in valid user input.
pub const END_MARKER: char = 'ε';
/// The minimum input length accepted by front-end validation.
pub const MIN_INPUT_LEN: usize = 2;
/// The maximum input length accepted by front-end validation.
pub const MAX_INPUT_LEN: usize = 64;
/// Built-in words offered by the interactive front end.
pub const SAMPLE_INPUTS: [&str; 8] = [
    "racecar", "abba", "level", "hello", "noon", "Madam", "abcba", "ab",
];

/// The states of the palindrome automaton.
///
/// The set is closed: `Push` reads the first half onto the stack, `Skip` discards the
/// middle symbol of odd-length input, `Pop` matches the second half against the stack,
/// and `Accept` is the only terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Push,
    Skip,
    Pop,
    Accept,
}

impl State {
    /// All states, in diagram order.
    pub const ALL: [State; 4] = [State::Push, State::Skip, State::Pop, State::Accept];

    /// Returns the conventional name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            State::Push => "q_push",
            State::Skip => "q_skip",
            State::Pop => "q_pop",
            State::Accept => "q_accept",
        }
    }

    /// Checks if this is the accepting state.
    pub fn is_accepting(&self) -> bool {
        matches!(self, State::Accept)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot of the automaton at one point of the search.
///
/// The stack is an owned copy, so a recorded configuration never changes when the
/// search backtracks. The top of the stack is the last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// The state the automaton is in.
    pub state: State,
    /// Index of the current symbol in the augmented input.
    pub position: usize,
    /// Stack contents, bottom first.
    pub stack: Vec<char>,
}

impl Configuration {
    /// Creates a configuration, copying the given stack.
    pub fn new(state: State, position: usize, stack: &[char]) -> Self {
        Self {
            state,
            position,
            stack: stack.to_vec(),
        }
    }

    /// Returns the symbol on top of the stack, if any.
    pub fn top(&self) -> Option<char> {
        self.stack.last().copied()
    }
}

/// The ordered configurations of an accepting path, from the initial configuration
/// to the `Accept` configuration.
///
/// A trace is empty when the input was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Configuration>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration at `index`.
    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Configuration> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Configuration] {
        &self.steps
    }

    pub(crate) fn push(&mut self, configuration: Configuration) {
        self.steps.push(configuration);
    }

    pub(crate) fn pop(&mut self) -> Option<Configuration> {
        self.steps.pop()
    }
}

impl Index<usize> for Trace {
    type Output = Configuration;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl From<Vec<Configuration>> for Trace {
    fn from(steps: Vec<Configuration>) -> Self {
        Self { steps }
    }
}

/// The outcome of running the automaton on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether an accepting path was found.
    pub accepted: bool,
    /// The accepting path, empty on rejection.
    pub trace: Trace,
}

impl Decision {
    pub(crate) fn accepted(trace: Trace) -> Self {
        Self {
            accepted: true,
            trace,
        }
    }

    pub(crate) fn rejected() -> Self {
        Self {
            accepted: false,
            trace: Trace::new(),
        }
    }
}

/// Reasons a candidate string is refused before it reaches the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input is empty after trimming.
    #[error("String must not be empty.")]
    Empty,
    /// The input is shorter than `MIN_INPUT_LEN`.
    #[error("String must have at least {min} characters.")]
    TooShort { min: usize, len: usize },
    /// The input is longer than `MAX_INPUT_LEN`.
    #[error("String must have at most {max} characters (got {len}).")]
    TooLong { max: usize, len: usize },
    /// The input contains the reserved end marker.
    #[error("String must not contain the end marker '{0}'.")]
    ReservedSymbol(char),
}

/// Represents the errors that can occur outside the automaton itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PdaError {
    /// Indicates an input that failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// Indicates an error related to reading input files.
    #[error("File error: {0}")]
    FileError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&State::Push).unwrap();
        assert_eq!(json, "\"Push\"");

        let state: State = serde_json::from_str("\"Accept\"").unwrap();
        assert_eq!(state, State::Accept);
    }

    #[test]
    fn test_state_names() {
        let names: Vec<_> = State::ALL.iter().map(State::name).collect();
        assert_eq!(names, vec!["q_push", "q_skip", "q_pop", "q_accept"]);
        assert!(State::Accept.is_accepting());
        assert!(!State::Pop.is_accepting());
    }

    #[test]
    fn test_configuration_copies_stack() {
        let mut live = vec!['a', 'b'];
        let snapshot = Configuration::new(State::Push, 2, &live);
        live.pop();

        assert_eq!(snapshot.stack, vec!['a', 'b']);
        assert_eq!(snapshot.top(), Some('b'));
    }

    #[test]
    fn test_trace_random_access() {
        let trace = Trace::from(vec![
            Configuration::new(State::Push, 0, &[]),
            Configuration::new(State::Skip, 1, &[]),
            Configuration::new(State::Accept, 1, &[]),
        ]);

        assert_eq!(trace.len(), 3);
        assert_eq!(trace[1].state, State::Skip);
        assert_eq!(trace.get(3), None);
        assert_eq!(trace.last().map(|c| c.state), Some(State::Accept));
    }

    #[test]
    fn test_error_display() {
        let error = InputError::TooShort { min: 2, len: 1 };
        assert_eq!(error.to_string(), "String must have at least 2 characters.");

        let error: PdaError = InputError::Empty.into();
        assert!(error.to_string().contains("Invalid input"));
    }
}

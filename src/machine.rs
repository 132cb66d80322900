//! This module defines the `PushdownAutomaton` struct, which simulates the nondeterministic
//! palindrome automaton. It explores the transitions depth-first with backtracking and
//! records the accepting path as a `Trace`.

use crate::types::{Configuration, Decision, State, Trace, END_MARKER};
use log::{debug, trace};

/// A pushdown automaton that recognizes palindromes.
///
/// The automaton reads the first half of the input onto its stack in `q_push`, guesses the
/// midpoint (optionally skipping the middle symbol through `q_skip`), and matches the
/// second half against the stack in `q_pop`. Symbols are compared case-insensitively.
///
/// One instance is built per input string. Every call to `decide` runs a fresh search and
/// returns its own trace.
#[derive(Debug, Clone)]
pub struct PushdownAutomaton {
    original: String,
    input: Vec<char>,
}

impl PushdownAutomaton {
    /// Creates a new automaton for `input`.
    ///
    /// Each character is lowercased on its own, so every input character occupies exactly
    /// one tape cell. The end marker is appended once.
    pub fn new(input: &str) -> Self {
        let normalized = input
            .chars()
            .map(fold_case)
            .chain(std::iter::once(END_MARKER))
            .collect();

        Self {
            original: input.to_string(),
            input: normalized,
        }
    }

    /// Returns the input as given to `new`.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the normalized input tape, including the trailing end marker.
    pub fn input(&self) -> &[char] {
        &self.input
    }

    /// Runs the search and returns whether the input is accepted, together with the
    /// accepting path.
    ///
    /// On acceptance the trace starts at `q_push` with position 0 and an empty stack and
    /// ends in `q_accept`. An input without symbols has nothing to push, so the search
    /// starts directly in `q_pop` and the trace is the single accepting configuration.
    /// On rejection the trace is empty.
    pub fn decide(&self) -> Decision {
        debug!("deciding {:?}", self.original);

        let start = if self.is_end(0) {
            State::Pop
        } else {
            State::Push
        };

        let mut stack = Vec::new();
        let mut path = Trace::new();

        let decision = if self.explore(start, 0, &mut stack, &mut path) {
            Decision::accepted(path)
        } else {
            Decision::rejected()
        };

        debug!(
            "{:?} {} after {} steps",
            self.original,
            if decision.accepted {
                "accepted"
            } else {
                "rejected"
            },
            decision.trace.len()
        );

        decision
    }

    /// Returns the symbol at `position` if it has not been read yet, i.e. it lies before
    /// the end marker.
    fn unread(&self, position: usize) -> Option<char> {
        if self.is_end(position) {
            None
        } else {
            self.input.get(position).copied()
        }
    }

    /// Checks if `position` is at or past the end marker.
    fn is_end(&self, position: usize) -> bool {
        position + 1 >= self.input.len()
    }

    /// Explores every branch leaving the configuration `(state, position, stack)` in order
    /// and returns `true` as soon as one reaches `q_accept`.
    ///
    /// On success `path` holds the accepting path. On failure `path` and `stack` are left
    /// exactly as they were on entry.
    fn explore(
        &self,
        state: State,
        position: usize,
        stack: &mut Vec<char>,
        path: &mut Trace,
    ) -> bool {
        match state {
            State::Accept => true,

            State::Push => {
                // (a) read the symbol onto the stack and stay in q_push
                if let Some(symbol) = self.unread(position) {
                    let from = Configuration::new(State::Push, position, stack);
                    stack.push(symbol);
                    if self.branch(path, from, |path| {
                        self.explore(State::Push, position + 1, stack, path)
                    }) {
                        return true;
                    }
                    stack.pop();
                }

                // (b) midpoint of an even-length palindrome
                let from = Configuration::new(State::Push, position, stack);
                if self.branch(path, from, |path| {
                    self.explore(State::Pop, position, stack, path)
                }) {
                    return true;
                }

                // (c) middle symbol of an odd-length palindrome
                if self.unread(position).is_some() {
                    let from = Configuration::new(State::Push, position, stack);
                    if self.branch(path, from, |path| {
                        self.explore(State::Skip, position + 1, stack, path)
                    }) {
                        return true;
                    }
                }

                false
            }

            State::Skip => {
                let from = Configuration::new(State::Skip, position, stack);
                self.branch(path, from, |path| {
                    self.explore(State::Pop, position, stack, path)
                })
            }

            State::Pop => {
                if self.is_end(position) && stack.is_empty() {
                    path.push(Configuration::new(State::Accept, position, stack));
                    trace!("accept at {}", position);
                    return self.explore(State::Accept, position, stack, path);
                }

                match (self.unread(position), stack.last().copied()) {
                    (Some(symbol), Some(top)) if symbol == top => {
                        let from = Configuration::new(State::Pop, position, stack);
                        stack.pop();
                        if self.branch(path, from, |path| {
                            self.explore(State::Pop, position + 1, stack, path)
                        }) {
                            return true;
                        }
                        stack.push(top);
                        false
                    }
                    _ => false,
                }
            }
        }
    }

    /// Records `from`, runs `explore` and removes the record again if the branch fails.
    fn branch(
        &self,
        path: &mut Trace,
        from: Configuration,
        explore: impl FnOnce(&mut Trace) -> bool,
    ) -> bool {
        trace!(
            "enter {} at {} with stack {:?}",
            from.state,
            from.position,
            from.stack
        );
        path.push(from);

        if explore(path) {
            return true;
        }

        if let Some(from) = path.pop() {
            trace!("backtrack {} at {}", from.state, from.position);
        }
        false
    }
}

/// Lowercases a single symbol.
///
/// Multi-character lowercase forms keep only their first character (`İ` becomes `i`) and
/// no context rules apply, so `Σ` is always `σ`.
fn fold_case(symbol: char) -> char {
    symbol.to_lowercase().next().unwrap_or(symbol)
}

/// Decides `input` with a fresh automaton.
///
/// This is a shorthand for `PushdownAutomaton::new(input).decide()`.
pub fn decide(input: &str) -> Decision {
    PushdownAutomaton::new(input).decide()
}

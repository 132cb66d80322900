//! This crate provides the core logic for a pushdown automaton palindrome recognizer.
//! It includes modules for simulating the automaton and recording its accepting path,
//! validating and loading candidate strings, stepping through traces, and formatting
//! results for display.

pub mod cursor;
pub mod input;
pub mod loader;
pub mod machine;
pub mod report;
pub mod types;

/// Re-exports the `TraceCursor` struct from the cursor module.
pub use cursor::TraceCursor;
/// Re-exports the `validate` function from the input module.
pub use input::validate;
/// Re-exports the `InputLoader` struct from the loader module.
pub use loader::InputLoader;
/// Re-exports the automaton and the `decide` shorthand from the machine module.
pub use machine::{decide, PushdownAutomaton};
/// Re-exports the data model and error types from the types module.
pub use types::{
    Configuration, Decision, InputError, PdaError, State, Trace, END_MARKER, MAX_INPUT_LEN,
    MIN_INPUT_LEN, SAMPLE_INPUTS,
};

//! This module turns decisions and configurations into text for the front ends: one-line
//! configuration summaries, an input tape with the current cell marked, verdict lines, and
//! a JSON rendering of a whole decision.

use crate::types::{Configuration, Decision, Trace};
use serde::Serialize;

/// Formats a configuration on one line, stack bottom first.
///
/// ```
/// use palpda::report::format_configuration;
/// use palpda::{Configuration, State};
///
/// let config = Configuration::new(State::Pop, 3, &['a', 'b']);
/// assert_eq!(format_configuration(&config), "q_pop     pos=3  stack=[a, b]");
/// ```
pub fn format_configuration(config: &Configuration) -> String {
    format!(
        "{:<8}  pos={}  stack=[{}]",
        config.state.name(),
        config.position,
        join(config.stack.iter())
    )
}

/// Formats the input tape with the cell at `position` in brackets.
///
/// A position past the tape marks nothing.
pub fn format_tape(tape: &[char], position: usize) -> String {
    tape.iter()
        .enumerate()
        .map(|(i, symbol)| {
            if i == position {
                format!("[{symbol}]")
            } else {
                symbol.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the verdict for `input`.
pub fn format_verdict(input: &str, accepted: bool) -> String {
    if accepted {
        format!("Accepted: {input}")
    } else {
        format!("Rejected: {input}")
    }
}

/// A decision labelled with the input it was made for.
#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    accepted: bool,
    trace: &'a Trace,
}

/// Renders the decision for `input` as one JSON object.
///
/// The object carries the input next to the decision fields, so batch output stays
/// attributable. The trace is a plain array of configurations; states use their variant
/// names.
pub fn to_json(input: &str, decision: &Decision) -> serde_json::Result<String> {
    serde_json::to_string(&Report {
        input,
        accepted: decision.accepted,
        trace: &decision.trace,
    })
}

fn join<'a>(symbols: impl Iterator<Item = &'a char>) -> String {
    symbols
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{decide, PushdownAutomaton};
    use crate::types::State;

    #[test]
    fn test_format_configuration() {
        let config = Configuration::new(State::Push, 0, &[]);
        assert_eq!(format_configuration(&config), "q_push    pos=0  stack=[]");

        let config = Configuration::new(State::Accept, 4, &[]);
        assert_eq!(format_configuration(&config), "q_accept  pos=4  stack=[]");
    }

    #[test]
    fn test_format_tape() {
        let machine = PushdownAutomaton::new("abba");

        assert_eq!(format_tape(machine.input(), 0), "[a] b b a ε");
        assert_eq!(format_tape(machine.input(), 4), "a b b a [ε]");
        assert_eq!(format_tape(machine.input(), 9), "a b b a ε");
    }

    #[test]
    fn test_format_verdict() {
        assert_eq!(format_verdict("noon", true), "Accepted: noon");
        assert_eq!(format_verdict("hello", false), "Rejected: hello");
    }

    #[test]
    fn test_json_shape() {
        let json = to_json("a", &decide("a")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["input"], "a");
        assert_eq!(value["accepted"], true);
        assert_eq!(value["trace"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["trace"][0]["state"], "Push");
        assert_eq!(value["trace"][1]["position"], 1);
        assert_eq!(value["trace"][2]["state"], "Accept");
    }

    #[test]
    fn test_json_rejected() {
        let json = to_json("ab", &decide("ab")).unwrap();
        assert_eq!(json, r#"{"input":"ab","accepted":false,"trace":[]}"#);
    }

    #[test]
    fn test_json_names_each_input() {
        let lines: Vec<String> = ["noon", "hello"]
            .iter()
            .map(|input| to_json(input, &decide(input)).unwrap())
            .collect();

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(first["input"], "noon");
        assert_eq!(first["accepted"], true);
        assert_eq!(second["input"], "hello");
        assert_eq!(second["accepted"], false);
    }

    #[test]
    fn test_json_roundtrip_keeps_stack() {
        let decision = decide("abba");
        let json = to_json("abba", &decision).unwrap();
        let restored: Decision = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, decision);
        assert_eq!(restored.trace[2].stack, vec!['a', 'b']);
    }
}

//! Plain-text rendering of graphs, search events and pairing tables.

use std::fmt::Write as _;

use dovetail_core::{PartialFunction, Window};
use dovetail_engine::{PairVerdict, SearchEvent, Verdict};
use dovetail_types::{number_to_pair, pair_to_number};

/// One line per input of `window`: `f(i) = o in t steps` or `f(i) = undefined`.
pub fn graph(function: &PartialFunction, window: Window) -> String {
    let mut out = String::new();
    for input in window.inputs() {
        match function.outcome(input) {
            Some(result) => {
                let _ = writeln!(out, "{function}({input}) = {result}");
            }
            None => {
                let _ = writeln!(out, "{function}({input}) = undefined");
            }
        }
    }
    out
}

pub fn event(function: &PartialFunction, event: &SearchEvent) -> String {
    match *event {
        SearchEvent::Single { probe, verdict } => {
            let head = format!(
                "Running {function} on input {} for {} steps.",
                probe.input, probe.budget
            );
            match (verdict, probe.output) {
                (Verdict::NotHalted, _) | (_, None) => format!("{head} It does not halt."),
                (Verdict::Rejected, Some(output)) => format!("{head} It halts returning {output}."),
                (Verdict::Accepted, Some(output)) => format!(
                    "{head} It halts returning {output}. Stop predicate accepted, search ends."
                ),
            }
        }
        SearchEvent::Pair { probe, verdict } => {
            let head = format!(
                "Running {function} on inputs {} and {} for {} steps.",
                probe.left, probe.right, probe.budget
            );
            let tail = match verdict {
                PairVerdict::NeitherHalted => "It does not halt on either input.".to_string(),
                PairVerdict::LeftRunning => format!("It does not halt on input {}.", probe.left),
                PairVerdict::RightRunning => format!("It does not halt on input {}.", probe.right),
                PairVerdict::Rejected => "Halts on both, stop predicate rejected.".to_string(),
                PairVerdict::Accepted => {
                    "Halts on both. Stop predicate accepted, search ends.".to_string()
                }
            };
            format!("{head} {tail}")
        }
    }
}

/// `n -> (a, b) -> n` for the first `count` codes.
pub fn pairing_table(count: u64) -> String {
    let mut out = String::new();
    for n in 0..count {
        let (a, b) = number_to_pair(n);
        let back = pair_to_number(a, b).map_or_else(|e| e.to_string(), |code| code.to_string());
        let _ = writeln!(out, "{n} -> ({a}, {b}) -> {back}");
    }
    out
}

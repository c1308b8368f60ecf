//! Structured search progress.

use serde::Serialize;

use dovetail_types::{Nat, Steps};

/// One evaluation `f(input)` under `budget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Probe {
    pub round: u64,
    pub input: Nat,
    pub budget: Steps,
    /// `None` when the function has not halted within `budget`.
    pub output: Option<Nat>,
}

impl Probe {
    #[must_use]
    pub const fn halted(&self) -> bool {
        self.output.is_some()
    }
}

/// Evaluations `f(left)` and `f(right)` under a shared `budget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairProbe {
    pub round: u64,
    pub left: Nat,
    pub right: Nat,
    pub budget: Steps,
    pub left_output: Option<Nat>,
    pub right_output: Option<Nat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NotHalted,
    /// Halted, but the stop predicate said keep going.
    Rejected,
    Accepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairVerdict {
    NeitherHalted,
    LeftRunning,
    RightRunning,
    /// Both halted, but the stop predicate said keep going. Not a failure.
    Rejected,
    Accepted,
}

impl PairProbe {
    /// Verdict before the stop predicate is consulted, `None` if both halted.
    #[must_use]
    pub const fn pending(&self) -> Option<PairVerdict> {
        match (self.left_output, self.right_output) {
            (None, None) => Some(PairVerdict::NeitherHalted),
            (None, Some(_)) => Some(PairVerdict::LeftRunning),
            (Some(_), None) => Some(PairVerdict::RightRunning),
            (Some(_), Some(_)) => None,
        }
    }
}

/// What an observer is told about each probe of a running search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchEvent {
    Single { probe: Probe, verdict: Verdict },
    Pair { probe: PairProbe, verdict: PairVerdict },
}

/// A single-input search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Witness {
    pub input: Nat,
    pub output: Nat,
    /// Exact cost of `f(input)`.
    pub steps: Steps,
    /// Budget of the probe that found it.
    pub budget: Steps,
}

/// A paired-input search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairWitness {
    pub left: Nat,
    pub left_output: Nat,
    pub right: Nat,
    pub right_output: Nat,
    /// Smallest budget under which both inputs halt.
    pub steps: Steps,
    /// Budget of the probe that found it.
    pub budget: Steps,
}

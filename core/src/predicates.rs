//! Kleene's T predicates, expressed through bounded evaluation only.

use dovetail_types::{Nat, Steps};

use crate::PartialFunction;

/// `T3(f, i, t)`: `f` halts on `i` within `t` steps.
#[must_use]
pub fn t3(f: &PartialFunction, input: Nat, budget: Steps) -> bool {
    f.evaluate_within(input, budget).is_some()
}

/// `T4(f, i, o, t)`: `f` halts on `i` within `t` steps and returns `o`.
#[must_use]
pub fn t4(f: &PartialFunction, input: Nat, output: Nat, budget: Steps) -> bool {
    f.evaluate_within(input, budget) == Some(output)
}

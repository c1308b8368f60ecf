//! Shared fixtures for integration tests.

#![allow(dead_code)]

use dovetail_core::{PartialFunction, Steps};

/// f(0) = 1 in 3 steps, f(1) = 7 in 1 step.
pub fn sample_f() -> PartialFunction {
    PartialFunction::from_tuples("f", [(0, 1, 3), (1, 7, 1)]).unwrap()
}

/// g(0) = 5 in 1 step.
pub fn sample_g() -> PartialFunction {
    PartialFunction::from_tuples("g", [(0, 5, 1)]).unwrap()
}

/// Two inputs sharing output 5, the later one slower.
pub fn colliding_pair() -> PartialFunction {
    PartialFunction::from_tuples("h", [(0, 5, 2), (3, 5, 4)]).unwrap()
}

pub fn steps(n: u64) -> Steps {
    Steps::new(n).unwrap()
}

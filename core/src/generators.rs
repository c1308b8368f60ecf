//! Built-in functions: constants, identity, successor and the nowhere-defined function.

use dovetail_types::{Nat, Output, Steps};

use crate::PartialFunction;

/// The constant-`k` function, halting on every input after `steps` steps.
///
/// Named `K{k}_{steps}_steps`; use [`constant_named`] for a custom name.
#[must_use]
pub fn constant(k: Nat, steps: Steps) -> PartialFunction {
    constant_named(format!("K{k}_{steps}_steps"), k, steps)
}

#[must_use]
pub fn constant_named(name: impl Into<String>, k: Nat, steps: Steps) -> PartialFunction {
    let out = Output::new(k, steps);
    PartialFunction::from_rule(name, move |_| Some(out))
}

/// Constant 0 in one step.
#[must_use]
pub fn k0() -> PartialFunction {
    constant_named("K0", 0, Steps::ONE)
}

/// Constant 1 in one step.
#[must_use]
pub fn k1() -> PartialFunction {
    constant_named("K1", 1, Steps::ONE)
}

/// `n -> n` in one step.
#[must_use]
pub fn identity() -> PartialFunction {
    PartialFunction::from_rule("ident", |n| Some(Output::new(n, Steps::ONE)))
}

/// `n -> n + 1` in one step. Undefined at `u64::MAX`, whose successor is unrepresentable.
#[must_use]
pub fn successor() -> PartialFunction {
    PartialFunction::from_rule("succ", |n: Nat| {
        n.checked_add(1).map(|v| Output::new(v, Steps::ONE))
    })
}

/// Never halts on any input.
#[must_use]
pub fn undefined() -> PartialFunction {
    PartialFunction::from_rule("undef", |_| None)
}

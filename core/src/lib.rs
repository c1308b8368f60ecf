//! Partial functions under step-bounded evaluation.
//!
//! A [`PartialFunction`] is a named, immutable rule that either halts on an
//! input with an [`Output`] or never halts. The evaluator resolves calls
//! against an optional step budget; the views list a function's graph over a
//! finite [`Window`]; [`t3`] and [`t4`] are Kleene's halting predicates.
//!
//! ```text
//! PartialFunction::from_graph / from_rule / generators
//!          |
//!          v
//!   evaluate(input, steps, policy) --> t3 / t4 / graph / domain / range
//! ```

mod evaluate;
mod function;
pub mod generators;
mod predicates;
mod views;

pub use dovetail_types::{InvalidArgument, Nat, Output, Steps, Triple, UndefinedPolicy, Window};
pub use evaluate::EvalError;
pub use function::PartialFunction;
pub use predicates::{t3, t4};

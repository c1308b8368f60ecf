use thiserror::Error;

use crate::{Nat, Output};

/// A call or construction was given arguments outside its contract.
///
/// These fail fast at the boundary where the value is built and are never
/// recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("step budget must be at least 1")]
    ZeroSteps,
    #[error("graph lists input {input} more than once")]
    DuplicateEntry { input: Nat },
    #[error("graph maps input {input} to both {first} and {second}")]
    ConflictingEntry {
        input: Nat,
        first: Output,
        second: Output,
    },
    #[error("window [{start}, {start} + {offset}) does not fit in u64")]
    WindowOverflow { start: Nat, offset: Nat },
    #[error("pair ({a}, {b}) has no u64 code")]
    PairingOverflow { a: Nat, b: Nat },
}

//! Positive step budgets.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::InvalidArgument;

/// A number of computation steps, guaranteed to be at least 1.
///
/// Used both for the exact cost of a halting computation and for the ceiling
/// handed to a step-bounded evaluation. A zero budget is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Steps(NonZeroU64);

impl Steps {
    pub const ONE: Steps = Steps(NonZeroU64::MIN);

    pub fn new(value: u64) -> Result<Self, InvalidArgument> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(InvalidArgument::ZeroSteps)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// The next larger budget, or `None` once `u64::MAX` is reached.
    #[must_use]
    pub fn next(self) -> Option<Steps> {
        self.0.checked_add(1).map(Self)
    }

    /// The budget one step smaller, or `None` for [`Steps::ONE`].
    #[must_use]
    pub fn prev(self) -> Option<Steps> {
        NonZeroU64::new(self.0.get() - 1).map(Self)
    }

    /// Whether a computation costing `self` converges within `budget`.
    #[must_use]
    pub fn fits_within(self, budget: Steps) -> bool {
        self <= budget
    }
}

impl TryFrom<u64> for Steps {
    type Error = InvalidArgument;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Steps> for u64 {
    fn from(value: Steps) -> Self {
        value.get()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

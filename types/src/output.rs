use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InvalidArgument, Nat, Steps};

/// Result of a halting computation: its value and the exact steps it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    pub value: Nat,
    pub steps: Steps,
}

impl Output {
    #[must_use]
    pub const fn new(value: Nat, steps: Steps) -> Self {
        Self { value, steps }
    }

    /// Value of the computation if it converges within `budget`.
    #[must_use]
    pub fn within(self, budget: Steps) -> Option<Nat> {
        self.steps.fits_within(budget).then_some(self.value)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} steps", self.value, self.steps)
    }
}

/// One point `(input, output, steps)` of a function's graph.
///
/// Ordered by input first, which is the order graph views are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub input: Nat,
    pub output: Nat,
    pub steps: Steps,
}

impl Triple {
    /// Build a triple from raw numbers, rejecting a zero step count.
    pub fn new(input: Nat, output: Nat, steps: u64) -> Result<Self, InvalidArgument> {
        Ok(Self {
            input,
            output,
            steps: Steps::new(steps)?,
        })
    }

    #[must_use]
    pub const fn result(self) -> Output {
        Output::new(self.output, self.steps)
    }
}

impl TryFrom<(Nat, Nat, u64)> for Triple {
    type Error = InvalidArgument;

    fn try_from((input, output, steps): (Nat, Nat, u64)) -> Result<Self, Self::Error> {
        Self::new(input, output, steps)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.input, self.output, self.steps)
    }
}

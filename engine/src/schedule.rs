//! Enumeration orders over (input, budget) space.
//!
//! A schedule is a restartable, potentially infinite list of slots. Each slot
//! belongs to a numbered round, and every round is finite, so bounding a
//! search by rounds bounds it by probes too.

use serde::{Deserialize, Serialize};

use dovetail_types::{Nat, Pair, Steps, number_to_pair};

/// The order in which a search visits (input, budget) slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    /// Round `t` runs inputs `0..t` with budget `t`.
    #[default]
    Diagonal,
    /// Slot `n` runs `(i, b) = number_to_pair(n)` with budget `b + 1`.
    /// Round `r` is the `r - 1`th diagonal of the pairing.
    Pairing,
}

impl Schedule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diagonal => "diagonal",
            Self::Pairing => "pairing",
        }
    }

    #[must_use]
    pub fn slots(self) -> Slots {
        match self {
            Self::Diagonal => Slots::Diagonal {
                budget: Some(Steps::ONE),
                input: 0,
            },
            Self::Pairing => Slots::Pairing {
                next: Some(Pair::ORIGIN),
            },
        }
    }

    #[must_use]
    pub fn pair_slots(self) -> PairSlots {
        match self {
            Self::Diagonal => PairSlots::Diagonal {
                budget: Some(Steps::ONE),
                left: 0,
                right: 0,
            },
            Self::Pairing => PairSlots::Pairing {
                next: Some(Pair::ORIGIN),
            },
        }
    }
}

/// One scheduled single-input evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub round: u64,
    pub input: Nat,
    pub budget: Steps,
}

/// One scheduled evaluation of two inputs under a shared budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSlot {
    pub round: u64,
    pub left: Nat,
    pub right: Nat,
    pub budget: Steps,
}

#[derive(Debug, Clone)]
pub enum Slots {
    Diagonal { budget: Option<Steps>, input: Nat },
    Pairing { next: Option<Pair> },
}

impl Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        match self {
            Slots::Diagonal { budget, input } => {
                let current = (*budget)?;
                let slot = Slot {
                    round: current.get(),
                    input: *input,
                    budget: current,
                };
                *input += 1;
                if *input >= current.get() {
                    *input = 0;
                    *budget = current.next();
                }
                Some(slot)
            }
            Slots::Pairing { next } => {
                let pair = (*next)?;
                *next = pair.successor();
                // Decoded components stay far below u64::MAX.
                Some(Slot {
                    round: pair.first + pair.second + 1,
                    input: pair.first,
                    budget: Steps::new(pair.second + 1).ok()?,
                })
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum PairSlots {
    Diagonal {
        budget: Option<Steps>,
        left: Nat,
        right: Nat,
    },
    /// Walks `(code, b)` pairs; `code` decodes to the two inputs.
    Pairing { next: Option<Pair> },
}

impl Iterator for PairSlots {
    type Item = PairSlot;

    fn next(&mut self) -> Option<PairSlot> {
        match self {
            PairSlots::Diagonal {
                budget,
                left,
                right,
            } => {
                let current = (*budget)?;
                let slot = PairSlot {
                    round: current.get(),
                    left: *left,
                    right: *right,
                    budget: current,
                };
                *right += 1;
                if *right >= current.get() {
                    *right = 0;
                    *left += 1;
                    if *left >= current.get() {
                        *left = 0;
                        *budget = current.next();
                    }
                }
                Some(slot)
            }
            PairSlots::Pairing { next } => {
                let outer = (*next)?;
                *next = outer.successor();
                let (left, right) = number_to_pair(outer.first);
                Some(PairSlot {
                    round: outer.first + outer.second + 1,
                    left,
                    right,
                    budget: Steps::new(outer.second + 1).ok()?,
                })
            }
        }
    }
}

//! Triangular-number pairing between N and N x N.
//!
//! Pairs are listed by increasing diagonal `a + b`, and within a diagonal by
//! increasing first component:
//!
//! ```text
//! 0 -> (0, 0)   1 -> (0, 1)   2 -> (1, 0)   3 -> (0, 2)   4 -> (1, 1)   5 -> (2, 0) ...
//! ```
//!
//! Every `u64` decodes to a pair. Not every pair of `u64`s has a `u64` code,
//! so encoding is fallible.

use std::{fmt, iter};

use serde::{Deserialize, Serialize};

use crate::{InvalidArgument, Nat};

/// A pair of naturals, identified with its code under the pairing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: Nat,
    pub second: Nat,
}

impl Pair {
    pub const ORIGIN: Pair = Pair { first: 0, second: 0 };

    #[must_use]
    pub const fn new(first: Nat, second: Nat) -> Self {
        Self { first, second }
    }

    pub fn encode(self) -> Result<Nat, InvalidArgument> {
        pair_to_number(self.first, self.second)
    }

    #[must_use]
    pub fn decode(n: Nat) -> Self {
        let (first, second) = number_to_pair(n);
        Self { first, second }
    }

    /// The pair whose code is one larger, or `None` past the last encodable pair.
    ///
    /// Moves one place along the current diagonal, or to the head of the next
    /// diagonal once `second` reaches zero.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        if self.encode().ok()? == Nat::MAX {
            return None;
        }
        if self.second == 0 {
            return Some(Self::new(0, self.first + 1));
        }
        Some(Self::new(self.first + 1, self.second - 1))
    }

    /// All pairs in code order, starting from `(0, 0)`.
    pub fn enumerate() -> impl Iterator<Item = Pair> {
        iter::successors(Some(Self::ORIGIN), |pair| pair.successor())
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Code of `(a, b)`: `d(d + 1) / 2 + a` with `d = a + b`.
pub fn pair_to_number(a: Nat, b: Nat) -> Result<Nat, InvalidArgument> {
    let overflow = || InvalidArgument::PairingOverflow { a, b };
    // d < 2^64 keeps d(d + 1) inside u128.
    let d = u128::from(a.checked_add(b).ok_or_else(overflow)?);
    let code = d * (d + 1) / 2 + u128::from(a);
    Nat::try_from(code).map_err(|_| overflow())
}

/// Inverse of [`pair_to_number`].
#[must_use]
pub fn number_to_pair(n: Nat) -> (Nat, Nat) {
    let n = u128::from(n);
    // Largest d with d(d + 1) / 2 <= n, i.e. (2d + 1)^2 <= 8n + 1.
    let d = ((8 * n + 1).isqrt() - 1) / 2;
    let a = n - d * (d + 1) / 2;
    let b = d - a;
    // d < 2^33, so both components fit.
    (a as Nat, b as Nat)
}

#[must_use]
pub fn pair_first(n: Nat) -> Nat {
    number_to_pair(n).0
}

#[must_use]
pub fn pair_second(n: Nat) -> Nat {
    number_to_pair(n).1
}

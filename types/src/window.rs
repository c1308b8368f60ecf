use std::ops::Range;

use crate::{InvalidArgument, Nat};

/// A finite input window `[start, start + offset)` for graph views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: Nat,
    offset: Nat,
}

impl Window {
    pub const DEFAULT_OFFSET: Nat = 10;

    pub fn new(start: Nat, offset: Nat) -> Result<Self, InvalidArgument> {
        if start.checked_add(offset).is_none() {
            return Err(InvalidArgument::WindowOverflow { start, offset });
        }
        Ok(Self { start, offset })
    }

    #[must_use]
    pub const fn start(self) -> Nat {
        self.start
    }

    #[must_use]
    pub const fn offset(self) -> Nat {
        self.offset
    }

    #[must_use]
    pub const fn end(self) -> Nat {
        self.start + self.offset
    }

    #[must_use]
    pub const fn inputs(self) -> Range<Nat> {
        self.start..self.end()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            start: 0,
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

//! Finite snapshots of a function's graph.
//!
//! Views run every input of a [`Window`] to completion and keep the ones that
//! halt. They describe the window only; nothing here claims anything about
//! inputs outside it.

use std::collections::BTreeSet;

use dovetail_types::{Nat, Triple, Window};

use crate::PartialFunction;

impl PartialFunction {
    /// The triples `(i, o, t)` with `i` in `window` on which the function halts.
    #[must_use]
    pub fn graph(&self, window: Window) -> BTreeSet<Triple> {
        window
            .inputs()
            .filter_map(|input| {
                self.outcome(input).map(|out| Triple {
                    input,
                    output: out.value,
                    steps: out.steps,
                })
            })
            .collect()
    }

    /// Inputs in `window` on which the function halts.
    #[must_use]
    pub fn domain(&self, window: Window) -> BTreeSet<Nat> {
        self.graph(window).into_iter().map(|t| t.input).collect()
    }

    /// Values produced by inputs in `window`.
    #[must_use]
    pub fn range(&self, window: Window) -> BTreeSet<Nat> {
        self.graph(window).into_iter().map(|t| t.output).collect()
    }
}

//! Semi-deciders for two classic sets of functions.
//!
//! Each returns `Some` when the property holds. When it does not, the
//! underlying search runs until its [`SearchLimit`](crate::SearchLimit), or
//! forever without one: absence of a witness cannot be detected in general.

use std::collections::{BTreeSet, HashMap};

use dovetail_types::{Nat, Steps};

use crate::event::{PairWitness, Witness};
use crate::search::Search;

/// Semi-decides `value ∈ range(f)`.
pub fn reaches_value(search: Search<'_>, value: Nat) -> Option<Witness> {
    search.run(|_, output, _| output == value)
}

/// Semi-decides "two distinct inputs produce the same output" by dovetailing
/// over pairs of inputs.
pub fn collides(search: Search<'_>) -> Option<PairWitness> {
    search.run_pairs(|left, left_output, right, right_output, _| {
        left != right && left_output == right_output
    })
}

/// Two distinct inputs found to share an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Input whose output was already on record.
    pub earlier: Nat,
    pub later: Nat,
    pub value: Nat,
    /// Budget of the probe that completed the collision.
    pub budget: Steps,
}

/// Semi-decides the same set as [`collides`] with a single-input search,
/// remembering every `(input, output)` seen so far and stopping at the first
/// output produced by two different inputs.
pub fn collides_recorded(search: Search<'_>) -> Option<Collision> {
    let mut seen: HashMap<Nat, BTreeSet<Nat>> = HashMap::new();
    let mut earlier = None;

    let witness = search.run(|input, output, _| {
        let inputs = seen.entry(output).or_default();
        if let Some(&other) = inputs.iter().find(|&&other| other != input) {
            earlier = Some(other);
            return true;
        }
        tracing::trace!(input, output, "recording output");
        inputs.insert(input);
        false
    })?;

    Some(Collision {
        earlier: earlier?,
        later: witness.input,
        value: witness.output,
        budget: witness.budget,
    })
}

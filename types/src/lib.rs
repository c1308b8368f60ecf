//! Core domain types for dovetail.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! validated step budgets, halting outputs, graph triples, evaluation windows,
//! the undefined-handling policy, and the N <-> N x N pairing encoding.
//! Everything here can be used from any layer of the workspace.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod error;
mod output;
pub mod pairing;
mod policy;
mod steps;
mod window;

pub use error::InvalidArgument;
pub use output::{Output, Triple};
pub use pairing::{Pair, number_to_pair, pair_first, pair_second, pair_to_number};
pub use policy::UndefinedPolicy;
pub use steps::Steps;
pub use window::Window;

/// A natural number: inputs, outputs and pairing codes.
pub type Nat = u64;

//! Dovetailing search over step-bounded partial functions.
//!
//! No finite step budget can be fixed in advance for an arbitrary partial
//! function, so semi-decision procedures interleave inputs and budgets:
//!
//! ```text
//! t = 1:  f(0,1)
//! t = 2:  f(0,2) f(1,2)
//! t = 3:  f(0,3) f(1,3) f(2,3)
//! ...
//! ```
//!
//! Every halting input is eventually run with a large enough budget. The
//! search is a lazy sequence of [`Probe`]s; [`Search`] drives it against a
//! stop predicate, reporting each probe to an optional [`SearchObserver`].
//!
//! Everything runs on the caller's thread. A search with no accepting
//! witness and no [`SearchLimit`] does not return.

mod event;
mod observer;
mod schedule;
mod search;
pub mod semidecide;

pub use event::{PairProbe, PairVerdict, PairWitness, Probe, SearchEvent, Verdict, Witness};
pub use observer::{Recorder, SearchObserver, TracingObserver};
pub use schedule::{PairSlot, PairSlots, Schedule, Slot, Slots};
pub use search::{Search, SearchLimit, dovetail, dovetail_pairs, pair_probes, probes};

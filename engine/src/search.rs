//! Dovetailing drivers.

use dovetail_core::PartialFunction;
use dovetail_types::{Nat, Steps};

use crate::event::{PairProbe, PairVerdict, PairWitness, Probe, SearchEvent, Verdict, Witness};
use crate::observer::SearchObserver;
use crate::schedule::Schedule;

/// How far a search may go before giving up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchLimit {
    /// Run until the stop predicate accepts, possibly forever.
    #[default]
    Unbounded,
    /// Run the first `n` rounds of the schedule at most.
    Rounds(u64),
}

impl SearchLimit {
    #[must_use]
    pub const fn admits(self, round: u64) -> bool {
        match self {
            SearchLimit::Unbounded => true,
            SearchLimit::Rounds(max) => round <= max,
        }
    }
}

/// The lazy sequence of single-input probes of `function` in `schedule` order.
///
/// Restartable: calling this again recomputes the same sequence from scratch.
pub fn probes(function: &PartialFunction, schedule: Schedule) -> impl Iterator<Item = Probe> + '_ {
    schedule.slots().map(move |slot| Probe {
        round: slot.round,
        input: slot.input,
        budget: slot.budget,
        output: function.evaluate_within(slot.input, slot.budget),
    })
}

/// The lazy sequence of paired-input probes of `function` in `schedule` order.
pub fn pair_probes(
    function: &PartialFunction,
    schedule: Schedule,
) -> impl Iterator<Item = PairProbe> + '_ {
    schedule.pair_slots().map(move |slot| PairProbe {
        round: slot.round,
        left: slot.left,
        right: slot.right,
        budget: slot.budget,
        left_output: function.evaluate_within(slot.left, slot.budget),
        right_output: function.evaluate_within(slot.right, slot.budget),
    })
}

/// A configured dovetailing search over one function.
///
/// ```text
/// Search::new(&f)
///     .schedule(Schedule::Diagonal)
///     .limit(SearchLimit::Rounds(64))
///     .observer(&mut recorder)
///     .run(|input, output, budget| output == 7)
/// ```
pub struct Search<'a> {
    function: &'a PartialFunction,
    schedule: Schedule,
    limit: SearchLimit,
    observer: Option<&'a mut dyn SearchObserver>,
}

impl<'a> Search<'a> {
    #[must_use]
    pub fn new(function: &'a PartialFunction) -> Self {
        Self {
            function,
            schedule: Schedule::default(),
            limit: SearchLimit::default(),
            observer: None,
        }
    }

    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn limit(mut self, limit: SearchLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn observer(mut self, observer: &'a mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    fn emit(&mut self, event: SearchEvent) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_event(&event);
        }
    }

    /// Single-input dovetailing.
    ///
    /// Calls `stop(input, output, budget)` on every probe that halts and
    /// returns the first accepted one. `None` means the limit was reached.
    pub fn run<P>(mut self, mut stop: P) -> Option<Witness>
    where
        P: FnMut(Nat, Nat, Steps) -> bool,
    {
        let function = self.function;
        let limit = self.limit;
        tracing::debug!(
            function = %function,
            schedule = self.schedule.as_str(),
            limit = ?limit,
            "dovetailing"
        );

        for probe in probes(function, self.schedule).take_while(|p| limit.admits(p.round)) {
            let verdict = match probe.output {
                Some(output) if stop(probe.input, output, probe.budget) => Verdict::Accepted,
                Some(_) => Verdict::Rejected,
                None => Verdict::NotHalted,
            };
            self.emit(SearchEvent::Single { probe, verdict });

            if let (Verdict::Accepted, Some(output)) = (verdict, probe.output) {
                let steps = function
                    .halting_steps(probe.input, probe.budget)
                    .unwrap_or(probe.budget);
                return Some(Witness {
                    input: probe.input,
                    output,
                    steps,
                    budget: probe.budget,
                });
            }
        }

        tracing::debug!(function = %function, limit = ?limit, "search limit reached");
        None
    }

    /// Paired-input dovetailing.
    ///
    /// Calls `stop(left, left_output, right, right_output, budget)` only when
    /// both inputs halt within the budget. A rejected pair is an ordinary
    /// outcome and the search moves on.
    pub fn run_pairs<P>(mut self, mut stop: P) -> Option<PairWitness>
    where
        P: FnMut(Nat, Nat, Nat, Nat, Steps) -> bool,
    {
        let function = self.function;
        let limit = self.limit;
        tracing::debug!(
            function = %function,
            schedule = self.schedule.as_str(),
            limit = ?limit,
            "dovetailing on pairs"
        );

        for probe in pair_probes(function, self.schedule).take_while(|p| limit.admits(p.round)) {
            let verdict = match (probe.pending(), probe.left_output, probe.right_output) {
                (Some(pending), _, _) => pending,
                (None, Some(lo), Some(ro))
                    if stop(probe.left, lo, probe.right, ro, probe.budget) =>
                {
                    PairVerdict::Accepted
                }
                (None, _, _) => PairVerdict::Rejected,
            };
            self.emit(SearchEvent::Pair { probe, verdict });

            if let (PairVerdict::Accepted, Some(left_output), Some(right_output)) =
                (verdict, probe.left_output, probe.right_output)
            {
                let left_steps = function.halting_steps(probe.left, probe.budget);
                let right_steps = function.halting_steps(probe.right, probe.budget);
                let steps = left_steps.max(right_steps).unwrap_or(probe.budget);
                return Some(PairWitness {
                    left: probe.left,
                    left_output,
                    right: probe.right,
                    right_output,
                    steps,
                    budget: probe.budget,
                });
            }
        }

        tracing::debug!(function = %function, limit = ?limit, "search limit reached");
        None
    }
}

/// Dovetail `function` until `stop(input, output, budget)` accepts.
///
/// With no accepting probe this does not return in practice: the diagonal
/// schedule only runs dry after exhausting every `u64` budget.
pub fn dovetail<P>(function: &PartialFunction, stop: P) -> Option<Witness>
where
    P: FnMut(Nat, Nat, Steps) -> bool,
{
    Search::new(function).run(stop)
}

/// Dovetail `function` over pairs of inputs until `stop` accepts.
///
/// Same termination behaviour as [`dovetail`].
pub fn dovetail_pairs<P>(function: &PartialFunction, stop: P) -> Option<PairWitness>
where
    P: FnMut(Nat, Nat, Nat, Nat, Steps) -> bool,
{
    Search::new(function).run_pairs(stop)
}

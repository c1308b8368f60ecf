//! Observers receive every probe of a search. The search itself prints nothing.

use crate::event::{PairVerdict, SearchEvent, Verdict};

pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent),
{
    fn on_event(&mut self, event: &SearchEvent) {
        self(event);
    }
}

/// Reports probes as `tracing` events: `debug` for ordinary probes, `info`
/// once the stop predicate accepts.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    function: String,
}

impl TracingObserver {
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
        }
    }
}

impl SearchObserver for TracingObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        match *event {
            SearchEvent::Single { probe, verdict } => match verdict {
                Verdict::NotHalted => tracing::debug!(
                    function = %self.function,
                    input = probe.input,
                    budget = probe.budget.get(),
                    "does not halt"
                ),
                Verdict::Rejected => tracing::debug!(
                    function = %self.function,
                    input = probe.input,
                    budget = probe.budget.get(),
                    output = ?probe.output,
                    "halts, predicate false"
                ),
                Verdict::Accepted => tracing::info!(
                    function = %self.function,
                    input = probe.input,
                    budget = probe.budget.get(),
                    output = ?probe.output,
                    "stop predicate accepted"
                ),
            },
            SearchEvent::Pair { probe, verdict } => {
                let message = match verdict {
                    PairVerdict::NeitherHalted => "halts on neither input",
                    PairVerdict::LeftRunning => "left input does not halt",
                    PairVerdict::RightRunning => "right input does not halt",
                    PairVerdict::Rejected => "halts on both, predicate false",
                    PairVerdict::Accepted => "stop predicate accepted",
                };
                if verdict == PairVerdict::Accepted {
                    tracing::info!(
                        function = %self.function,
                        left = probe.left,
                        right = probe.right,
                        budget = probe.budget.get(),
                        "{message}"
                    );
                } else {
                    tracing::debug!(
                        function = %self.function,
                        left = probe.left,
                        right = probe.right,
                        budget = probe.budget.get(),
                        "{message}"
                    );
                }
            }
        }
    }
}

/// Keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Vec<SearchEvent>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl SearchObserver for Recorder {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(*event);
    }
}

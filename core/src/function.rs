//! The partial-function type.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use dovetail_types::{InvalidArgument, Nat, Output, Triple};

type RuleFn = dyn Fn(Nat) -> Option<Output> + Send + Sync;

/// How a function decides what it does on an input.
#[derive(Clone)]
enum Rule {
    /// Finite lookup table; inputs outside it never halt.
    Graph(Arc<BTreeMap<Nat, Output>>),
    /// Closed-form rule; `None` means the input never halts.
    Computed(Arc<RuleFn>),
}

/// A named partial function `N -> N` with a known cost on every halting input.
///
/// Immutable once built. Clones share the same rule, so a function can be
/// handed to any number of evaluations and searches.
#[derive(Clone)]
pub struct PartialFunction {
    name: Arc<str>,
    rule: Rule,
}

impl PartialFunction {
    /// Build a function from its finite graph.
    ///
    /// Each triple `(i, o, t)` means "on input `i` the function returns `o`
    /// after `t` steps". Every input not listed never halts. An input listed
    /// twice is rejected, whether or not the two entries agree.
    pub fn from_graph(
        name: impl Into<String>,
        graph: impl IntoIterator<Item = Triple>,
    ) -> Result<Self, InvalidArgument> {
        let mut table = BTreeMap::new();
        for triple in graph {
            match table.entry(triple.input) {
                Entry::Vacant(slot) => {
                    slot.insert(triple.result());
                }
                Entry::Occupied(slot) if *slot.get() == triple.result() => {
                    return Err(InvalidArgument::DuplicateEntry {
                        input: triple.input,
                    });
                }
                Entry::Occupied(slot) => {
                    return Err(InvalidArgument::ConflictingEntry {
                        input: triple.input,
                        first: *slot.get(),
                        second: triple.result(),
                    });
                }
            }
        }
        Ok(Self {
            name: name.into().into(),
            rule: Rule::Graph(Arc::new(table)),
        })
    }

    /// Convenience over [`PartialFunction::from_graph`] for raw `(i, o, t)` tuples.
    pub fn from_tuples(
        name: impl Into<String>,
        graph: impl IntoIterator<Item = (Nat, Nat, u64)>,
    ) -> Result<Self, InvalidArgument> {
        let triples = graph
            .into_iter()
            .map(Triple::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_graph(name, triples)
    }

    /// Build a function from a computable rule. `None` marks a diverging input.
    pub fn from_rule<F>(name: impl Into<String>, rule: F) -> Self
    where
        F: Fn(Nat) -> Option<Output> + Send + Sync + 'static,
    {
        Self {
            name: name.into().into(),
            rule: Rule::Computed(Arc::new(rule)),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_graph_backed(&self) -> bool {
        matches!(self.rule, Rule::Graph(_))
    }

    /// What the function does on `input` when run to completion.
    ///
    /// This is the oracle behind every evaluation: it answers "never halts"
    /// directly, which no real step-bounded run could.
    #[must_use]
    pub fn outcome(&self, input: Nat) -> Option<Output> {
        match &self.rule {
            Rule::Graph(table) => table.get(&input).copied(),
            Rule::Computed(rule) => rule(input),
        }
    }
}

impl fmt::Debug for PartialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match &self.rule {
            Rule::Graph(table) => format!("graph({} entries)", table.len()),
            Rule::Computed(_) => "rule".to_string(),
        };
        f.debug_struct("PartialFunction")
            .field("name", &self.name)
            .field("rule", &rule)
            .finish()
    }
}

impl fmt::Display for PartialFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

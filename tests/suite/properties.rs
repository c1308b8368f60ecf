//! Property tests over randomly generated finite graphs.

use std::collections::BTreeMap;

use proptest::collection::btree_map;
use proptest::prelude::*;

use dovetail_core::{PartialFunction, Steps, UndefinedPolicy, Window};
use dovetail_engine::{Schedule, Search, SearchLimit, probes};
use dovetail_types::{number_to_pair, pair_to_number};

/// A graph as `input -> (output, steps)`; a map so inputs are unique.
fn graph_strategy() -> impl Strategy<Value = BTreeMap<u64, (u64, u64)>> {
    btree_map(0u64..12, (0u64..20, 1u64..12), 0..6)
}

fn build(graph: &BTreeMap<u64, (u64, u64)>) -> PartialFunction {
    PartialFunction::from_tuples("p", graph.iter().map(|(&i, &(o, t))| (i, o, t))).unwrap()
}

proptest! {
    #[test]
    fn graph_fidelity(graph in graph_strategy(), probe_budget in 1u64..30) {
        let f = build(&graph);
        for (&input, &(output, cost)) in &graph {
            if cost > 1 {
                prop_assert_eq!(f.evaluate(input, Some(cost - 1), UndefinedPolicy::Abort), Ok(None));
            }
            prop_assert_eq!(f.evaluate(input, Some(cost), UndefinedPolicy::Abort), Ok(Some(output)));
            prop_assert_eq!(f.evaluate(input, None, UndefinedPolicy::Abort), Ok(Some(output)));
        }
        for input in (0..12).filter(|i| !graph.contains_key(i)) {
            prop_assert_eq!(
                f.evaluate(input, Some(probe_budget), UndefinedPolicy::Abort),
                Ok(None)
            );
        }
    }

    #[test]
    fn views_match_the_graph(graph in graph_strategy()) {
        let f = build(&graph);
        let window = Window::new(0, 12).unwrap();
        let domain: Vec<u64> = f.domain(window).into_iter().collect();
        prop_assert_eq!(domain, graph.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(f.graph(window).len(), graph.len());
    }

    #[test]
    fn budget_monotonicity(graph in graph_strategy(), input in 0u64..12, t in 1u64..15, extra in 0u64..15) {
        let f = build(&graph);
        let small = f.evaluate_within(input, Steps::new(t).unwrap());
        let large = f.evaluate_within(input, Steps::new(t + extra).unwrap());
        if small.is_some() {
            prop_assert_eq!(small, large);
        }
    }

    #[test]
    fn dovetailing_completeness(graph in graph_strategy()) {
        let f = build(&graph);
        for (&input, &(output, cost)) in &graph {
            let witness = Search::new(&f)
                .limit(SearchLimit::Rounds(30))
                .run(|i, _, _| i == input);
            let witness = witness.expect("every halting input is found");
            prop_assert_eq!(witness.output, output);
            prop_assert_eq!(witness.steps.get(), cost);
            prop_assert_eq!(witness.budget.get(), cost.max(input + 1));
        }
    }

    #[test]
    fn dovetailing_no_false_witness(graph in graph_strategy(), rounds in 1u64..25) {
        let f = build(&graph);
        let witness = Search::new(&f)
            .limit(SearchLimit::Rounds(rounds))
            .run(|_, o, _| o >= 20);
        prop_assert_eq!(witness, None);
    }

    #[test]
    fn probes_agree_across_schedules(graph in graph_strategy()) {
        let f = build(&graph);
        for schedule in [Schedule::Diagonal, Schedule::Pairing] {
            for probe in probes(&f, schedule).take(400) {
                let expected = graph
                    .get(&probe.input)
                    .and_then(|&(o, t)| (t <= probe.budget.get()).then_some(o));
                prop_assert_eq!(probe.output, expected);
            }
        }
    }

    #[test]
    fn pairing_round_trip(n in any::<u64>()) {
        let (a, b) = number_to_pair(n);
        prop_assert_eq!(pair_to_number(a, b).unwrap(), n);
    }
}

#[test]
fn pairing_round_trip_on_a_grid() {
    for a in 0..200 {
        for b in 0..200 {
            assert_eq!(number_to_pair(pair_to_number(a, b).unwrap()), (a, b));
        }
    }
}

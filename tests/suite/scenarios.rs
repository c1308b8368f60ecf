//! End-to-end scenarios across types, core and engine.

use dovetail_core::{EvalError, PartialFunction, UndefinedPolicy, generators, t3, t4};
use dovetail_engine::{Search, SearchLimit, dovetail, dovetail_pairs};
use dovetail_types::{number_to_pair, pair_to_number};

use crate::common::{colliding_pair, sample_f, sample_g, steps};

#[test]
fn graph_backed_budgets() {
    let f = sample_f();
    assert_eq!(f.evaluate(0, Some(2), UndefinedPolicy::Abort), Ok(None));
    assert_eq!(f.evaluate(0, Some(3), UndefinedPolicy::Abort), Ok(Some(1)));
    assert_eq!(f.evaluate(1, Some(1), UndefinedPolicy::Abort), Ok(Some(7)));
}

#[test]
fn constant_twelve_in_three_steps() {
    let k = generators::constant(12, steps(3));
    for n in [0, 1, 2, 1_000] {
        assert_eq!(k.evaluate(n, Some(3), UndefinedPolicy::Abort), Ok(Some(12)));
        assert_eq!(k.evaluate(n, Some(2), UndefinedPolicy::Abort), Ok(None));
    }
}

#[test]
fn pairing_fixed_points() {
    assert_eq!(pair_to_number(0, 0).unwrap(), 0);
    assert_eq!(number_to_pair(0), (0, 0));
    assert_eq!(pair_to_number(2, 1).unwrap(), 8);
    assert_eq!(number_to_pair(8), (2, 1));
}

#[test]
fn dovetail_finds_seven() {
    let f = PartialFunction::from_tuples("f", [(1, 7, 1)]).unwrap();
    let witness = dovetail(&f, |_, o, _| o == 7).unwrap();
    assert_eq!((witness.input, witness.output, witness.steps), (1, 7, steps(1)));
}

#[test]
fn dovetail_pairs_finds_shared_output_at_budget_four() {
    let witness = dovetail_pairs(&colliding_pair(), |i, oi, j, oj, _| i != j && oi == oj).unwrap();
    assert_eq!(
        (
            witness.left,
            witness.left_output,
            witness.right,
            witness.right_output,
            witness.budget
        ),
        (0, 5, 3, 5, steps(4))
    );
}

#[test]
fn kleene_predicates_on_sample_functions() {
    let one = steps(1);
    assert!(!t3(&sample_f(), 0, one));
    assert!(t3(&sample_g(), 0, one));
    assert!(t3(&generators::k0(), 0, one));
    assert!(t3(&generators::identity(), 0, one));
    assert!(!t3(&generators::undefined(), 0, one));

    assert!(t4(&sample_f(), 1, 7, one));
    assert!(!t4(&sample_f(), 0, 1, steps(2)));
    assert!(t4(&sample_f(), 0, 1, steps(3)));
}

#[test]
fn unbounded_call_on_undefined_input() {
    let undef = generators::undefined();
    assert!(matches!(
        undef.evaluate(0, None, UndefinedPolicy::Abort),
        Err(EvalError::Diverges { input: 0, .. })
    ));
    assert_eq!(undef.evaluate(0, None, UndefinedPolicy::Continue), Ok(None));
}

#[test]
fn absent_seven_is_never_reported() {
    let g = sample_g();
    let witness = Search::new(&g)
        .limit(SearchLimit::Rounds(200))
        .run(|_, o, _| o == 7);
    assert_eq!(witness, None);
}

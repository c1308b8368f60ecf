//! The two classic semi-decidable sets, run the way the CLI runs them.

use dovetail_core::generators;
use dovetail_engine::semidecide::{collides, collides_recorded, reaches_value};
use dovetail_engine::{Recorder, Schedule, Search, SearchEvent, SearchLimit, Verdict};

use crate::common::{colliding_pair, sample_f, steps};

#[test]
fn seven_in_range_of_f_and_ident() {
    let f = sample_f();
    assert_eq!(reaches_value(Search::new(&f), 7).unwrap().input, 1);

    let ident = generators::identity();
    assert_eq!(reaches_value(Search::new(&ident), 7).unwrap().input, 7);
}

#[test]
fn both_collision_searches_agree_on_k12() {
    let k = generators::constant(12, steps(3));
    let paired = collides(Search::new(&k)).unwrap();
    let recorded = collides_recorded(Search::new(&k)).unwrap();
    assert_eq!(paired.budget, recorded.budget);
    assert_eq!(paired.left_output, recorded.value);
    assert_ne!(recorded.earlier, recorded.later);
}

#[test]
fn pairing_schedule_semi_decides_the_same_sets() {
    let h = colliding_pair();
    let paired = collides(Search::new(&h).schedule(Schedule::Pairing)).unwrap();
    assert_eq!(paired.left_output, 5);
    let recorded = collides_recorded(Search::new(&h).schedule(Schedule::Pairing)).unwrap();
    assert_eq!(
        (recorded.earlier.min(recorded.later), recorded.earlier.max(recorded.later)),
        (0, 3)
    );
}

#[test]
fn observer_narrates_until_the_witness() {
    let f = sample_f();
    let mut recorder = Recorder::new();
    let witness = reaches_value(
        Search::new(&f)
            .limit(SearchLimit::Rounds(10))
            .observer(&mut recorder),
        7,
    )
    .unwrap();
    assert_eq!(witness.budget, steps(2));
    let last = recorder.events().last().copied();
    assert!(matches!(
        last,
        Some(SearchEvent::Single {
            verdict: Verdict::Accepted,
            ..
        })
    ));
    assert_eq!(recorder.len(), 3);
}

#[test]
fn injective_function_search_is_cut_off_by_the_limit() {
    let succ = generators::successor();
    let mut recorder = Recorder::new();
    let found = collides(
        Search::new(&succ)
            .limit(SearchLimit::Rounds(12))
            .observer(&mut recorder),
    );
    assert_eq!(found, None);
    // Round t probes t * t pairs.
    let expected: usize = (1..=12usize).map(|t| t * t).sum();
    assert_eq!(recorder.len(), expected);
}

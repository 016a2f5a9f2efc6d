//! Shrink-search behavior: fixed candidate precedence, greedy descent,
//! local minimality.

use crate::{int_arb, small_vec_arb};
use tosscheck::*;

/// Greedy halving over a bounded integer lands exactly on the failure
/// boundary: the final candidate always offers `value - 1` as its last
/// shrink child, so local minimality forces the boundary value.
pub fn test_integer_counterexample_is_boundary() {
    for seed in [2u64, 9, 77] {
        let report = check(
            int_arb(0, 10_000),
            |v| *v < 50,
            CheckConfig::default().with_seed(seed).with_num_runs(200),
        );
        assert!(report.failed, "seed {seed} found no value >= 50");
        assert_eq!(report.counterexample, Some(50), "seed {seed}");
    }
}

/// The length invariant holds for every generated instance and for every
/// shrink descendant reached by the search.
pub fn test_array_length_invariant_holds_at_depth() {
    let arb = array(
        int_arb(0, 100),
        ArrayConstraints {
            min_length: Some(2),
            max_length: Some(9),
        },
    )
    .expect("valid constraints");

    // A predicate instrumented to record every length it is shown: the
    // driver only ever evaluates values from the tree, so this observes the
    // invariant along the actual search path.
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let observer = std::rc::Rc::clone(&seen);
    let report = check(
        arb,
        move |v: &Vec<i64>| {
            observer.borrow_mut().push(v.len());
            v.iter().sum::<i64>() < 120
        },
        CheckConfig::default().with_seed(31).with_num_runs(300),
    );
    assert!(report.failed);
    assert!(seen.borrow().iter().all(|len| (2..=9).contains(len)));
    let minimal = report.counterexample.expect("failing run");
    assert!((2..=9).contains(&minimal.len()));
}

/// Re-running the predicate over every immediate shrink child of the final
/// candidate yields only passes: the counterexample is 1-step-locally
/// minimal, though not necessarily globally minimal.
pub fn test_final_candidate_is_one_step_minimal() {
    let predicate = |v: &Vec<i64>| v.iter().sum::<i64>() < 75;
    let report = check(
        small_vec_arb(),
        predicate,
        CheckConfig::default().with_seed(41).with_num_runs(300),
    );
    assert!(report.failed);

    // Recover the final candidate as a shrinkable by replaying the greedy
    // search over the same seeded toss sequence.
    let mut producers = toss(
        small_vec_arb(),
        41,
        SplitMix::from_seed,
        Vec::new(),
        Vec::new(),
    );
    let mut current = None;
    for _ in 0..300 {
        let producer = producers.next().expect("infinite stream");
        let candidate = producer();
        if !predicate(candidate.value_ref()) {
            current = Some(candidate);
            break;
        }
    }
    let mut current = current.expect("failing candidate");
    loop {
        let next = current.shrink().find(|child| !predicate(child.value_ref()));
        match next {
            Some(child) => current = child,
            None => break,
        }
    }

    assert_eq!(Some(current.value()), report.counterexample);
    for child in current.shrink() {
        assert!(
            predicate(child.value_ref()),
            "shrink child {:?} of {:?} still fails",
            child.value(),
            current.value()
        );
    }
}

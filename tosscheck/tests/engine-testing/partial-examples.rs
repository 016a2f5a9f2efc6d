//! Positional override contracts: explicit examples and partial examples.

use crate::int_arb;
use std::rc::Rc;
use tosscheck::*;

/// The second partial example is the one that breaks `x < y`; the first,
/// `(0, 1)`, is not even drawable (0 lies outside the first component's
/// range) but is still substituted verbatim and passes.
pub fn test_fails_on_a_provided_partial_example() {
    let arb = tuple2(int_arb(-100, -1), int_arb(1, 100));
    let partial_examples: Vec<PartialExample<(i64, i64)>> = vec![
        Rc::new(|_| (0, 1)),
        Rc::new(|_| (42, 42)),
        Rc::new(|_| (1, 100)),
    ];
    let report = check(
        arb,
        |(x, y)| x < y,
        CheckConfig::default()
            .with_seed(1234)
            .with_partial_examples(partial_examples),
    );
    assert!(report.failed);
    assert_eq!(report.counterexample, Some((42, 42)));
}

/// When every partial example passes, failures must still be found among
/// the later, unoverridden draws.
pub fn test_fails_after_partial_examples() {
    let arb = tuple2(int_arb(-1000, 1000), int_arb(-1000, 1000));
    let partial_examples: Vec<PartialExample<(i64, i64)>> = vec![
        Rc::new(|_| (0, 1)),
        Rc::new(|_| (42, 43)),
        Rc::new(|_| (1, 100)),
    ];
    let report = check(
        arb,
        |(x, y)| x < y,
        CheckConfig::default()
            .with_seed(5678)
            .with_num_runs(300)
            .with_partial_examples(partial_examples),
    );
    assert!(report.failed);
    let (x, y) = report.counterexample.expect("failing run");
    assert!(x >= y);
}

/// An explicit failing example is reported verbatim before any generation
/// happens, and provided examples are never shrunk.
pub fn test_explicit_examples_win_over_everything() {
    let report = check(
        int_arb(0, 100),
        |v| *v != 64,
        CheckConfig::default()
            .with_seed(9)
            .with_examples(vec![64, 3]),
    );
    assert!(report.failed);
    assert_eq!(report.counterexample, Some(64));
    assert_eq!(report.num_runs, 1);
    assert_eq!(report.num_shrinks, 0);
}

//! Override generated draws positionally while keeping shrinking intact.
//!
//! Run with: cargo run --example partial-examples

use std::rc::Rc;
use tosscheck_core::*;

fn main() -> tosscheck_core::Result<()> {
    let pairs = tuple2(
        Rc::new(integer(-100, -1)?) as Rc<dyn Arbitrary<i64>>,
        Rc::new(integer(1, 100)?) as Rc<dyn Arbitrary<i64>>,
    );

    // The first three generated draws are replaced verbatim; (42, 42) is
    // where `x < y` breaks, so it becomes the counterexample even though
    // the arbitrary could never draw it.
    let partial_examples: Vec<PartialExample<(i64, i64)>> = vec![
        Rc::new(|_| (0, 1)),
        Rc::new(|_| (42, 42)),
        Rc::new(|_| (1, 100)),
    ];

    let report = check(
        pairs,
        |(x, y)| x < y,
        CheckConfig::default().with_partial_examples(partial_examples),
    );
    println!("{report}");
    Ok(())
}

//! Check a failing property over vectors and print the shrunk report.
//!
//! Run with: cargo run --example shrink-report

use std::rc::Rc;
use tosscheck_core::*;

fn main() -> tosscheck_core::Result<()> {
    let elements: Rc<dyn Arbitrary<i64>> = Rc::new(integer(0, 1000)?);
    let vectors = array(
        elements,
        ArrayConstraints {
            min_length: Some(1),
            max_length: Some(20),
        },
    )?;

    // Claim: short vectors of small numbers sum below 50. False, and the
    // engine shrinks the refutation down to a locally-minimal one.
    let report = check(
        vectors,
        |v: &Vec<i64>| v.iter().sum::<i64>() < 50,
        CheckConfig::default(),
    );
    println!("{report}");

    // The reported seed replays the identical run.
    let replay_seed = report.seed;
    let replayed = check(
        array(
            Rc::new(integer(0, 1000)?) as Rc<dyn Arbitrary<i64>>,
            ArrayConstraints {
                min_length: Some(1),
                max_length: Some(20),
            },
        )?,
        |v: &Vec<i64>| v.iter().sum::<i64>() < 50,
        CheckConfig::default().with_seed(replay_seed),
    );
    println!("replayed:");
    println!("{replayed}");
    Ok(())
}

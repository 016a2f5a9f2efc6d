//! Nothing is generated, and no thunk runs, before the consumer asks.

use std::cell::Cell;
use std::rc::Rc;
use tosscheck::*;

/// An arbitrary that counts how many times it actually generates.
struct CountingArbitrary {
    calls: Rc<Cell<usize>>,
}

impl Arbitrary<i64> for CountingArbitrary {
    fn generate(&self, rng: &mut Random) -> Shrinkable<i64> {
        self.calls.set(self.calls.get() + 1);
        Shrinkable::terminal(rng.next_int(0, 9))
    }

    fn with_bias(&self, _freq: u64) -> Rc<dyn Arbitrary<i64>> {
        Rc::new(CountingArbitrary {
            calls: Rc::clone(&self.calls),
        })
    }
}

/// An early-terminating search must not pay for unused draws: pulling a
/// producer costs nothing until it is invoked, and producers past the
/// failure are never pulled.
pub fn test_unpulled_producers_cost_nothing() {
    let calls = Rc::new(Cell::new(0));
    let arb = Rc::new(CountingArbitrary {
        calls: Rc::clone(&calls),
    });

    let mut producers = toss(
        Rc::clone(&arb) as Rc<dyn Arbitrary<i64>>,
        77,
        SplitMix::from_seed,
        Vec::new(),
        Vec::new(),
    );
    let first = producers.next().expect("infinite stream");
    let second = producers.next().expect("infinite stream");
    assert_eq!(calls.get(), 0, "pulling producers must not generate");
    let _ = first();
    assert_eq!(calls.get(), 1);
    let _ = second();
    assert_eq!(calls.get(), 2);

    // A failing run stops generating at the failure.
    calls.set(0);
    let report = check(
        arb,
        |_| false,
        CheckConfig::default().with_seed(78).with_num_runs(1000),
    );
    assert!(report.failed);
    assert_eq!(calls.get(), 1, "draws after the first failure were paid for");
}

/// `make_lazy` thunks stay untouched until the first traversal step, even
/// through `join`.
pub fn test_deferred_streams_stay_deferred() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let deferred = make_lazy(move || {
        counter.set(counter.get() + 1);
        Stream::of(0..3)
    });
    let joined = Stream::of(100..103).join(deferred);
    assert_eq!(calls.get(), 0);
    let values: Vec<i64> = joined.collect();
    assert_eq!(values, vec![100, 101, 102, 0, 1, 2]);
    assert_eq!(calls.get(), 1);

    // Shrink trees lean on the same mechanism: a composite shrinkable's
    // recursive tail family stays a thunk until the search walks past the
    // earlier families, so building and partially scanning the stream is
    // cheap even for deep trees.
    let shrinkable = {
        let mut rng = Random::new(SplitMix::from_seed(3));
        crate::small_vec_arb().generate(&mut rng)
    };
    let mut children = shrinkable.shrink();
    if let Some(first) = children.next() {
        assert!(first.value().len() <= shrinkable.value().len());
    }
}

//! Pair arbitrary with per-component shrinking.

use crate::arbitrary::Arbitrary;
use crate::random::Random;
use crate::shrinkable::Shrinkable;
use std::rc::Rc;

/// Arbitrary for 2-tuples: both components are drawn sequentially from the
/// same generator cursor.
pub struct Tuple2Arbitrary<A, B> {
    first: Rc<dyn Arbitrary<A>>,
    second: Rc<dyn Arbitrary<B>>,
}

impl<A, B> Clone for Tuple2Arbitrary<A, B> {
    fn clone(&self) -> Self {
        Tuple2Arbitrary {
            first: Rc::clone(&self.first),
            second: Rc::clone(&self.second),
        }
    }
}

/// Pairs of values from `first` and `second`.
pub fn tuple2<A, B>(
    first: Rc<dyn Arbitrary<A>>,
    second: Rc<dyn Arbitrary<B>>,
) -> Rc<dyn Arbitrary<(A, B)>>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    Rc::new(Tuple2Arbitrary { first, second })
}

/// Shrink candidates: first component shrunk with the second held fixed,
/// then the second shrunk with the first held fixed, each child re-paired
/// recursively so the full pair contract applies at every depth.
fn pair_wrapper<A, B>(first: Shrinkable<A>, second: Shrinkable<B>) -> Shrinkable<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let value = (first.value(), second.value());
    Shrinkable::new(value, move || {
        let held_second = second.clone();
        let shrink_first = first
            .shrink()
            .map(move |f| pair_wrapper(f, held_second.clone()));
        let held_first = first.clone();
        let shrink_second = second
            .shrink()
            .map(move |s| pair_wrapper(held_first.clone(), s));
        shrink_first.join(shrink_second)
    })
}

impl<A, B> Arbitrary<(A, B)> for Tuple2Arbitrary<A, B>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    fn generate(&self, rng: &mut Random) -> Shrinkable<(A, B)> {
        let first = self.first.generate(rng);
        let second = self.second.generate(rng);
        pair_wrapper(first, second)
    }

    fn with_bias(&self, freq: u64) -> Rc<dyn Arbitrary<(A, B)>> {
        Rc::new(Tuple2Arbitrary {
            first: self.first.with_bias(freq),
            second: self.second.with_bias(freq),
        })
    }
}

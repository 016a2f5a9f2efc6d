//! The `Arbitrary` capability and the generic bias combinator.

use crate::random::Random;
use crate::shrinkable::Shrinkable;
use std::rc::Rc;

/// The capability to produce random shrinkable instances of `T`.
///
/// Implementations are stateless: `generate` must be a pure function of the
/// incoming generator state, so that replaying a seed replays the exact same
/// instance. `with_bias` returns a new arbitrary and never mutates `self`.
///
/// Arbitraries compose through `Rc<dyn Arbitrary<T>>` handles; composite
/// arbitraries hold their element arbitraries that way.
pub trait Arbitrary<T> {
    /// Draw one instance, together with its lazy shrink tree.
    fn generate(&self, rng: &mut Random) -> Shrinkable<T>;

    /// A variant of this arbitrary skewed toward edge cases.
    ///
    /// Roughly one draw in `freq` comes from the biased distribution; the
    /// rest are unchanged.
    fn with_bias(&self, freq: u64) -> Rc<dyn Arbitrary<T>>;
}

/// Applies a biased variant of `arb` with probability `1/freq`.
///
/// The biased variant is rebuilt from `biased_builder` on demand so that
/// recursive arbitraries do not have to materialize their biased form up
/// front.
struct BiasedArbitraryWrapper<T> {
    freq: u64,
    arb: Rc<dyn Arbitrary<T>>,
    biased_builder: Rc<dyn Fn() -> Rc<dyn Arbitrary<T>>>,
}

impl<T: 'static> Arbitrary<T> for BiasedArbitraryWrapper<T> {
    fn generate(&self, rng: &mut Random) -> Shrinkable<T> {
        if rng.next_int(1, self.freq as i64) == 1 {
            (self.biased_builder)().generate(rng)
        } else {
            self.arb.generate(rng)
        }
    }

    fn with_bias(&self, freq: u64) -> Rc<dyn Arbitrary<T>> {
        bias_wrapper(freq, Rc::clone(&self.arb), Rc::clone(&self.biased_builder))
    }
}

/// Wrap `arb` so that one generation in `freq` draws from the arbitrary
/// produced by `biased_builder` instead.
pub fn bias_wrapper<T: 'static>(
    freq: u64,
    arb: Rc<dyn Arbitrary<T>>,
    biased_builder: Rc<dyn Fn() -> Rc<dyn Arbitrary<T>>>,
) -> Rc<dyn Arbitrary<T>> {
    Rc::new(BiasedArbitraryWrapper {
        freq: freq.max(1),
        arb,
        biased_builder,
    })
}

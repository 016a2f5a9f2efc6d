//! The infinite stream of candidate producers driving a property run.

use crate::arbitrary::Arbitrary;
use crate::partial::{wrap_with_partial_example, PartialExample};
use crate::random::{Random, SplitMix};
use crate::shrinkable::Shrinkable;
use crate::stream::Stream;
use std::rc::Rc;

/// A deferred generation: nothing is drawn until the producer is invoked.
pub type ValueProducer<T> = Box<dyn Fn() -> Shrinkable<T>>;

fn lazy_generate<T: Clone + 'static>(
    arb: Rc<dyn Arbitrary<T>>,
    state: SplitMix,
    partial_example: Option<PartialExample<T>>,
) -> ValueProducer<T> {
    Box::new(move || {
        let mut rng = Random::new(state);
        let generated = arb.generate(&mut rng);
        match &partial_example {
            Some(mapper) => wrap_with_partial_example(generated, Rc::clone(mapper)),
            None => generated,
        }
    })
}

/// Produce the infinite lazy sequence of candidate producers for one run.
///
/// Explicit `examples` come first, as terminal shrinkables: provided
/// examples are never shrunk. After that, every index `idx = 0, 1, ...`
/// advances the generator state with `jump` to decorrelate consecutive draws
/// (a source without an O(1) jump would instead discard
/// [`crate::random::SKIP_FALLBACK_STRIDE`] draws) and captures the advanced
/// immutable state in the producer; a positional partial example at `idx`
/// wraps the generated shrinkable through the partial-example decorator.
///
/// Invoking a producer twice regenerates the identical instance, and a fixed
/// `(arb, seed, rng_factory)` reproduces the identical sequence across runs
/// and processes. The consumer pays only for the producers it pulls and
/// forces.
pub fn toss<T, F>(
    arb: Rc<dyn Arbitrary<T>>,
    seed: u64,
    rng_factory: F,
    examples: Vec<T>,
    partial_examples: Vec<PartialExample<T>>,
) -> Stream<ValueProducer<T>>
where
    T: Clone + 'static,
    F: Fn(u64) -> SplitMix + 'static,
{
    let provided = examples.into_iter().map(|example| -> ValueProducer<T> {
        Box::new(move || Shrinkable::terminal(example.clone()))
    });

    let mut state = rng_factory(seed);
    let mut idx = 0usize;
    let generated = std::iter::from_fn(move || {
        state = state.jump();
        let partial_example = partial_examples.get(idx).map(Rc::clone);
        idx += 1;
        Some(lazy_generate(Rc::clone(&arb), state, partial_example))
    });

    Stream::of(provided.chain(generated))
}

//! Sequence arbitrary: random-length vectors with three-family shrinking.

use crate::arbitrary::{bias_wrapper, Arbitrary};
use crate::error::{Result, TosscheckError};
use crate::integer::IntegerArbitrary;
use crate::random::Random;
use crate::shrinkable::Shrinkable;
use crate::stream::{make_lazy, Stream};
use std::rc::Rc;

/// Size constraints for [`array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayConstraints {
    /// Lower bound on the generated length. Defaults to 0.
    pub min_length: Option<usize>,
    /// Upper bound on the generated length. Defaults to
    /// `2 * min_length + 10`.
    pub max_length: Option<usize>,
}

/// Default `max_length` for a given `min_length`.
pub(crate) fn max_length_from_min_length(min_length: usize) -> usize {
    2 * min_length + 10
}

/// Vectors of values drawn from `arb`, sized per `constraints`.
pub fn array<T: Clone + 'static>(
    arb: Rc<dyn Arbitrary<T>>,
    constraints: ArrayConstraints,
) -> Result<Rc<dyn Arbitrary<Vec<T>>>> {
    let min_length = constraints.min_length.unwrap_or(0);
    let max_length = constraints
        .max_length
        .unwrap_or_else(|| max_length_from_min_length(min_length));
    Ok(Rc::new(ArrayArbitrary::new(arb, min_length, max_length)?))
}

/// Arbitrary for `Vec<T>` with a length drawn in `[min_length, max_length]`.
pub struct ArrayArbitrary<T> {
    arb: Rc<dyn Arbitrary<T>>,
    shrinker: SequenceShrinker,
}

impl<T> Clone for ArrayArbitrary<T> {
    fn clone(&self) -> Self {
        ArrayArbitrary {
            arb: Rc::clone(&self.arb),
            shrinker: self.shrinker,
        }
    }
}

impl<T: Clone + 'static> ArrayArbitrary<T> {
    /// Fails fast on `min_length > max_length`; never clamps.
    pub fn new(arb: Rc<dyn Arbitrary<T>>, min_length: usize, max_length: usize) -> Result<Self> {
        if min_length > max_length {
            return Err(TosscheckError::InvalidLengthRange {
                min: min_length,
                max: max_length,
            });
        }
        Ok(ArrayArbitrary {
            arb,
            shrinker: SequenceShrinker::new(min_length, max_length),
        })
    }

    fn min_length(&self) -> usize {
        self.shrinker.min_length
    }

    fn max_length(&self) -> usize {
        self.shrinker.max_length
    }
}

impl<T: Clone + 'static> Arbitrary<Vec<T>> for ArrayArbitrary<T> {
    /// Draws the length first, then each element, threading the generator
    /// state sequentially so the draw order is deterministic for a given
    /// incoming state.
    fn generate(&self, rng: &mut Random) -> Shrinkable<Vec<T>> {
        let size = self.shrinker.length_arb.generate(rng);
        let n = size.value() as usize;
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            items.push(self.arb.generate(rng));
        }
        self.shrinker.wrapper(items, false)
    }

    /// Nested bias: one draw in `freq` picks, again with probability
    /// `1/freq`, between a low-length-biased variant (same bounds, biased
    /// elements) and a high-bias variant whose `max_length` is capped
    /// logarithmically. Large sizes are exponentially rare under uniform
    /// sampling, so the cap trades coverage of very large instances for
    /// faster convergence on edge-sized ones.
    fn with_bias(&self, freq: u64) -> Rc<dyn Arbitrary<Vec<T>>> {
        let original = self.clone();
        bias_wrapper(
            freq,
            Rc::new(self.clone()),
            Rc::new(move || {
                let low_biased = ArrayArbitrary {
                    arb: original.arb.with_bias(freq),
                    shrinker: original.shrinker,
                };
                let high = original.clone();
                let high_builder = move || -> Rc<dyn Arbitrary<Vec<T>>> {
                    let min = high.min_length();
                    let max = high.max_length();
                    let capped_max = if min != max {
                        min + ((max - min).ilog2() as usize)
                    } else {
                        max
                    };
                    Rc::new(ArrayArbitrary {
                        arb: high.arb.with_bias(freq),
                        shrinker: SequenceShrinker::new(min, capped_max),
                    })
                };
                bias_wrapper(freq, Rc::new(low_biased), Rc::new(high_builder))
            }),
        )
    }
}

/// The three-family sequence shrinker, shared by the array and subarray
/// arbitraries so both expose the identical candidate precedence.
///
/// For a list of item shrinkables the candidate families are, in fixed
/// order (callers rely on this ordering for deterministic
/// first-smaller-failing-candidate semantics):
///
/// 1. length-down: for each shrunken length `l`, the size-`l` suffix of the
///    current items (drop from the front, keep the tail);
/// 2. head-shrink: the first element shrunk in place, the rest unchanged;
/// 3. recursive tail-shrink: shrink the sequence minus its head, then put
///    the head back; deferred behind [`make_lazy`] and only offered while
///    the total length stays at or above `min_length`.
///
/// Every candidate is re-wrapped through [`SequenceShrinker::wrapper`] with
/// `shrunk_once` set, so deeper levels compute length candidates relative to
/// the current length instead of re-descending from the original one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SequenceShrinker {
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) length_arb: IntegerArbitrary,
}

impl SequenceShrinker {
    /// Callers validate `min_length <= max_length` first.
    pub(crate) fn new(min_length: usize, max_length: usize) -> Self {
        SequenceShrinker {
            min_length,
            max_length,
            length_arb: IntegerArbitrary::new_unchecked(min_length as i64, max_length as i64),
        }
    }

    /// Wrap item shrinkables as a composite shrinkable over the plain value
    /// vector.
    pub(crate) fn wrapper<T: Clone + 'static>(
        self,
        items: Vec<Shrinkable<T>>,
        shrunk_once: bool,
    ) -> Shrinkable<Vec<T>> {
        let values: Vec<T> = items.iter().map(|item| item.value()).collect();
        Shrinkable::new(values, move || {
            self.shrink_items(items.clone(), shrunk_once)
                .map(move |smaller| self.wrapper(smaller, true))
        })
    }

    fn shrink_items<T: Clone + 'static>(
        self,
        items: Vec<Shrinkable<T>>,
        shrunk_once: bool,
    ) -> Stream<Vec<Shrinkable<T>>> {
        if items.is_empty() {
            return Stream::nil();
        }
        let len = items.len();

        let suffixes = {
            let items = items.clone();
            self.length_arb
                .shrinkable_for(len as i64, shrunk_once)
                .shrink()
                .map(move |l| items[len - l.value() as usize..].to_vec())
        };

        let head_shrinks = {
            let tail: Vec<Shrinkable<T>> = items[1..].to_vec();
            items[0].shrink().map(move |head| {
                let mut out = Vec::with_capacity(tail.len() + 1);
                out.push(head);
                out.extend(tail.iter().cloned());
                out
            })
        };

        let tail_shrinks = if len > self.min_length {
            let head = items[0].clone();
            let tail: Vec<Shrinkable<T>> = items[1..].to_vec();
            let min_length = self.min_length;
            make_lazy(move || {
                self.shrink_items(tail, false)
                    .filter(move |smaller| min_length <= smaller.len() + 1)
                    .map(move |smaller| {
                        let mut out = Vec::with_capacity(smaller.len() + 1);
                        out.push(head.clone());
                        out.extend(smaller);
                        out
                    })
            })
        } else {
            Stream::nil()
        };

        suffixes.join(head_shrinks).join(tail_shrinks)
    }
}

//! Subarray arbitrary: subsets of a fixed source sequence.

use crate::arbitrary::Arbitrary;
use crate::array::SequenceShrinker;
use crate::error::{Result, TosscheckError};
use crate::random::Random;
use crate::shrinkable::Shrinkable;
use std::rc::Rc;

/// Arbitrary for subsequences of a fixed source vector.
///
/// Picks a random set of distinct source positions. In the ordered variant
/// the picked elements keep their relative source order, for every generated
/// instance and every shrink descendant: shrinking only ever drops elements
/// (through the shared sequence shrinker, with terminal elements), it never
/// reorders them.
pub struct SubarrayArbitrary<T> {
    source: Rc<Vec<T>>,
    is_ordered: bool,
    shrinker: SequenceShrinker,
}

impl<T> Clone for SubarrayArbitrary<T> {
    fn clone(&self) -> Self {
        SubarrayArbitrary {
            source: Rc::clone(&self.source),
            is_ordered: self.is_ordered,
            shrinker: self.shrinker,
        }
    }
}

/// Order-preserving subsequences of `source`, any length up to the full
/// source.
pub fn subarray<T: Clone + 'static>(source: Vec<T>) -> SubarrayArbitrary<T> {
    let len = source.len();
    SubarrayArbitrary {
        source: Rc::new(source),
        is_ordered: true,
        shrinker: SequenceShrinker::new(0, len),
    }
}

/// Subsequences of `source` in random order.
pub fn shuffled_subarray<T: Clone + 'static>(source: Vec<T>) -> SubarrayArbitrary<T> {
    let len = source.len();
    SubarrayArbitrary {
        source: Rc::new(source),
        is_ordered: false,
        shrinker: SequenceShrinker::new(0, len),
    }
}

/// Order-preserving subsequences with explicit length bounds.
pub fn bounded_subarray<T: Clone + 'static>(
    source: Vec<T>,
    min_length: usize,
    max_length: usize,
) -> Result<SubarrayArbitrary<T>> {
    if min_length > max_length || max_length > source.len() {
        return Err(TosscheckError::InvalidSubarrayBounds {
            min: min_length,
            max: max_length,
            source_len: source.len(),
        });
    }
    Ok(SubarrayArbitrary {
        source: Rc::new(source),
        is_ordered: true,
        shrinker: SequenceShrinker::new(min_length, max_length),
    })
}

impl<T: Clone + 'static> Arbitrary<Vec<T>> for SubarrayArbitrary<T> {
    fn generate(&self, rng: &mut Random) -> Shrinkable<Vec<T>> {
        let size = self.shrinker.length_arb.generate(rng).value() as usize;
        let mut remaining: Vec<usize> = (0..self.source.len()).collect();
        let mut picked = Vec::with_capacity(size);
        for _ in 0..size {
            let at = rng.next_int(0, remaining.len() as i64 - 1) as usize;
            picked.push(remaining.swap_remove(at));
        }
        if self.is_ordered {
            picked.sort_unstable();
        }
        let items: Vec<Shrinkable<T>> = picked
            .into_iter()
            .map(|idx| Shrinkable::terminal(self.source[idx].clone()))
            .collect();
        self.shrinker.wrapper(items, false)
    }

    fn with_bias(&self, _freq: u64) -> Rc<dyn Arbitrary<Vec<T>>> {
        // Lengths are already small; elements are fixed source values.
        Rc::new(self.clone())
    }
}

//! Bounded integer arbitrary, also used as the length arbitrary of every
//! sequence arbitrary.

use crate::arbitrary::{bias_wrapper, Arbitrary};
use crate::error::{Result, TosscheckError};
use crate::random::Random;
use crate::shrinkable::Shrinkable;
use crate::stream::Stream;
use std::rc::Rc;

/// Uniform integers in `[min, max]`, shrinking toward the in-range value
/// nearest zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerArbitrary {
    min: i64,
    max: i64,
}

/// Integers in `[min, max]`, both ends included.
///
/// Fails fast when `min > max`; ranges are never silently clamped.
pub fn integer(min: i64, max: i64) -> Result<IntegerArbitrary> {
    if min > max {
        return Err(TosscheckError::InvalidIntegerRange { min, max });
    }
    Ok(IntegerArbitrary { min, max })
}

impl IntegerArbitrary {
    /// Internal constructor for ranges already known to be valid.
    pub(crate) fn new_unchecked(min: i64, max: i64) -> Self {
        IntegerArbitrary { min, max }
    }

    /// The value shrinking aims for: zero when in range, otherwise the
    /// bound nearest zero.
    fn target(self) -> i64 {
        if self.min <= 0 && 0 <= self.max {
            0
        } else if self.max < 0 {
            self.max
        } else {
            self.min
        }
    }

    /// Wrap an externally produced `value` with this arbitrary's shrink
    /// rule.
    ///
    /// With `shrunk_once` set the sequence starts from half the remaining
    /// gap: the caller has already applied one shrink step at this level and
    /// the full-gap candidate would be a repeat. Sequence arbitraries thread
    /// this flag through their length shrinking.
    pub fn shrinkable_for(self, value: i64, shrunk_once: bool) -> Shrinkable<i64> {
        Shrinkable::new(value, move || {
            self.shrink_value(value, shrunk_once)
                .map(move |v| self.shrinkable_for(v, true))
        })
    }

    /// Candidates between the target and `value`, nearest the target first:
    /// `value - gap, value - gap/2, value - gap/4, ...` with truncating
    /// halves.
    fn shrink_value(self, value: i64, shrunk_once: bool) -> Stream<i64> {
        let gap = value - self.target();
        let mut to_remove = if shrunk_once { gap / 2 } else { gap };
        Stream::of(std::iter::from_fn(move || {
            if to_remove == 0 {
                return None;
            }
            let candidate = value - to_remove;
            to_remove /= 2;
            Some(candidate)
        }))
    }

    /// `floor(log2(max - min))`, zero for degenerate ranges.
    fn log2_span(self) -> i64 {
        let span = (self.max as i128 - self.min as i128) as u128;
        span.checked_ilog2().unwrap_or(0) as i64
    }
}

impl Arbitrary<i64> for IntegerArbitrary {
    fn generate(&self, rng: &mut Random) -> Shrinkable<i64> {
        let value = rng.next_int(self.min, self.max);
        self.shrinkable_for(value, false)
    }

    fn with_bias(&self, freq: u64) -> Rc<dyn Arbitrary<i64>> {
        let original = *self;
        bias_wrapper(
            freq,
            Rc::new(original),
            Rc::new(move || Rc::new(EdgeBiasedInteger::from(original)) as Rc<dyn Arbitrary<i64>>),
        )
    }
}

/// Edge-biased variant: draws from logarithmic-width sub-ranges hugging each
/// bound (and zero, when zero is in range). Uniform sampling makes
/// boundary-sized values exponentially rare; concentrating probability mass
/// there raises defect-finding power per run.
struct EdgeBiasedInteger {
    full: IntegerArbitrary,
    ranges: Vec<(i64, i64)>,
}

impl From<IntegerArbitrary> for EdgeBiasedInteger {
    fn from(full: IntegerArbitrary) -> Self {
        let log = full.log2_span();
        let mut ranges = Vec::with_capacity(3);
        let near_min_hi = full.min.checked_add(log).map_or(full.max, |v| v.min(full.max));
        ranges.push((full.min, near_min_hi));
        let near_max_lo = full.max.checked_sub(log).map_or(full.min, |v| v.max(full.min));
        ranges.push((near_max_lo, full.max));
        if full.min < -log && log < full.max {
            ranges.push(((-log).max(full.min), log.min(full.max)));
        }
        EdgeBiasedInteger { full, ranges }
    }
}

impl Arbitrary<i64> for EdgeBiasedInteger {
    fn generate(&self, rng: &mut Random) -> Shrinkable<i64> {
        let pick = rng.next_int(0, self.ranges.len() as i64 - 1) as usize;
        let (lo, hi) = self.ranges[pick];
        let value = rng.next_int(lo, hi);
        // Shrinking still follows the full-range rule.
        self.full.shrinkable_for(value, false)
    }

    fn with_bias(&self, _freq: u64) -> Rc<dyn Arbitrary<i64>> {
        Rc::new(EdgeBiasedInteger::from(self.full))
    }
}

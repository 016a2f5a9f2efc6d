//! Deterministic seeded randomness with pure, value-returning transitions.

/// Immutable state of the engine's pseudo-random source.
///
/// Every operation returns a new state instead of mutating; the same state
/// always produces the same draw. Reproducibility of whole runs rests on
/// this: a producer captures one `SplitMix` value and re-deriving it yields
/// the identical instance.
///
/// Uses the SplitMix64 algorithm for high-quality output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix {
    state: u64,
    gamma: u64,
}

/// Stride applied by [`SplitMix::jump`], far larger than any realistic
/// number of draws per generated instance.
const JUMP_STRIDE: u64 = 1 << 32;

/// Draws discarded by the fallback decorrelation used when a source has no
/// O(1) jump.
pub const SKIP_FALLBACK_STRIDE: usize = 42;

impl SplitMix {
    /// Derive a generator state from an integer seed.
    pub fn from_seed(seed: u64) -> Self {
        let state = mix64(seed);
        let gamma = mix_gamma(state);
        SplitMix { state, gamma }
    }

    /// Produce the next draw together with the successor state.
    pub fn next_u64(self) -> (u64, Self) {
        let state = self.state.wrapping_add(self.gamma);
        (
            mix64(state),
            SplitMix {
                state,
                gamma: self.gamma,
            },
        )
    }

    /// Advance the state far enough to decorrelate it from `self` in O(1),
    /// without mutating `self`.
    pub fn jump(self) -> Self {
        SplitMix {
            state: self.state.wrapping_add(self.gamma.wrapping_mul(JUMP_STRIDE)),
            gamma: self.gamma,
        }
    }

    /// Discard `n` draws.
    ///
    /// Equivalent to `n` calls to [`SplitMix::next_u64`]; with the stride
    /// [`SKIP_FALLBACK_STRIDE`] this is the decorrelation fallback for
    /// sources that lack a native jump.
    pub fn skip(self, n: usize) -> Self {
        let mut state = self;
        for _ in 0..n {
            state = state.next_u64().1;
        }
        state
    }
}

/// Mutable cursor over a [`SplitMix`] state, handed to arbitraries during
/// generation.
///
/// The cursor threads pure transitions internally; it is created once per
/// producer invocation and never shared between consumers.
#[derive(Debug, Clone)]
pub struct Random {
    state: SplitMix,
}

impl Random {
    pub fn new(state: SplitMix) -> Self {
        Random { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        let (value, next) = self.state.next_u64();
        self.state = next;
        value
    }

    /// Uniform draw in `[0, bound)`.
    pub fn next_bounded(&mut self, bound: u64) -> u64 {
        let value = self.next_u64();
        ((value as u128 * bound as u128) >> 64) as u64
    }

    /// Uniform draw in `[min, max]`, both ends included.
    ///
    /// Callers guarantee `min <= max`; arbitraries validate their ranges at
    /// construction time.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let span = (max as i128 - min as i128 + 1) as u64;
        if span == 0 {
            // Full i64 range: the span wraps to zero, every draw is valid.
            return self.next_u64() as i64;
        }
        min.wrapping_add(self.next_bounded(span) as i64)
    }
}

/// SplitMix64 finalizer.
fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Derive an odd gamma so the underlying Weyl sequence has maximal period.
fn mix_gamma(z: u64) -> u64 {
    (mix64(z) | 1).wrapping_mul(0x9e3779b97f4a7c15)
}

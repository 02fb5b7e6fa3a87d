//! The simulation-level random source.
//!
//! # Determinism strategy
//!
//! One `SmallRng` is seeded from `SimConfig::seed` at the start of a run and
//! threaded by `&mut` through everything that draws: agent generation,
//! movement tie-breaks, and infection trials.  The engine is single-threaded
//! and every consumer draws in a fixed order (roster order within a tick), so
//! the same seed always reproduces the same run.
//!
//! There is no global or thread-local generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable run-wide RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.  Topology
    /// generators draw from a child so that building a network consumes one
    /// draw of the parent stream regardless of network size.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f64` this is uniform on `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    ///
    /// # Panics
    /// Panics if `range` is empty.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// One Bernoulli trial as `draw < p` with a single uniform `f64` draw.
    ///
    /// Always consumes exactly one `f64`, so the stream stays aligned
    /// whatever `p` is.  `p >= 1.0` always succeeds, `p <= 0.0` never does.
    #[inline]
    pub fn trial(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

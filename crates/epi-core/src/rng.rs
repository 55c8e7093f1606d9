//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The engine never touches a global generator.  `build` and `advance` take
//! any `R: rand::Rng + ?Sized` by `&mut`, so callers can swap in their own
//! source; [`SimRng`] is the seeded default used by the driver.  Every draw
//! happens in a fixed order (ascending node id), so the same seed always
//! reproduces the same run.
//!
//! Restarts derive a fresh stream with [`SimRng::child`] rather than reusing
//! the exhausted one, so run N of a session is reproducible on its own.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded, reproducible random source for building and advancing graphs.
///
/// Implements [`RngCore`], so it can be handed to any function bounded on
/// `rand::Rng`.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for sub-run `offset` (e.g. the n-th
    /// restart) from a root seed without consuming the root.
    pub fn child(seed: u64, offset: u64) -> SimRng {
        SimRng::new(seed ^ offset.wrapping_mul(MIXING_CONSTANT))
    }
}

impl RngCore for SimRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}

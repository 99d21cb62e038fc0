//! Deterministic per-pursuer RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each pursuer gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (pursuer_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive pursuer IDs uniformly across the seed space.
//! This means:
//!
//! - Pursuers never share RNG state, so frightened wander and stuck-recovery
//!   draws for one pursuer can't perturb another's sequence.
//! - Adding a pursuer to the end of the roster does not disturb the seeds of
//!   existing pursuers — runs stay reproducible as rosters grow.
//! - All draws happen on the coordinator task; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PursuerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-pursuer deterministic RNG.
///
/// Created once per pursuer when the coordinator is built; stored in a
/// parallel `Vec<PursuerRng>` alongside the roster.  The type is `!Sync` to
/// prevent accidental sharing across threads — only the coordinator task
/// may draw from it.
pub struct PursuerRng(SmallRng);

impl PursuerRng {
    /// Seed deterministically from the session's global seed and a pursuer ID.
    pub fn new(global_seed: u64, pursuer: PursuerId) -> Self {
        let seed = global_seed ^ (pursuer.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PursuerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

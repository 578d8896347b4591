//! Deterministic, injectable randomness.
//!
//! The simulation core is fully deterministic.  The only random step is
//! picking origin, destination and checkpoint nodes, and that happens before
//! the core runs, through a [`SimRng`] the caller owns.  Fixing the seed fixes
//! the scenario.
//!
//! Batch runs derive one RNG per run index:
//!
//!   seed = root_seed XOR (run * MIXING_CONSTANT)
//!
//! so run `k` draws the same nodes whether the batch is executed in order or
//! spread over a thread pool.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for scenario sampling.
///
/// Not `Sync`: each thread that samples needs its own, derived with
/// [`SimRng::for_run`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent RNG for batch run `run`, derived only from `root_seed`.
    pub fn for_run(root_seed: u64, run: u64) -> SimRng {
        let seed = root_seed ^ run.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a slice.  `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// Choose `n` elements at distinct positions, in random order.
    ///
    /// Returns `None` if the slice has fewer than `n` elements.
    pub fn sample_distinct<T: Copy>(&mut self, slice: &[T], n: usize) -> Option<Vec<T>> {
        if slice.len() < n {
            return None;
        }
        Some(
            rand::seq::index::sample(&mut self.0, slice.len(), n)
                .into_iter()
                .map(|i| slice[i])
                .collect(),
        )
    }
}

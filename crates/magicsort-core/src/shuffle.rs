//! Seeded Fisher-Yates shuffle.
//!
//! The generator is part of the cache contract: a seed recorded in a cache
//! file is only meaningful for the exact stream produced here. The stream is
//! `ChaCha8Rng::seed_from_u64(seed)` and each index is drawn as a `u64`, so the
//! same seed yields the same permutation on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator seed. The seed space wraps from `u32::MAX` back to `0`.
pub type Seed = u32;

/// Generator for a seed.
pub fn rng_for_seed(seed: Seed) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(u64::from(seed))
}

/// Next candidate seed, wrapping at the end of the seed space.
pub fn next_seed(seed: Seed) -> Seed {
    seed.wrapping_add(1)
}

/// Shuffle in place: for `i` from the last index down to 1, swap `i` with a
/// uniformly drawn `j` in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(values: &mut [T], rng: &mut R) {
    for i in (1..values.len()).rev() {
        // u64 draw keeps the stream identical across pointer widths
        let j = rng.gen_range(0..=i as u64) as usize;
        values.swap(i, j);
    }
}

/// Reseed and shuffle once.
pub fn shuffle_with_seed<T>(values: &mut [T], seed: Seed) {
    let mut rng = rng_for_seed(seed);
    shuffle(values, &mut rng);
}

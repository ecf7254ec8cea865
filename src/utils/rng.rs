//! Deterministic seeding and RNG utilities
//!
//! This module provides:
//! - RngStream: the reproducible PRNG owned by every space (ChaCha8)
//! - entropy_seed: a fresh seed for spaces seeded with "no seed"
//! - draw_subseeds: the sub-seed policy used by composite spaces

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Type alias for the default RNG stream used across the crate.
pub type RngStream = ChaCha8Rng;

/// Upper bound (exclusive) of the sub-seed domain: the platform's largest signed integer.
pub const SUBSEED_DOMAIN: usize = isize::MAX as usize;

/// Create a new RNG stream from a seed.
pub fn rng_from_seed(seed: u64) -> RngStream {
    RngStream::seed_from_u64(seed)
}

/// Draw a seed from OS-backed entropy.
pub fn entropy_seed() -> u64 {
    rand::random::<u64>()
}

/// Draw one sub-seed per child from `[0, SUBSEED_DOMAIN)`.
///
/// Sub-seeds are drawn without replacement so no two children share a seed.
/// When `n` exceeds the domain that is impossible, and the draw falls back to
/// sampling with replacement: children may then receive equal sub-seeds and
/// produce correlated samples.
pub fn draw_subseeds<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u64> {
    draw_from_domain(rng, SUBSEED_DOMAIN, n)
}

fn draw_from_domain<R: Rng + ?Sized>(rng: &mut R, domain: usize, n: usize) -> Vec<u64> {
    assert!(domain > 0, "sub-seed domain must not be empty");
    if n <= domain {
        return index::sample(rng, domain, n)
            .into_vec()
            .into_iter()
            .map(|i| i as u64)
            .collect();
    }
    log::warn!(
        "drawing {n} sub-seeds from a domain of {domain}; children may share seeds"
    );
    (0..n).map(|_| rng.gen_range(0..domain) as u64).collect()
}

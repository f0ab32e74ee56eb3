//! Deterministic buffer fixtures for zerocount tests and benchmarks.
//!
//! Every generator takes an explicit seed and uses a [`ChaCha8Rng`], so a
//! failing test can be reproduced from its seed alone.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest value produced by [`random_buffer`].
pub const RANDOM_MAX: u16 = 65_000;

/// `len` uniformly random values in `0..=RANDOM_MAX`.
///
/// Zeros occur with probability ~1/65001 per element, so the tail is almost
/// always short. Use [`buffer_with_tail`] when a specific tail is needed.
pub fn random_buffer(len: usize, seed: u64) -> Vec<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..=RANDOM_MAX)).collect()
}

/// A buffer of length `len` whose zero tail is exactly `zeros` long.
///
/// The head is random (and may itself contain zeros); the element just
/// before the tail is forced non-zero.
///
/// # Panics
///
/// Panics if `zeros > len`.
pub fn buffer_with_tail(len: usize, zeros: usize, seed: u64) -> Vec<u16> {
    assert!(zeros <= len, "tail of {zeros} does not fit in {len} elements");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut buf: Vec<u16> = (0..len).map(|_| rng.random::<u16>()).collect();
    let head = len - zeros;
    buf[head..].fill(0);
    if head > 0 {
        buf[head - 1] = rng.random_range(1..=u16::MAX);
    }
    buf
}

/// A buffer where each element is zero with probability `zero_ratio`.
///
/// Useful for property-style loops where long zero runs must be common.
pub fn sparse_buffer(len: usize, zero_ratio: f64, seed: u64) -> Vec<u16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.random_bool(zero_ratio.clamp(0.0, 1.0)) {
                0
            } else {
                rng.random_range(1..=u16::MAX)
            }
        })
        .collect()
}

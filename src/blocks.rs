//! Brownian block sizing.
//!
//! Emphasis blocks vary in length irregularly but smoothly: a running sum of
//! normal samples (a discrete Brownian walk) is subtracted from the base
//! size and clamped. The first block is the raw base, unclamped; the base is
//! deliberately larger than the maximum so it only seeds the first block and
//! the walk's deviation.

use crate::noise::NormalSource;

/// Produces `ceil(total / 2)` block sizes for a stream of `total` syllable
/// tokens.
///
/// Size `i > 0` is `floor(base - |walk_i|)` clamped into
/// `[min_size, max_size]`, with `walk_i` the sum of the first `i` normal
/// samples. The sizes need not sum to `total`; the emphasis selector
/// tolerates a short or empty final block.
pub fn block_sizes(
    total: usize,
    base: usize,
    min_size: usize,
    max_size: usize,
    noise: &mut dyn NormalSource,
) -> Vec<usize> {
    let n_blocks = (total + 1) / 2;
    let mut sizes = Vec::with_capacity(n_blocks);
    if n_blocks == 0 {
        return sizes;
    }
    sizes.push(base);

    let mut walk = 0.0_f64;
    for _ in 1..n_blocks {
        walk += noise.sample();
        let candidate = (base as f64 - walk.abs()).floor();
        sizes.push(candidate.clamp(min_size as f64, max_size as f64) as usize);
    }
    sizes
}

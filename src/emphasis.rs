//! Asymmetric-Gaussian emphasis selection.
//!
//! Syllable tokens are partitioned into consecutive blocks per the sizes
//! from the block sizer (separators keep their places but are invisible to
//! the block indexing). Within a block, each position is weighted with a
//! bell curve centered on the block's middle and skewed rightward: the
//! spread is wider for positions at or after the center than before it.
//! Positions whose weight exceeds the threshold get their token text wrapped
//! in `**` markers. Selection runs exactly once, so markers never nest.

use crate::tokenizer::{Token, TokenKind};

/// Marker prepended and appended to an emphasized syllable.
pub const EMPHASIS_MARKER: &str = "**";

/// Weights above this value are emphasized.
const WEIGHT_THRESHOLD: f64 = 0.8;

fn gaussian_weight(d: i64, sigma: f64) -> f64 {
    (-((d * d) as f64) / (2.0 * sigma * sigma)).exp()
}

/// Wraps in-place the syllable tokens selected by the block/weight scheme.
///
/// `sizes` usually comes from `blocks::block_sizes`. A block may be shorter
/// than requested when the syllable stream runs out; syllables beyond the
/// last block (when the sizes fall short of the stream) are left unmarked.
pub fn apply_emphasis(tokens: &mut [Token], sizes: &[usize], sigma_left: f64, sigma_right: f64) {
    let syllable_positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TokenKind::Syllable)
        .map(|(idx, _)| idx)
        .collect();

    let mut cursor = 0;
    for &size in sizes {
        if cursor >= syllable_positions.len() {
            break;
        }
        let end = (cursor + size).min(syllable_positions.len());
        let block = &syllable_positions[cursor..end];
        let center = (block.len() / 2) as i64;
        for (pos, &token_idx) in block.iter().enumerate() {
            let d = pos as i64 - center;
            let sigma = if d >= 0 { sigma_right } else { sigma_left };
            if gaussian_weight(d, sigma) > WEIGHT_THRESHOLD {
                let token = &mut tokens[token_idx];
                token.text = format!("{EMPHASIS_MARKER}{}{EMPHASIS_MARKER}", token.text);
            }
        }
        cursor = end;
    }
}

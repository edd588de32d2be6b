//! Candidate block-size enumeration and hygiene.
//!
//! A candidate is usable only when the image fits at least two blocks per
//! axis (`block <= min(w, h) / 2`). Derived sets additionally require each
//! candidate to tile at least one axis within the remainder tolerance.

use super::params::DetectorParams;

/// Base candidate values: powers of two and 3x powers of two, covering the
/// upscale factors pixel-art tools produce.
const BASE_CANDIDATES: [usize; 13] = [2, 3, 4, 6, 8, 12, 16, 24, 32, 48, 64, 96, 128];

/// Derive candidate block sizes for a `w x h` image.
///
/// Base values are clamped to `[min_block, min(w, h) / 2]`, then filtered by
/// the remainder tolerance. If the tolerance filter rejects everything the
/// unfiltered range is returned, and images too small for any base value get
/// the degenerate 1:1 candidate. The result is empty only when no block size
/// at all fits the image (min dimension below 2).
pub fn derive_candidates(w: usize, h: usize, params: &DetectorParams) -> Vec<usize> {
    let max_block = w.min(h) / 2;
    if max_block == 0 {
        return Vec::new();
    }
    let lo = params.min_block.max(1);
    let in_range: Vec<usize> = BASE_CANDIDATES
        .iter()
        .copied()
        .filter(|&c| c >= lo && c <= max_block)
        .collect();
    if in_range.is_empty() {
        return vec![1];
    }
    let filtered: Vec<usize> = in_range
        .iter()
        .copied()
        .filter(|&c| {
            tiles_within_tolerance(w, c, params.remainder_tolerance)
                || tiles_within_tolerance(h, c, params.remainder_tolerance)
        })
        .collect();
    if filtered.is_empty() {
        in_range
    } else {
        filtered
    }
}

/// Drop unusable values from an explicit candidate set and return the rest
/// sorted ascending without duplicates.
pub fn sanitize_candidates(w: usize, h: usize, candidates: &[usize]) -> Vec<usize> {
    let max_block = w.min(h) / 2;
    let mut usable: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&c| c >= 1 && c <= max_block)
        .collect();
    usable.sort_unstable();
    usable.dedup();
    usable
}

fn tiles_within_tolerance(dim: usize, c: usize, tolerance: f64) -> bool {
    let rem = dim % c;
    let dist = rem.min(c - rem);
    dist as f64 <= tolerance * c as f64
}

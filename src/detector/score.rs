//! Per-candidate scoring: within-block uniformity and color contrast across
//! tentative grid lines.
//!
//! Both metrics accumulate in integers before the final division, so scores
//! are bit-identical across runs and thread counts.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::params::DetectorParams;
use crate::image::{RasterImage, Rgba};
use serde::Serialize;

/// Scores for one candidate block size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    /// Candidate block size in pixels.
    pub block_size: usize,
    /// Mean within-block color uniformity in [0, 1].
    pub uniformity: f64,
    /// Mean color contrast across grid lines in [0, 1].
    pub boundary_contrast: f64,
    /// Weighted combination used for selection.
    pub combined: f64,
}

/// Score every candidate. Result order matches the candidate order.
pub fn score_candidates(
    image: &RasterImage,
    candidates: &[usize],
    params: &DetectorParams,
) -> Vec<CandidateScore> {
    #[cfg(feature = "parallel")]
    {
        candidates
            .par_iter()
            .map(|&c| score_candidate(image, c, params))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        candidates
            .iter()
            .map(|&c| score_candidate(image, c, params))
            .collect()
    }
}

/// Score a single candidate block size.
pub fn score_candidate(image: &RasterImage, block: usize, params: &DetectorParams) -> CandidateScore {
    let uniformity = uniformity_score(image, block, params.max_rgb_std);
    let boundary_contrast = boundary_score(image, block);
    let combined =
        params.uniformity_weight * uniformity + params.boundary_weight * boundary_contrast;
    CandidateScore {
        block_size: block,
        uniformity,
        boundary_contrast,
        combined,
    }
}

/// Mean uniformity over all full `block x block` blocks.
///
/// Each block contributes `1 - clamp(std / max_rgb_std, 0, 1)` where `std`
/// is the pooled standard deviation of its RGB channel values. Partial edge
/// blocks are excluded; alpha is ignored here.
fn uniformity_score(image: &RasterImage, block: usize, max_rgb_std: f64) -> f64 {
    let cols = image.w / block;
    let rows = image.h / block;
    if cols == 0 || rows == 0 {
        return 0.0;
    }
    let samples = (block * block * 3) as f64;
    let mut total = 0.0f64;
    for by in 0..rows {
        for bx in 0..cols {
            let (sum, sum_sq) = block_rgb_moments(image, bx * block, by * block, block);
            let mean = sum / samples;
            let var = (sum_sq / samples - mean * mean).max(0.0);
            total += 1.0 - (var.sqrt() / max_rgb_std).clamp(0.0, 1.0);
        }
    }
    total / (cols * rows) as f64
}

fn block_rgb_moments(image: &RasterImage, x0: usize, y0: usize, block: usize) -> (f64, f64) {
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    for y in y0..y0 + block {
        let row = image.row(y);
        for px in row[x0 * 4..(x0 + block) * 4].chunks_exact(4) {
            for &v in &px[..3] {
                sum += v as u64;
                sum_sq += (v as u64) * (v as u64);
            }
        }
    }
    (sum as f64, sum_sq as f64)
}

/// Mean per-channel absolute RGB difference across pixel pairs straddling a
/// grid line, both orientations pooled, normalized to [0, 1].
fn boundary_score(image: &RasterImage, block: usize) -> f64 {
    let mut diff_sum = 0u64;
    let mut pair_count = 0u64;

    // vertical grid lines: pairs (x-1, y) | (x, y) at x = block, 2*block, ...
    let mut x = block;
    while x < image.w {
        for y in 0..image.h {
            diff_sum += rgb_abs_diff(image.get(x - 1, y), image.get(x, y));
        }
        pair_count += image.h as u64;
        x += block;
    }

    // horizontal grid lines: pairs (x, y-1) | (x, y) at y = block, 2*block, ...
    let mut y = block;
    while y < image.h {
        let above = image.row(y - 1);
        let below = image.row(y);
        for (pa, pb) in above.chunks_exact(4).zip(below.chunks_exact(4)) {
            diff_sum += pa[0].abs_diff(pb[0]) as u64
                + pa[1].abs_diff(pb[1]) as u64
                + pa[2].abs_diff(pb[2]) as u64;
        }
        pair_count += image.w as u64;
        y += block;
    }

    if pair_count == 0 {
        return 0.0;
    }
    diff_sum as f64 / (pair_count * 3) as f64 / 255.0
}

#[inline]
fn rgb_abs_diff(a: Rgba, b: Rgba) -> u64 {
    a.r.abs_diff(b.r) as u64 + a.g.abs_diff(b.g) as u64 + a.b.abs_diff(b.b) as u64
}

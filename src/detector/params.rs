//! Parameter types configuring grid-size detection.
//!
//! Defaults are tuned for the integer upscale factors pixel-art tools
//! produce (roughly 2x to 32x nearest-neighbour). For tuning, start with the
//! score weights and the candidate bounds.

use serde::{Deserialize, Serialize};

/// Detector-wide parameters controlling candidate generation and scoring.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Explicit candidate block sizes. `None` derives candidates from the
    /// image dimensions (powers of two and 3x powers of two within bounds).
    pub candidates: Option<Vec<usize>>,
    /// Smallest block size considered when deriving candidates (>= 1).
    pub min_block: usize,
    /// Weight of the within-block uniformity term in the combined score.
    pub uniformity_weight: f64,
    /// Weight of the grid-line contrast term in the combined score.
    pub boundary_weight: f64,
    /// Pooled RGB standard deviation mapped to uniformity 0. Lower
    /// deviations scale linearly towards 1.
    pub max_rgb_std: f64,
    /// Largest remainder accepted when a candidate tiles an image dimension,
    /// as a fraction of the candidate size.
    pub remainder_tolerance: f64,
    /// Winner-vs-runner-up score margin at which confidence saturates to 1.
    pub confidence_margin: f64,
    /// Minimum uniformity a candidate needs to count as grid-like.
    pub min_uniformity: f64,
    /// Boundary contrast below which the image is treated as flat.
    pub flat_contrast_eps: f64,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            candidates: None,
            min_block: 2,
            uniformity_weight: 0.7,
            boundary_weight: 0.3,
            max_rgb_std: 100.0,
            remainder_tolerance: 0.25,
            confidence_margin: 0.04,
            min_uniformity: 0.5,
            flat_contrast_eps: 0.004,
        }
    }
}

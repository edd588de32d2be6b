//! Grid-size selection from per-candidate scores.
//!
//! [`GridSizeDetector`] scores every candidate block size, picks the best
//! with a deterministic tie-break (smaller block wins), and derives a
//! margin-based confidence. Flat images fall back to the smallest plausible
//! candidate instead of a degenerate large block.

use log::debug;
use serde::Serialize;
use std::time::Instant;

use super::candidates::{derive_candidates, sanitize_candidates};
use super::params::DetectorParams;
use super::score::{score_candidates, CandidateScore};
use crate::error::RestoreError;
use crate::image::RasterImage;

/// Outcome of grid-size detection.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// Selected block size in pixels.
    pub block_size: usize,
    /// Margin-based confidence in [0, 1].
    pub confidence: f64,
    /// Scores for every evaluated candidate, in ascending block-size order.
    pub scores: Vec<CandidateScore>,
    /// Wall-clock scoring time.
    pub elapsed_ms: f64,
}

/// Detects the logical pixel-grid size of an upscaled image.
#[derive(Clone, Debug, Default)]
pub struct GridSizeDetector {
    params: DetectorParams,
}

impl GridSizeDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    /// Borrow the active parameters.
    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Replace the candidate set used by [`GridSizeDetector::detect`].
    pub fn set_candidates(&mut self, candidates: Option<Vec<usize>>) {
        self.params.candidates = candidates;
    }

    /// Detect using the configured candidate set, deriving one from the
    /// image dimensions when none is configured.
    pub fn detect(&self, image: &RasterImage) -> Result<Detection, RestoreError> {
        match self.params.candidates.clone() {
            Some(set) => self.detect_with_candidates(image, &set),
            None => {
                let derived = derive_candidates(image.w, image.h, &self.params);
                if derived.is_empty() {
                    return Err(RestoreError::InvalidInput(format!(
                        "image {}x{} too small for grid detection",
                        image.w, image.h
                    )));
                }
                Ok(self.run(image, derived))
            }
        }
    }

    /// Detect using an explicit candidate set.
    ///
    /// Unusable values (zero, or larger than half the short image side) are
    /// skipped; a set that is empty after hygiene is `InvalidConfiguration`.
    pub fn detect_with_candidates(
        &self,
        image: &RasterImage,
        candidates: &[usize],
    ) -> Result<Detection, RestoreError> {
        let usable = sanitize_candidates(image.w, image.h, candidates);
        if usable.len() < candidates.len() {
            debug!(
                "detector: skipped {} unusable candidate(s) for {}x{}",
                candidates.len() - usable.len(),
                image.w,
                image.h
            );
        }
        if usable.is_empty() {
            return Err(RestoreError::InvalidConfiguration(
                "candidate set empty after removing unusable block sizes".to_string(),
            ));
        }
        Ok(self.run(image, usable))
    }

    fn run(&self, image: &RasterImage, candidates: Vec<usize>) -> Detection {
        let t0 = Instant::now();

        // 1) Score all candidates (order-preserving, optionally in parallel).
        let scores = score_candidates(image, &candidates, &self.params);

        // 2) Winner by combined score. Candidates are sorted ascending, so a
        //    strict comparison keeps the smaller block on ties.
        let mut best = 0usize;
        for (i, s) in scores.iter().enumerate().skip(1) {
            if s.combined > scores[best].combined {
                best = i;
            }
        }

        // 3) Flat-image fallback: no boundary signal means every block size
        //    "fits"; prefer the smallest one that still looks grid-like.
        let mut chosen = best;
        if scores[best].boundary_contrast < self.params.flat_contrast_eps {
            if let Some(i) = scores
                .iter()
                .position(|s| s.uniformity >= self.params.min_uniformity)
            {
                if i != best {
                    debug!(
                        "detector: flat image, preferring block={} over block={}",
                        scores[i].block_size, scores[best].block_size
                    );
                }
                chosen = i;
            }
        }

        // 4) Confidence from the margin over the best of the other candidates.
        let runner_up = scores
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != chosen)
            .map(|(_, s)| s.combined)
            .fold(0.0f64, f64::max);
        let margin = scores[chosen].combined - runner_up;
        let mut confidence = (margin / self.params.confidence_margin).clamp(0.0, 1.0);
        if scores[chosen].uniformity < self.params.min_uniformity {
            confidence = 0.0;
        }

        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "detector: candidates={} block={} combined={:.4} margin={:.4} confidence={:.3} elapsed_ms={:.3}",
            scores.len(),
            scores[chosen].block_size,
            scores[chosen].combined,
            margin,
            confidence,
            elapsed_ms
        );

        Detection {
            block_size: scores[chosen].block_size,
            confidence,
            scores,
            elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgba;

    fn grid_image(blocks: usize, block: usize, colors: &[Rgba]) -> RasterImage {
        let side = blocks * block;
        let mut img = RasterImage::new(side, side);
        for by in 0..blocks {
            for bx in 0..blocks {
                // steps 1 and 3 are coprime with the palette size, so no two
                // neighbouring blocks share a color
                let c = colors[(bx + by * 3) % colors.len()];
                img.fill_rect(bx * block, by * block, block, block, c);
            }
        }
        img
    }

    const CUBE_CORNERS: [Rgba; 8] = [
        Rgba::opaque(0, 0, 0),
        Rgba::opaque(0, 0, 255),
        Rgba::opaque(0, 255, 0),
        Rgba::opaque(0, 255, 255),
        Rgba::opaque(255, 0, 0),
        Rgba::opaque(255, 0, 255),
        Rgba::opaque(255, 255, 0),
        Rgba::opaque(255, 255, 255),
    ];

    #[test]
    fn exact_grid_saturates_confidence() {
        let img = grid_image(8, 8, &CUBE_CORNERS);
        let detection = GridSizeDetector::default().detect(&img).unwrap();
        assert_eq!(detection.block_size, 8);
        assert_eq!(detection.confidence, 1.0);
    }

    #[test]
    fn flat_image_selects_smallest_candidate_with_zero_confidence() {
        let mut img = RasterImage::new(64, 64);
        img.fill_rect(0, 0, 64, 64, Rgba::opaque(120, 120, 120));
        let detection = GridSizeDetector::default().detect(&img).unwrap();
        assert_eq!(detection.block_size, 2);
        assert!(
            detection.confidence < 1e-9,
            "flat image must not be confident, got {}",
            detection.confidence
        );
    }

    #[test]
    fn empty_candidate_set_is_rejected() {
        let img = grid_image(4, 4, &CUBE_CORNERS);
        let detector = GridSizeDetector::default();
        let err = detector.detect_with_candidates(&img, &[]).unwrap_err();
        assert!(matches!(err, RestoreError::InvalidConfiguration(_)));
        // all candidates unusable counts as empty too
        let err = detector.detect_with_candidates(&img, &[0, 100]).unwrap_err();
        assert!(matches!(err, RestoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn too_small_image_is_invalid_input() {
        let img = RasterImage::new(1, 40);
        let err = GridSizeDetector::default().detect(&img).unwrap_err();
        assert!(matches!(err, RestoreError::InvalidInput(_)));
    }

    #[test]
    fn detection_is_deterministic() {
        let img = grid_image(6, 4, &CUBE_CORNERS);
        let detector = GridSizeDetector::default();
        let a = detector.detect(&img).unwrap();
        let b = detector.detect(&img).unwrap();
        assert_eq!(a.block_size, b.block_size);
        assert_eq!(a.confidence, b.confidence);
        let combined_a: Vec<f64> = a.scores.iter().map(|s| s.combined).collect();
        let combined_b: Vec<f64> = b.scores.iter().map(|s| s.combined).collect();
        assert_eq!(combined_a, combined_b);
    }
}

//! Per-cell dominant color extraction.
//!
//! Partitions the image into a fixed grid anchored at the top-left corner
//! and reduces every cell to its exact modal RGBA. A mean-alpha threshold
//! decides per cell whether it is transparent; the comparison runs on
//! integer sums so the boundary case is exact.

mod grid;
mod histogram;

pub use grid::{BlockColor, BlockGrid, TransparencyMode};

use histogram::ColorHistogram;

use crate::error::RestoreError;
use crate::image::{RasterImage, Rgba};
use log::debug;
use serde::{Deserialize, Serialize};

/// Mean alpha below which a cell counts as transparent.
const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Parameters for block color extraction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// Cells whose mean alpha is strictly below this value are transparent.
    pub alpha_threshold: u8,
    /// Alpha handling for non-transparent cells.
    pub transparency_mode: TransparencyMode,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            transparency_mode: TransparencyMode::Preserve,
        }
    }
}

/// Reduces a raster image to one dominant color per grid cell.
#[derive(Clone, Debug, Default)]
pub struct BlockColorExtractor {
    params: ExtractorParams,
}

impl BlockColorExtractor {
    /// Create an extractor with the supplied parameters.
    pub fn new(params: ExtractorParams) -> Self {
        Self { params }
    }

    /// Borrow the active parameters.
    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    /// Extract the `ceil(w / bs) x ceil(h / bs)` color grid at `block_size`.
    ///
    /// Cells clipped by the image border use only the pixels they cover.
    /// Block size 0, or one too large to fit two blocks per axis, is
    /// `InvalidConfiguration`.
    pub fn extract(
        &self,
        image: &RasterImage,
        block_size: usize,
    ) -> Result<BlockGrid, RestoreError> {
        validate_block_size(image, block_size)?;
        let cols = (image.w + block_size - 1) / block_size;
        let rows = (image.h + block_size - 1) / block_size;

        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            let y0 = row * block_size;
            let y1 = (y0 + block_size).min(image.h);
            for col in 0..cols {
                let x0 = col * block_size;
                let x1 = (x0 + block_size).min(image.w);
                cells.push(self.extract_cell(image, x0, y0, x1, y1));
            }
        }

        let grid = BlockGrid {
            cols,
            rows,
            block_size,
            cells,
        };
        debug!(
            "extractor: {}x{} cells at block={} visible={}",
            grid.cols,
            grid.rows,
            block_size,
            grid.visible_cells()
        );
        Ok(grid)
    }

    fn extract_cell(
        &self,
        image: &RasterImage,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> BlockColor {
        let mut hist = ColorHistogram::new();
        let mut alpha_sum = 0u64;
        for y in y0..y1 {
            let row = image.row(y);
            for px in row[x0 * 4..x1 * 4].chunks_exact(4) {
                alpha_sum += px[3] as u64;
                hist.accumulate(Rgba::new(px[0], px[1], px[2], px[3]));
            }
        }

        // transparent iff mean alpha < threshold, evaluated without division
        let pixels = ((x1 - x0) * (y1 - y0)) as u64;
        let transparent = alpha_sum < self.params.alpha_threshold as u64 * pixels;

        let dominant = hist.dominant().unwrap_or_default();
        let color = if !transparent && self.params.transparency_mode == TransparencyMode::Opaque {
            dominant.with_alpha(255)
        } else {
            dominant
        };
        BlockColor { color, transparent }
    }
}

fn validate_block_size(image: &RasterImage, block_size: usize) -> Result<(), RestoreError> {
    if block_size == 0 {
        return Err(RestoreError::InvalidConfiguration(
            "block size must be positive".to_string(),
        ));
    }
    if block_size * 2 > image.w.min(image.h) {
        return Err(RestoreError::InvalidConfiguration(format!(
            "block size {} leaves fewer than two blocks per axis in a {}x{} image",
            block_size, image.w, image.h
        )));
    }
    Ok(())
}

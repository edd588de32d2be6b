//! End-to-end restoration pipeline.
//!
//! [`PixelRestorer`] wires the stages together: decode (optional) → detect
//! the block size (unless overridden) → extract the color grid → emit the
//! vector document. Rasterization stays a separate call so one document can
//! be rendered at several scales.
//!
//! The restorer holds no shared mutable state: one instance may serve many
//! images in turn, and independent instances can run concurrently.
//!
//! Typical usage:
//! ```no_run
//! use pixel_restore::{PixelRestorer, RestoreParams};
//!
//! # fn example(bytes: &[u8]) -> Result<(), pixel_restore::RestoreError> {
//! let restorer = PixelRestorer::new(RestoreParams::default());
//! let report = restorer.process_bytes(bytes)?;
//! println!("block={} rects={}", report.block_size, report.rect_count);
//! # Ok(())
//! # }
//! ```

use crate::detector::{DetectorParams, GridSizeDetector};
use crate::error::RestoreError;
use crate::extract::{BlockColorExtractor, ExtractorParams};
use crate::image::io::decode_rgba;
use crate::image::RasterImage;
use crate::report::{RestoreReport, TimingBreakdown};
use crate::vector::{EmitterOptions, VectorEmitter};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters for the full pipeline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreParams {
    /// Skip detection and extract at this block size.
    pub block_size_override: Option<usize>,
    /// Grid-size detection parameters.
    pub detector: DetectorParams,
    /// Color extraction parameters.
    pub extractor: ExtractorParams,
    /// Vector emission options.
    pub emitter: EmitterOptions,
}

/// End-to-end pipeline facade.
#[derive(Clone, Debug, Default)]
pub struct PixelRestorer {
    params: RestoreParams,
}

impl PixelRestorer {
    /// Create a restorer with the supplied parameters.
    pub fn new(params: RestoreParams) -> Self {
        Self { params }
    }

    /// Borrow the active parameters.
    pub fn params(&self) -> &RestoreParams {
        &self.params
    }

    /// Decode encoded raster bytes and run [`PixelRestorer::process`].
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<RestoreReport, RestoreError> {
        let image = decode_rgba(bytes)?;
        self.process(&image)
    }

    /// Run detection (unless overridden), extraction, and emission.
    pub fn process(&self, image: &RasterImage) -> Result<RestoreReport, RestoreError> {
        let total_start = Instant::now();

        // 1) Block size: an explicit override bypasses detection entirely.
        let stage_start = Instant::now();
        let (detection, block_size) = match self.params.block_size_override {
            Some(block) => (None, block),
            None => {
                let detection =
                    GridSizeDetector::new(self.params.detector.clone()).detect(image)?;
                let block = detection.block_size;
                (Some(detection), block)
            }
        };
        let detect_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        // 2) Dominant color per grid cell.
        let stage_start = Instant::now();
        let grid =
            BlockColorExtractor::new(self.params.extractor.clone()).extract(image, block_size)?;
        let extract_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        // 3) Vector document.
        let stage_start = Instant::now();
        let document = VectorEmitter::new(self.params.emitter).emit(&grid);
        let emit_ms = stage_start.elapsed().as_secs_f64() * 1000.0;

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "pipeline: block={} grid={}x{} rects={} total_ms={:.3}",
            block_size,
            grid.cols,
            grid.rows,
            document.rects.len(),
            total_ms
        );

        Ok(RestoreReport {
            detection,
            block_size,
            grid_cols: grid.cols,
            grid_rows: grid.rows,
            rect_count: document.rects.len(),
            palette_size: grid.palette_size(),
            timings: TimingBreakdown {
                detect_ms,
                extract_ms,
                emit_ms,
                total_ms,
            },
            document,
        })
    }
}

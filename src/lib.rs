#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod error;
pub mod extract;
pub mod image;
pub mod pipeline;
pub mod raster;
pub mod report;
pub mod vector;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline facade + results.
pub use crate::error::RestoreError;
pub use crate::pipeline::{PixelRestorer, RestoreParams};
pub use crate::report::{RestoreReport, TimingBreakdown};

// Stage components, each usable on its own.
pub use crate::detector::{CandidateScore, Detection, DetectorParams, GridSizeDetector};
pub use crate::extract::{
    BlockColor, BlockColorExtractor, BlockGrid, ExtractorParams, TransparencyMode,
};
pub use crate::raster::rasterize;
pub use crate::vector::{
    from_svg, to_svg, EmitterOptions, RectPrimitive, VectorDocument, VectorEmitter,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pixel_restore::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = std::fs::read("upscaled.png")?;
/// let report = PixelRestorer::new(RestoreParams::default()).process_bytes(&bytes)?;
/// let clean = rasterize(&report.document, 1)?;
/// println!("{}x{} blocks -> {}x{} px", report.grid_cols, report.grid_rows, clean.w, clean.h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{RasterImage, Rgba};
    pub use crate::raster::rasterize;
    pub use crate::{
        Detection, GridSizeDetector, PixelRestorer, RestoreError, RestoreParams, RestoreReport,
    };
}

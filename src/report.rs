//! Serializable result of one restoration run.

use crate::detector::Detection;
use crate::vector::VectorDocument;
use serde::Serialize;

/// Wall-clock stage timings in milliseconds.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub detect_ms: f64,
    pub extract_ms: f64,
    pub emit_ms: f64,
    pub total_ms: f64,
}

/// Everything produced by one restoration run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreReport {
    /// Detection outcome; `None` when an explicit block size was supplied.
    pub detection: Option<Detection>,
    /// Block size the grid was extracted at, in source pixels.
    pub block_size: usize,
    /// Cell columns in the extracted grid.
    pub grid_cols: usize,
    /// Cell rows in the extracted grid.
    pub grid_rows: usize,
    /// Rectangles emitted into the document.
    pub rect_count: usize,
    /// Distinct colors among visible cells.
    pub palette_size: usize,
    /// Per-stage wall-clock timings.
    pub timings: TimingBreakdown,
    /// The emitted vector document.
    pub document: VectorDocument,
}

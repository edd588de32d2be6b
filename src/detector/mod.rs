//! Grid-size detection for upscaled pixel art.
//!
//! Overview
//! - Enumerates candidate block sizes (caller-provided, or powers of two and
//!   3x powers of two derived from the image dimensions).
//! - Scores every candidate independently: within-block color uniformity plus
//!   color contrast across the tentative grid lines, combined as a weighted
//!   sum with uniformity dominating.
//! - Selects the best candidate with a deterministic tie-break (smaller block
//!   wins) and reports a margin-based confidence; flat images fall back to
//!   the smallest grid-like candidate.
//!
//! Modules
//! - [`params`] – configuration with documented defaults.
//! - [`candidates`] – candidate enumeration and hygiene.
//! - `score` – the two metrics and their parallel evaluation.
//! - `pipeline` – the [`GridSizeDetector`] front end.
//!
//! Key ideas
//! - The grid is axis-aligned and anchored at (0,0); only the block size is
//!   unknown. Scoring is linear in pixel count per candidate.
//! - All accumulation is integral until the final division, so scores do not
//!   depend on evaluation order or thread count.

pub mod candidates;
pub mod params;
mod pipeline;
mod score;

pub use candidates::{derive_candidates, sanitize_candidates};
pub use params::DetectorParams;
pub use pipeline::{Detection, GridSizeDetector};
pub use score::{score_candidate, score_candidates, CandidateScore};

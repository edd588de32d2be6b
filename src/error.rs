//! Error type shared across the pipeline.

use thiserror::Error;

/// Failures surfaced by the restoration pipeline.
///
/// Detection quality is never an error: a low-confidence detection is still a
/// detection. Errors are reserved for inputs that cannot be processed at all
/// and for configurations that cannot describe a valid grid.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// Input that cannot be decoded or is unusable (empty payload, image too
    /// small, malformed vector markup).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Configuration that cannot describe a valid grid or output (block size
    /// zero or too large, empty candidate set, zero output scale).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Codec failure while encoding output images.
    #[error("image codec failure: {0}")]
    Codec(#[from] image::ImageError),
}

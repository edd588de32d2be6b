//! JSON runtime configuration for the demo binary.

use crate::pipeline::RestoreParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output destinations; everything is optional.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the SVG document.
    pub svg_out: Option<PathBuf>,
    /// Where to write the re-rasterized PNG.
    pub png_out: Option<PathBuf>,
    /// Where to write the JSON report.
    pub json_out: Option<PathBuf>,
    /// Output edge length per block for `png_out`.
    pub target_block_pixels: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            svg_out: None,
            png_out: None,
            json_out: None,
            target_block_pixels: 1,
        }
    }
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub restore_params: RestoreParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

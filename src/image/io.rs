//! I/O helpers for RGBA images, markup, and JSON.
//!
//! - `decode_rgba`: decode encoded raster bytes (PNG/JPEG/etc.) into a `RasterImage`.
//! - `encode_png`: encode a `RasterImage` as PNG bytes.
//! - `load_rgba_image` / `save_png`: path-based variants for tools.
//! - `write_json_file` / `write_text_file`: persist reports and markup to disk.

use super::RasterImage;
use crate::error::RestoreError;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba as ImageRgba};
use serde::Serialize;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Decode encoded raster bytes into an owned RGBA buffer.
pub fn decode_rgba(bytes: &[u8]) -> Result<RasterImage, RestoreError> {
    if bytes.is_empty() {
        return Err(RestoreError::InvalidInput("empty image payload".to_string()));
    }
    let img = image::load_from_memory(bytes)
        .map_err(|e| RestoreError::InvalidInput(format!("failed to decode image: {e}")))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RasterImage::from_rgba8(width, height, img.into_raw())
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, RestoreError> {
    let buffer = to_image_buffer(image)?;
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(buffer).write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RasterImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RasterImage::from_rgba8(width, height, img.into_raw())
        .map_err(|e| format!("Failed to load {}: {e}", path.display()))
}

/// Save an RGBA buffer to a PNG on disk.
pub fn save_png(image: &RasterImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer = to_image_buffer(image)
        .map_err(|e| format!("Failed to prepare {}: {e}", path.display()))?;
    DynamicImage::ImageRgba8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Write markup or plain text to `path`, creating parent directories.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn to_image_buffer(image: &RasterImage) -> Result<ImageBuffer<ImageRgba<u8>, Vec<u8>>, RestoreError> {
    ImageBuffer::from_raw(image.w as u32, image.h as u32, image.data.clone()).ok_or_else(|| {
        RestoreError::InvalidInput(format!(
            "RGBA buffer does not match {}x{} image",
            image.w, image.h
        ))
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

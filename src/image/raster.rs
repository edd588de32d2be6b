//! Owned RGBA image buffer in row-major layout.
//!
//! Four bytes per pixel, rows contiguous. This is the single raster type the
//! pipeline operates on; codecs live in [`super::io`].

use super::color::Rgba;
use crate::error::RestoreError;

/// Owned 8-bit RGBA buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// RGBA bytes in row-major order, `4 * w * h` total
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Construct a fully transparent buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * 4],
        }
    }

    /// Construct from raw RGBA bytes. `data.len()` must equal `4 * w * h`
    /// and both dimensions must be positive.
    pub fn from_rgba8(w: usize, h: usize, data: Vec<u8>) -> Result<Self, RestoreError> {
        if w == 0 || h == 0 {
            return Err(RestoreError::InvalidInput(format!(
                "image dimensions must be positive, got {w}x{h}"
            )));
        }
        if data.len() != w * h * 4 {
            return Err(RestoreError::InvalidInput(format!(
                "RGBA buffer holds {} bytes, expected {} for {w}x{h}",
                data.len(),
                w * h * 4
            )));
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    /// Convert (x, y) to the byte offset of the pixel in `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 4
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        let i = self.idx(x, y);
        Rgba::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, c: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = c.r;
        self.data[i + 1] = c.g;
        self.data[i + 2] = c.b;
        self.data[i + 3] = c.a;
    }

    #[inline]
    /// Borrow row `y` as RGBA bytes.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * 4;
        &self.data[start..start + self.w * 4]
    }

    /// Fill the rectangle `[x0, x0+rw) × [y0, y0+rh)` with one color,
    /// clamped to the image bounds.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, rw: usize, rh: usize, c: Rgba) {
        let x1 = (x0 + rw).min(self.w);
        let y1 = (y0 + rh).min(self.h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px = [c.r, c.g, c.b, c.a];
        for y in y0..y1 {
            let start = (y * self.w + x0) * 4;
            let end = (y * self.w + x1) * 4;
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }
}

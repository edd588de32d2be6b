//! Vector document model.

use crate::image::Rgba;
use serde::Serialize;

/// One grid cell in the vector document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectPrimitive {
    /// Cell column in the block grid.
    pub col: usize,
    /// Cell row in the block grid.
    pub row: usize,
    /// Fill color; the alpha channel carries the rect opacity.
    pub fill: Rgba,
}

/// Compact vector form of a restored image: one rectangle per visible cell
/// on a `cols * block_size x rows * block_size` canvas.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorDocument {
    /// Cell columns on the canvas.
    pub cols: usize,
    /// Cell rows on the canvas.
    pub rows: usize,
    /// Edge length of one cell in canvas pixels.
    pub block_size: usize,
    /// Rectangles in row-major emission order.
    pub rects: Vec<RectPrimitive>,
}

impl VectorDocument {
    /// Canvas width in logical pixels.
    pub fn canvas_width(&self) -> usize {
        self.cols * self.block_size
    }

    /// Canvas height in logical pixels.
    pub fn canvas_height(&self) -> usize {
        self.rows * self.block_size
    }
}

//! Color grid produced by extraction.

use crate::image::Rgba;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Alpha handling for non-transparent cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransparencyMode {
    /// Keep the dominant color's alpha channel.
    #[default]
    Preserve,
    /// Force full opacity.
    Opaque,
}

/// Dominant color of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlockColor {
    /// Modal RGBA over the covered pixels.
    pub color: Rgba,
    /// Mean-alpha transparency decision.
    pub transparent: bool,
}

/// Row-major grid of dominant cell colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlockGrid {
    /// Number of cell columns, `ceil(image_width / block_size)`.
    pub cols: usize,
    /// Number of cell rows, `ceil(image_height / block_size)`.
    pub rows: usize,
    /// Block size the grid was extracted at, in source pixels.
    pub block_size: usize,
    /// `cols * rows` cells in row-major order.
    pub cells: Vec<BlockColor>,
}

impl BlockGrid {
    #[inline]
    /// Borrow the cell at (col, row).
    pub fn cell(&self, col: usize, row: usize) -> &BlockColor {
        &self.cells[row * self.cols + col]
    }

    /// Number of non-transparent cells.
    pub fn visible_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.transparent).count()
    }

    /// Number of distinct colors among non-transparent cells.
    pub fn palette_size(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| !c.transparent)
            .map(|c| c.color.to_packed())
            .collect::<BTreeSet<u32>>()
            .len()
    }
}

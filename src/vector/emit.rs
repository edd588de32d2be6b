//! Vector emission from a color grid.

use super::document::{RectPrimitive, VectorDocument};
use crate::extract::BlockGrid;
use log::debug;
use serde::{Deserialize, Serialize};

/// Options for vector emission.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Emit transparent cells explicitly with opacity 0 instead of omitting
    /// them.
    pub include_transparent: bool,
}

/// Emits one rectangle per visible grid cell, row-major.
#[derive(Clone, Debug, Default)]
pub struct VectorEmitter {
    options: EmitterOptions,
}

impl VectorEmitter {
    /// Create an emitter with the supplied options.
    pub fn new(options: EmitterOptions) -> Self {
        Self { options }
    }

    /// Walk the grid row by row and emit one rectangle per visible cell.
    pub fn emit(&self, grid: &BlockGrid) -> VectorDocument {
        let mut rects = Vec::with_capacity(grid.visible_cells());
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let cell = grid.cell(col, row);
                if cell.transparent {
                    if self.options.include_transparent {
                        rects.push(RectPrimitive {
                            col,
                            row,
                            fill: cell.color.with_alpha(0),
                        });
                    }
                    continue;
                }
                rects.push(RectPrimitive {
                    col,
                    row,
                    fill: cell.color,
                });
            }
        }
        debug!(
            "emitter: {} rect(s) from {}x{} grid",
            rects.len(),
            grid.cols,
            grid.rows
        );
        VectorDocument {
            cols: grid.cols,
            rows: grid.rows,
            block_size: grid.block_size,
            rects,
        }
    }
}

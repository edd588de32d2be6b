use pixel_restore::image::{RasterImage, Rgba};

/// Eight maximally separated opaque colors, one per corner of the RGB cube.
pub const CUBE_CORNERS: [Rgba; 8] = [
    Rgba::opaque(0, 0, 0),
    Rgba::opaque(255, 0, 0),
    Rgba::opaque(0, 255, 0),
    Rgba::opaque(0, 0, 255),
    Rgba::opaque(255, 255, 0),
    Rgba::opaque(255, 0, 255),
    Rgba::opaque(0, 255, 255),
    Rgba::opaque(255, 255, 255),
];

/// Palette index of the cell at `(col, row)`.
///
/// The index steps by 1 per column and 3 per row; both are coprime with the
/// 8-entry palette, so no two 4-neighbouring cells share a color.
pub fn palette_index(col: usize, row: usize, palette_len: usize) -> usize {
    assert!(palette_len > 0, "palette must not be empty");
    (col + row * 3) % palette_len
}

/// Paints a solid grid of `cols x rows` cells, each `block` pixels square.
pub fn block_grid_image(cols: usize, rows: usize, block: usize, palette: &[Rgba]) -> RasterImage {
    assert!(cols > 0 && rows > 0, "grid dimensions must be positive");
    assert!(block > 0, "block size must be positive");
    assert!(!palette.is_empty(), "palette must not be empty");

    let mut img = RasterImage::new(cols * block, rows * block);
    for y in 0..img.h {
        for x in 0..img.w {
            let idx = palette_index(x / block, y / block, palette.len());
            img.set(x, y, palette[idx]);
        }
    }
    img
}

/// Paints a grid over an arbitrary canvas; cells at the right and bottom
/// edges may be clipped when the canvas is not a multiple of `block`.
pub fn clipped_grid_image(width: usize, height: usize, block: usize, palette: &[Rgba]) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(block > 0, "block size must be positive");
    assert!(!palette.is_empty(), "palette must not be empty");

    let mut img = RasterImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let idx = palette_index(x / block, y / block, palette.len());
            img.set(x, y, palette[idx]);
        }
    }
    img
}

/// Overwrites one cell of a block grid with a solid color.
pub fn paint_cell(img: &mut RasterImage, col: usize, row: usize, block: usize, color: Rgba) {
    assert!(block > 0, "block size must be positive");
    img.fill_rect(col * block, row * block, block, block, color);
}

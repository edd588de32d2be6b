mod common;

use common::synthetic_image::{block_grid_image, paint_cell, palette_index, CUBE_CORNERS};
use pixel_restore::image::io::encode_png;
use pixel_restore::image::Rgba;
use pixel_restore::{rasterize, PixelRestorer, RestoreError, RestoreParams};

#[test]
fn perfect_grid_restores_byte_for_byte() {
    let block = 8usize;
    let cells = 8usize;
    let img = block_grid_image(cells, cells, block, &CUBE_CORNERS);

    let restorer = PixelRestorer::new(RestoreParams::default());
    let report = restorer.process(&img).expect("restoration should succeed");

    let detection = report.detection.as_ref().expect("detection should run");
    assert_eq!(
        detection.block_size, block,
        "expected block size {block}, got {}",
        detection.block_size
    );
    assert_eq!(
        detection.confidence, 1.0,
        "clean grid should saturate confidence, got {:.4}",
        detection.confidence
    );

    assert_eq!(report.grid_cols, cells);
    assert_eq!(report.grid_rows, cells);
    assert_eq!(report.rect_count, cells * cells);
    assert_eq!(report.palette_size, CUBE_CORNERS.len());
    for rect in &report.document.rects {
        let idx = palette_index(rect.col, rect.row, CUBE_CORNERS.len());
        assert_eq!(rect.fill, CUBE_CORNERS[idx], "wrong fill at ({}, {})", rect.col, rect.row);
    }

    let rendered = rasterize(&report.document, block).expect("rasterization should succeed");
    assert_eq!(rendered.w, img.w);
    assert_eq!(rendered.h, img.h);
    assert_eq!(rendered.data, img.data, "render must reproduce the source bytes");
}

#[test]
fn transparent_cells_are_omitted_and_render_clear() {
    let block = 8usize;
    let mut img = block_grid_image(4, 4, block, &CUBE_CORNERS);
    let hole = Rgba::new(10, 20, 30, 0);
    paint_cell(&mut img, 1, 2, block, hole);
    paint_cell(&mut img, 3, 0, block, hole);

    let restorer = PixelRestorer::new(RestoreParams::default());
    let report = restorer.process(&img).expect("restoration should succeed");

    assert_eq!(report.block_size, block);
    assert_eq!(report.rect_count, 16 - 2, "transparent cells must not emit rects");
    // Cell (1, 2) held the only use of palette entry 7.
    assert_eq!(report.palette_size, CUBE_CORNERS.len() - 1);
    assert!(report
        .document
        .rects
        .iter()
        .all(|r| !(r.col == 1 && r.row == 2) && !(r.col == 3 && r.row == 0)));

    let rendered = rasterize(&report.document, block).expect("rasterization should succeed");
    assert_eq!(rendered.get(block + 3, 2 * block + 5), Rgba::TRANSPARENT);
    assert_eq!(rendered.get(3 * block + 1, 1), Rgba::TRANSPARENT);
    let kept = palette_index(2, 2, CUBE_CORNERS.len());
    assert_eq!(rendered.get(2 * block, 2 * block), CUBE_CORNERS[kept]);
}

#[test]
fn explicit_block_size_skips_detection() {
    let img = block_grid_image(8, 8, 8, &CUBE_CORNERS);

    let detected = PixelRestorer::new(RestoreParams::default())
        .process(&img)
        .expect("detected run should succeed");
    let overridden = PixelRestorer::new(RestoreParams {
        block_size_override: Some(8),
        ..Default::default()
    })
    .process(&img)
    .expect("overridden run should succeed");

    assert!(overridden.detection.is_none(), "override must bypass detection");
    assert_eq!(overridden.block_size, 8);
    assert_eq!(overridden.document, detected.document);
}

#[test]
fn encoded_bytes_and_raw_pixels_agree() {
    let img = block_grid_image(6, 4, 4, &CUBE_CORNERS);
    let bytes = encode_png(&img).expect("encoding should succeed");

    let restorer = PixelRestorer::new(RestoreParams::default());
    let from_pixels = restorer.process(&img).expect("pixel run should succeed");
    let from_bytes = restorer
        .process_bytes(&bytes)
        .expect("byte run should succeed");

    assert_eq!(from_bytes.block_size, from_pixels.block_size);
    assert_eq!(from_bytes.document, from_pixels.document);
}

#[test]
fn repeated_runs_are_identical() {
    let img = block_grid_image(8, 8, 8, &CUBE_CORNERS);
    let restorer = PixelRestorer::new(RestoreParams::default());

    let a = restorer.process(&img).expect("first run should succeed");
    let b = restorer.process(&img).expect("second run should succeed");

    let da = a.detection.expect("detection should run");
    let db = b.detection.expect("detection should run");
    assert_eq!(da.block_size, db.block_size);
    assert_eq!(da.confidence, db.confidence);
    assert_eq!(da.scores, db.scores);
    assert_eq!(a.document, b.document);
}

#[test]
fn degenerate_inputs_are_rejected() {
    let restorer = PixelRestorer::new(RestoreParams::default());

    let sliver = block_grid_image(1, 3, 1, &CUBE_CORNERS);
    let err = restorer.process(&sliver).expect_err("1x3 input must fail");
    assert!(matches!(err, RestoreError::InvalidInput(_)), "got {err:?}");

    let img = block_grid_image(4, 4, 8, &CUBE_CORNERS);
    let zero = PixelRestorer::new(RestoreParams {
        block_size_override: Some(0),
        ..Default::default()
    })
    .process(&img)
    .expect_err("zero block size must fail");
    assert!(matches!(zero, RestoreError::InvalidConfiguration(_)), "got {zero:?}");

    let oversized = PixelRestorer::new(RestoreParams {
        block_size_override: Some(20),
        ..Default::default()
    })
    .process(&img)
    .expect_err("block larger than half the canvas must fail");
    assert!(
        matches!(oversized, RestoreError::InvalidConfiguration(_)),
        "got {oversized:?}"
    );
}

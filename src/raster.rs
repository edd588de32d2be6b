//! Rasterization of vector documents.

use crate::error::RestoreError;
use crate::image::RasterImage;
use crate::vector::VectorDocument;
use log::debug;

/// Render `doc` with every cell drawn as a `target_block_pixels` square.
///
/// The canvas starts fully transparent; rectangles are painted in document
/// order, later ones overwriting earlier ones where they overlap. The same
/// document and scale always produce the same bytes.
pub fn rasterize(
    doc: &VectorDocument,
    target_block_pixels: usize,
) -> Result<RasterImage, RestoreError> {
    if target_block_pixels == 0 {
        return Err(RestoreError::InvalidConfiguration(
            "target block pixels must be positive".to_string(),
        ));
    }
    let (w, h) = doc
        .cols
        .checked_mul(target_block_pixels)
        .zip(doc.rows.checked_mul(target_block_pixels))
        .ok_or_else(|| {
            RestoreError::InvalidConfiguration(format!(
                "{}x{} cells at {target_block_pixels}px per block overflow the canvas",
                doc.cols, doc.rows
            ))
        })?;

    let mut out = RasterImage::new(w, h);
    for rect in &doc.rects {
        out.fill_rect(
            rect.col * target_block_pixels,
            rect.row * target_block_pixels,
            target_block_pixels,
            target_block_pixels,
            rect.fill,
        );
    }
    debug!(
        "rasterizer: {} rect(s) onto {}x{} at {}px per block",
        doc.rects.len(),
        w,
        h,
        target_block_pixels
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgba;
    use crate::vector::RectPrimitive;

    fn one_rect_doc() -> VectorDocument {
        VectorDocument {
            cols: 3,
            rows: 2,
            block_size: 8,
            rects: vec![RectPrimitive {
                col: 1,
                row: 0,
                fill: Rgba::opaque(10, 200, 40),
            }],
        }
    }

    #[test]
    fn zero_scale_is_rejected() {
        let err = rasterize(&one_rect_doc(), 0).unwrap_err();
        assert!(matches!(err, RestoreError::InvalidConfiguration(_)));
    }

    #[test]
    fn uncovered_area_stays_fully_transparent() {
        let img = rasterize(&one_rect_doc(), 4).unwrap();
        assert_eq!((img.w, img.h), (12, 8));
        assert_eq!(img.get(0, 0), Rgba::TRANSPARENT);
        assert_eq!(img.get(11, 7), Rgba::TRANSPARENT);
        assert_eq!(img.get(4, 0), Rgba::opaque(10, 200, 40));
        assert_eq!(img.get(7, 3), Rgba::opaque(10, 200, 40));
        assert_eq!(img.get(8, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn later_rects_overwrite_earlier_ones() {
        let mut doc = one_rect_doc();
        doc.rects.push(RectPrimitive {
            col: 1,
            row: 0,
            fill: Rgba::opaque(250, 250, 250),
        });
        let img = rasterize(&doc, 2).unwrap();
        assert_eq!(img.get(2, 0), Rgba::opaque(250, 250, 250));
    }

    #[test]
    fn rasterization_is_idempotent() {
        let doc = one_rect_doc();
        let a = rasterize(&doc, 3).unwrap();
        let b = rasterize(&doc, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.data, b.data);
    }
}

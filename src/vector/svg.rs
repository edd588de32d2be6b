//! SVG serialization of vector documents and strict parsing back.
//!
//! The writer emits a narrow dialect (one self-closing `<rect>` per cell,
//! pixel units, `shape-rendering:crispEdges`) and the parser accepts exactly
//! that dialect; this is a round-trip format, not a general SVG reader.
//! Opacities are written with four decimals, which is lossless for 8-bit
//! alpha in both directions.

use super::document::{RectPrimitive, VectorDocument};
use crate::error::RestoreError;
use crate::image::Rgba;

/// Serialize a document as SVG markup.
pub fn to_svg(doc: &VectorDocument) -> String {
    let bs = doc.block_size;
    let mut out = String::with_capacity(128 + doc.rects.len() * 80);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" style=\"shape-rendering:crispEdges;\">\n",
        w = doc.canvas_width(),
        h = doc.canvas_height(),
    ));
    for rect in &doc.rects {
        out.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{bs}\" height=\"{bs}\" fill=\"{}\" fill-opacity=\"{:.4}\" />\n",
            rect.col * bs,
            rect.row * bs,
            rect.fill.rgb_hex(),
            rect.fill.a as f64 / 255.0,
        ));
    }
    out.push_str("</svg>\n");
    out
}

/// Parse a document from the dialect produced by [`to_svg`].
///
/// All rectangles must be squares of one common size aligned to the grid it
/// implies; the viewBox must start at the origin and be a multiple of that
/// size. Anything else is `InvalidInput`. A document without rectangles
/// parses with unit block size.
pub fn from_svg(markup: &str) -> Result<VectorDocument, RestoreError> {
    let trimmed = markup.trim();
    if !trimmed.starts_with("<svg") {
        return Err(invalid("markup does not start with an <svg> element"));
    }
    if !trimmed.ends_with("</svg>") {
        return Err(invalid("markup does not end with </svg>"));
    }
    // the first '>' must belong to the open tag, not the trailing </svg>
    let body_end = trimmed.len() - "</svg>".len();
    let header_end = trimmed
        .find('>')
        .filter(|&end| end < body_end)
        .ok_or_else(|| invalid("unterminated <svg> element"))?;
    let header = &trimmed[..header_end];

    let view_box = attr(header, "viewBox").ok_or_else(|| invalid("<svg> element missing viewBox"))?;
    let parts: Vec<&str> = view_box.split_whitespace().collect();
    if parts.len() != 4 || parts[0] != "0" || parts[1] != "0" {
        return Err(invalid("viewBox must have the form \"0 0 <width> <height>\""));
    }
    let canvas_w = parse_usize(parts[2], "viewBox width")?;
    let canvas_h = parse_usize(parts[3], "viewBox height")?;
    if canvas_w == 0 || canvas_h == 0 {
        return Err(invalid("viewBox dimensions must be positive"));
    }

    // collect the raw rect elements first; the block size is whatever
    // square size they agree on
    let body = &trimmed[header_end + 1..body_end];
    let mut raw_rects = Vec::new();
    let mut rest = body;
    while let Some(start) = rest.find("<rect") {
        let tail = &rest[start..];
        let end = tail
            .find("/>")
            .ok_or_else(|| invalid("unterminated <rect> element"))?;
        raw_rects.push(&tail[..end]);
        rest = &tail[end + 2..];
    }

    let mut block_size: Option<usize> = None;
    let mut placed = Vec::with_capacity(raw_rects.len());
    for raw in &raw_rects {
        let x = parse_usize(required_attr(raw, "x")?, "rect x")?;
        let y = parse_usize(required_attr(raw, "y")?, "rect y")?;
        let w = parse_usize(required_attr(raw, "width")?, "rect width")?;
        let h = parse_usize(required_attr(raw, "height")?, "rect height")?;
        if w == 0 || w != h {
            return Err(invalid(&format!("rect must be a positive square, got {w}x{h}")));
        }
        match block_size {
            None => block_size = Some(w),
            Some(bs) if bs != w => {
                return Err(invalid(&format!("mixed rect sizes {bs} and {w}")));
            }
            Some(_) => {}
        }
        let fill = parse_fill(required_attr(raw, "fill")?)?;
        let alpha = match attr(raw, "fill-opacity") {
            Some(text) => parse_opacity(text)?,
            None => 255,
        };
        placed.push((x, y, fill.with_alpha(alpha)));
    }

    let bs = block_size.unwrap_or(1);
    if canvas_w % bs != 0 || canvas_h % bs != 0 {
        return Err(invalid(&format!(
            "viewBox {canvas_w}x{canvas_h} is not a multiple of the block size {bs}"
        )));
    }
    let cols = canvas_w / bs;
    let rows = canvas_h / bs;

    let mut rects = Vec::with_capacity(placed.len());
    for (x, y, fill) in placed {
        if x % bs != 0 || y % bs != 0 {
            return Err(invalid(&format!("rect at ({x}, {y}) is not aligned to the {bs}px grid")));
        }
        let (col, row) = (x / bs, y / bs);
        if col >= cols || row >= rows {
            return Err(invalid(&format!("rect at ({x}, {y}) lies outside the canvas")));
        }
        rects.push(RectPrimitive { col, row, fill });
    }

    Ok(VectorDocument {
        cols,
        rows,
        block_size: bs,
        rects,
    })
}

fn invalid(msg: &str) -> RestoreError {
    RestoreError::InvalidInput(format!("malformed SVG document: {msg}"))
}

/// Value of `name="..."` inside one element, if present.
fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = element.find(&needle)? + needle.len();
    let rest = &element[start..];
    rest.find('"').map(|end| &rest[..end])
}

fn required_attr<'a>(element: &'a str, name: &str) -> Result<&'a str, RestoreError> {
    attr(element, name).ok_or_else(|| invalid(&format!("rect element missing {name:?} attribute")))
}

fn parse_usize(text: &str, what: &str) -> Result<usize, RestoreError> {
    text.parse::<usize>()
        .map_err(|_| invalid(&format!("{what} {text:?} is not a non-negative integer")))
}

fn parse_fill(text: &str) -> Result<Rgba, RestoreError> {
    let hex = text
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.is_ascii())
        .ok_or_else(|| invalid(&format!("fill {text:?} is not #rrggbb")))?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| invalid(&format!("fill {text:?} is not #rrggbb")))
    };
    Ok(Rgba::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_opacity(text: &str) -> Result<u8, RestoreError> {
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| (0.0..=1.0).contains(v))
        .ok_or_else(|| invalid(&format!("fill-opacity {text:?} is not in [0, 1]")))?;
    Ok((value * 255.0).round() as u8)
}

//! Vector document model, emission, and the SVG round trip.

mod document;
mod emit;
mod svg;

pub use document::{RectPrimitive, VectorDocument};
pub use emit::{EmitterOptions, VectorEmitter};
pub use svg::{from_svg, to_svg};

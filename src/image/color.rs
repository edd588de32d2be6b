//! RGBA color value used throughout the pipeline.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color. Alpha is straight (never premultiplied).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Pack as `0xRRGGBBAA`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Unpack from `0xRRGGBBAA`.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 24) as u8,
            g: (packed >> 16) as u8,
            b: (packed >> 8) as u8,
            a: packed as u8,
        }
    }

    /// Lowercase `#rrggbb` hex of the RGB channels.
    pub fn rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_roundtrip() {
        let c = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_packed(), 0x1234_5678);
        assert_eq!(Rgba::from_packed(c.to_packed()), c);
    }

    #[test]
    fn packed_orders_by_channel() {
        assert_eq!(Rgba::new(1, 0, 0, 0).to_packed(), 0x0100_0000);
        assert_eq!(Rgba::new(0, 0, 0, 1).to_packed(), 0x0000_0001);
    }

    #[test]
    fn hex_is_lowercase_rgb_only() {
        let c = Rgba::new(0xAB, 0x00, 0xFF, 0x80);
        assert_eq!(c.rgb_hex(), "#ab00ff");
    }
}

//! Exact-color histogram backing per-cell mode extraction.

use crate::image::Rgba;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Counts exact RGBA occurrences within one cell.
///
/// Keys are packed `0xRRGGBBAA` values. The accumulation order is recorded
/// so that ties resolve to the color seen first in raster scan order, which
/// keeps the mode independent of hash iteration order.
#[derive(Clone, Debug, Default)]
pub(crate) struct ColorHistogram {
    counts: HashMap<u32, ColorStat>,
    seen: u32,
}

#[derive(Clone, Debug)]
struct ColorStat {
    count: u32,
    first_seen: u32,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulate(&mut self, color: Rgba) {
        let rank = self.seen;
        self.seen += 1;
        self.counts
            .entry(color.to_packed())
            .or_insert(ColorStat {
                count: 0,
                first_seen: rank,
            })
            .count += 1;
    }

    /// The most frequent color; ties go to the color seen first.
    pub fn dominant(&self) -> Option<Rgba> {
        self.counts
            .iter()
            .min_by_key(|(_, stat)| (Reverse(stat.count), stat.first_seen))
            .map(|(&packed, _)| Rgba::from_packed(packed))
    }

    #[cfg(test)]
    pub fn distinct_colors(&self) -> usize {
        self.counts.len()
    }
}

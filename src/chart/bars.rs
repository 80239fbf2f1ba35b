//! Bar chart layout: stacked horizontal bars scaled against the largest
//! item.

use serde::{Deserialize, Serialize};

use crate::entry::SizedItem;

use super::{item_label, BYTES_PER_MIB};

/// Vertical space reserved above the first bar.
const TOP_MARGIN: f64 = 10.0;

/// Surface parameters for the bar layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarOptions {
    /// Reference width a full-length bar maps onto; output fractions are
    /// relative to this surface
    pub panel_width: f64,
    /// Height of each bar
    pub bar_height: f64,
    /// Vertical gap between consecutive bars
    pub bar_gap: f64,
}

impl BarOptions {
    /// Create options for a panel of the given width with default bar
    /// metrics (bars 20 high, 10 apart).
    pub fn new(panel_width: f64) -> Self {
        Self {
            panel_width,
            bar_height: 20.0,
            bar_gap: 10.0,
        }
    }

    /// Set the bar height
    pub fn with_bar_height(mut self, bar_height: f64) -> Self {
        self.bar_height = bar_height;
        self
    }

    /// Set the gap between consecutive bars
    pub fn with_bar_gap(mut self, bar_gap: f64) -> Self {
        self.bar_gap = bar_gap;
        self
    }
}

/// One bar of the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    /// Display label, `"{name}, {size} MB"`
    pub label: String,
    /// Bar length as a fraction of the panel width, in `[0, 1]`
    pub length_fraction: f64,
    /// Zero-based position in the input sequence
    pub order: usize,
}

/// Everything a renderer needs to draw the bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    /// Segments in input order, top to bottom
    pub segments: Vec<BarSegment>,
    /// Height of the stacked bars including gaps and the top margin;
    /// callers size their scroll surface from this
    pub content_height: f64,
}

/// Lay out one horizontal bar per item, stacked top to bottom in input
/// order.
///
/// Lengths are scaled against the *largest* item rather than the total:
/// the biggest entry always spans the full panel and everything else
/// shows relative to it. Sizes are converted to mebibytes before the
/// ratio is taken, the same unit the labels render. Every bar starts at
/// x = 0; only its length varies.
///
/// Never fails: an empty or all-zero input produces zero-length
/// segments, and an empty input reports just the top margin as content
/// height.
pub fn layout_bars(items: &[SizedItem], options: &BarOptions) -> BarLayout {
    let max_mib = items
        .iter()
        .map(|item| item.size() as f64 / BYTES_PER_MIB)
        .fold(0.0, f64::max);

    let mut segments = Vec::with_capacity(items.len());

    for (order, item) in items.iter().enumerate() {
        let mib = item.size() as f64 / BYTES_PER_MIB;
        let length_fraction = if max_mib > 0.0 { mib / max_mib } else { 0.0 };

        segments.push(BarSegment {
            label: item_label(item),
            length_fraction,
            order,
        });
    }

    let content_height = items.len() as f64 * (options.bar_height + options.bar_gap) + TOP_MARGIN;

    BarLayout {
        segments,
        content_height,
    }
}

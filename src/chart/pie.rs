//! Pie chart layout: angular sectors proportional to each item's share
//! of the total.

use serde::{Deserialize, Serialize};

use crate::entry::SizedItem;

use super::item_label;

/// Label anchors sit at this fraction of the radius from the center.
const LABEL_RADIUS_FACTOR: f64 = 0.8;

/// One sector of the pie, angles in degrees.
///
/// Sectors partition the circle starting at 0°; angle 0 points along the
/// positive x axis and angles grow in the renderer's sweep direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSector {
    /// Display label, `"{name}, {size} MB"`
    pub label: String,
    /// Angle where the sector begins
    pub start_angle_deg: f64,
    /// Angular width of the sector
    pub sweep_angle_deg: f64,
}

impl PieSector {
    /// Angle of the sector's midline.
    pub fn mid_angle_deg(&self) -> f64 {
        self.start_angle_deg + self.sweep_angle_deg / 2.0
    }

    /// Point where the renderer should anchor this sector's label: at
    /// 0.8 × radius from the center along the midline. Every sector gets
    /// an anchor, however narrow; skipping overlapping labels is the
    /// renderer's call.
    pub fn label_anchor(&self, center_x: f64, center_y: f64, radius: f64) -> (f64, f64) {
        let mid = self.mid_angle_deg().to_radians();
        (
            center_x + LABEL_RADIUS_FACTOR * radius * mid.cos(),
            center_y + LABEL_RADIUS_FACTOR * radius * mid.sin(),
        )
    }
}

/// Lay out one sector per item, consecutive in input order.
///
/// Each sweep is the item's share of the total size times 360°. Start
/// angles accumulate from 0°; floating-point drift across many items is
/// left as is rather than rebalanced, so the final edge may land a hair
/// off 360°.
///
/// Never fails: a zero total degenerates to sectors with zero start and
/// sweep.
pub fn layout_pie(items: &[SizedItem]) -> Vec<PieSector> {
    let total: u64 = items.iter().map(|item| item.size()).sum();

    let mut sectors = Vec::with_capacity(items.len());
    let mut start_angle_deg = 0.0;

    for item in items {
        let sweep_angle_deg = if total > 0 {
            item.size() as f64 / total as f64 * 360.0
        } else {
            0.0
        };

        sectors.push(PieSector {
            label: item_label(item),
            start_angle_deg,
            sweep_angle_deg,
        });

        start_angle_deg += sweep_angle_deg;
    }

    sectors
}

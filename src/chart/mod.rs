//! Proportional chart layouts for sized directory entries.
//!
//! Both modes consume the same input, a sequence of [`SizedItem`]s in the
//! order the scanner produced them, and emit renderer-agnostic geometry:
//! bars scale against the largest item, pie sectors against the total.
//! Drawing, colors, and widgets stay with the caller.

mod bars;
mod pie;

pub use bars::{layout_bars, BarLayout, BarOptions, BarSegment};
pub use pie::{layout_pie, PieSector};

use crate::entry::SizedItem;
use crate::format::trim_decimals;

/// Bytes per mebibyte, the fixed unit chart labels render in.
pub(crate) const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Chart label for an item: `"{name}, {size} MB"` with the size in
/// mebibytes, at most two decimals, trailing zeros dropped.
///
/// Labels always use mebibytes regardless of magnitude; that convention
/// is independent of [`format_human_size`](crate::format::format_human_size),
/// which auto-scales its unit.
pub(crate) fn item_label(item: &SizedItem) -> String {
    let mib = item.size() as f64 / BYTES_PER_MIB;
    format!("{}, {} MB", item.label(), trim_decimals(mib))
}

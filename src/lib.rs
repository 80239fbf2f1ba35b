//! Directory usage aggregation and chart layouts for disk space
//! visualizers.
//!
//! The crate sizes the immediate children of a selected directory and
//! turns them into renderer-agnostic chart geometry:
//!
//! - [`compute_child_sizes`] produces [`FileEntry`] and [`DirectoryEntry`]
//!   values, tolerating unreadable children (they count as zero).
//! - [`layout_bars`] stacks proportional bars scaled against the largest
//!   item.
//! - [`layout_pie`] cuts the circle into sectors proportional to each
//!   item's share of the total.
//!
//! The [`tree`] module builds the navigation listing shells render next
//! to the charts, and [`format_human_size`] covers tooltips and status
//! text. All outputs are plain serializable data; drawing, colors, and
//! widgets stay with the caller.

pub mod chart;
pub mod entry;
pub mod format;
pub mod scanner;
pub mod tree;

pub use chart::{layout_bars, layout_pie, BarLayout, BarOptions, BarSegment, PieSector};
pub use entry::{DirectoryEntry, DirectoryUsage, FileEntry, SizedItem};
pub use format::format_human_size;
pub use scanner::{compute_child_sizes, ScanError, TRAVERSAL_DEPTH_LIMIT};
pub use tree::{DirectoryTree, NodeKind, TreeNode};

//! On-demand directory sizing.
//!
//! The scanner enumerates the immediate children of a selected directory
//! and aggregates subdirectory sizes by plain recursive traversal. No
//! state is kept between calls, so every invocation reflects the live
//! filesystem.

mod usage;

pub use usage::{compute_child_sizes, TRAVERSAL_DEPTH_LIMIT};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while sizing a directory.
///
/// Unreadable *children* never error; they contribute zero and traversal
/// continues (see [`compute_child_sizes`]). Only the two conditions below
/// reach the caller.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The selected directory itself could not be enumerated
    #[error("cannot read directory {path}: {source}")]
    DirectoryUnavailable {
        /// The directory that was selected for sizing
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Recursive aggregation exceeded the depth limit
    #[error("directory tree below {path} is deeper than {limit} levels")]
    TraversalTooDeep {
        /// The directory at which descent stopped
        path: PathBuf,
        /// The depth limit that was hit
        limit: usize,
    },
}

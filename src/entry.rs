//! Sized entries produced by the scanner and consumed by the chart
//! layouts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file directly inside the selected directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name without any path components
    pub name: String,
    /// Raw byte length as reported by the filesystem
    pub size: u64,
}

/// An immediate subdirectory of the selected directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Directory name without any path components
    pub name: String,
    /// Full path, kept so shells can navigate into the entry
    pub path: PathBuf,
    /// Recursive sum of every readable file byte beneath this directory
    pub size: u64,
}

/// Either kind of entry, viewed uniformly as a labeled size.
///
/// The chart layouts only need a display label and a byte count; this
/// union lets callers mix files and directories in one sequence while
/// keeping their order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizedItem {
    /// A subdirectory with its aggregated size
    Directory(DirectoryEntry),
    /// A file with its raw size
    File(FileEntry),
}

impl SizedItem {
    /// Display label (the entry name).
    pub fn label(&self) -> &str {
        match self {
            SizedItem::Directory(dir) => &dir.name,
            SizedItem::File(file) => &file.name,
        }
    }

    /// Size in bytes, aggregated for directories and raw for files.
    pub fn size(&self) -> u64 {
        match self {
            SizedItem::Directory(dir) => dir.size,
            SizedItem::File(file) => file.size,
        }
    }
}

impl From<DirectoryEntry> for SizedItem {
    fn from(entry: DirectoryEntry) -> Self {
        SizedItem::Directory(entry)
    }
}

impl From<FileEntry> for SizedItem {
    fn from(entry: FileEntry) -> Self {
        SizedItem::File(entry)
    }
}

/// Immediate children of a selected directory, sized for visualization.
///
/// Both lists keep filesystem enumeration order; the chart input order is
/// directories first, then files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUsage {
    /// Immediate subdirectories with recursively aggregated sizes
    pub directories: Vec<DirectoryEntry>,
    /// Immediate files with raw sizes
    pub files: Vec<FileEntry>,
}

impl DirectoryUsage {
    /// Flatten into the chart input sequence: directories, then files.
    pub fn items(&self) -> Vec<SizedItem> {
        let mut items = Vec::with_capacity(self.directories.len() + self.files.len());
        items.extend(self.directories.iter().cloned().map(SizedItem::Directory));
        items.extend(self.files.iter().cloned().map(SizedItem::File));
        items
    }

    /// Combined size of every listed entry.
    pub fn total_size(&self) -> u64 {
        let directories: u64 = self.directories.iter().map(|d| d.size).sum();
        let files: u64 = self.files.iter().map(|f| f.size).sum();
        directories + files
    }

    /// True when the directory has no listed children.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

//! Navigation listing for the shell's directory tree widget.
//!
//! Mirrors what the tree panel shows for a selected directory: every
//! subdirectory recursively, the files of the selected directory itself
//! (nested files are not listed), and the parent path for upward
//! navigation. Unreadable subtrees are skipped, and descent stops quietly
//! at the traversal depth limit so a pathological tree still yields a
//! usable listing.

use std::fs;
use std::path::{Path, PathBuf};

use indextree::Arena;
pub use indextree::NodeId;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::scanner::{ScanError, TRAVERSAL_DEPTH_LIMIT};

/// What a listing node refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of the navigation listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
}

impl TreeNode {
    fn new(path: PathBuf, kind: NodeKind) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Self { name, path, kind }
    }
}

/// Arena-backed listing of a selected directory.
#[derive(Debug)]
pub struct DirectoryTree {
    arena: Arena<TreeNode>,
    root: NodeId,
    parent_path: Option<PathBuf>,
}

impl DirectoryTree {
    /// Build the listing for `path`.
    ///
    /// The root node is the directory itself; below it come all
    /// subdirectories (recursively, directories only past the first
    /// level) followed by the directory's own files. Children that
    /// cannot be read are skipped.
    ///
    /// # Errors
    ///
    /// [`ScanError::DirectoryUnavailable`] if `path` itself cannot be
    /// enumerated.
    pub fn build(path: &Path) -> Result<Self, ScanError> {
        let entries = fs::read_dir(path).map_err(|source| ScanError::DirectoryUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut arena = Arena::new();
        let root = arena.new_node(TreeNode::new(path.to_path_buf(), NodeKind::Directory));

        let mut files = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping unreadable entry in {}: {}", path.display(), err);
                    continue;
                }
            };

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };

            if file_type.is_dir() {
                let child = arena.new_node(TreeNode::new(entry.path(), NodeKind::Directory));
                root.append(child, &mut arena);
                add_subdirectories(&mut arena, child, &entry.path(), 1);
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }

        // Files of the selected directory go after all subdirectories,
        // matching the order the tree panel presents them in.
        for file_path in files {
            let child = arena.new_node(TreeNode::new(file_path, NodeKind::File));
            root.append(child, &mut arena);
        }

        Ok(Self {
            arena,
            root,
            parent_path: path.parent().map(Path::to_path_buf),
        })
    }

    /// Node id of the selected directory.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.arena.get(id).map(|n| n.get())
    }

    /// Children of a node, in listing order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Path of the parent directory, when the selection has one; shells
    /// use it for the navigate-up entry.
    pub fn parent_path(&self) -> Option<&Path> {
        self.parent_path.as_deref()
    }

    /// Total number of nodes including the root.
    pub fn node_count(&self) -> usize {
        self.arena.count()
    }
}

/// Recursively append subdirectory nodes. Only directories are listed
/// below the first level.
fn add_subdirectories(arena: &mut Arena<TreeNode>, parent: NodeId, path: &Path, depth: usize) {
    if depth > TRAVERSAL_DEPTH_LIMIT {
        warn!(
            "listing below {} truncated at {} levels",
            path.display(),
            TRAVERSAL_DEPTH_LIMIT
        );
        return;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("skipping unreadable directory {}: {}", path.display(), err);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry in {}: {}", path.display(), err);
                continue;
            }
        };

        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            let child = arena.new_node(TreeNode::new(entry.path(), NodeKind::Directory));
            parent.append(child, arena);
            add_subdirectories(arena, child, &entry.path(), depth + 1);
        }
    }
}

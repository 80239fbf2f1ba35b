//! Child-size computation for a selected directory.

use std::fs;
use std::path::Path;

use log::debug;

use crate::entry::{DirectoryEntry, DirectoryUsage, FileEntry};

use super::ScanError;

/// Maximum recursion depth for size aggregation.
///
/// Pathologically deep trees abort with [`ScanError::TraversalTooDeep`]
/// instead of exhausting the call stack.
pub const TRAVERSAL_DEPTH_LIMIT: usize = 1000;

/// Size every immediate child of `path`.
///
/// Subdirectories come first, then files, each in filesystem enumeration
/// order. A subdirectory's size is the recursive sum of all readable file
/// bytes beneath it; children that cannot be read contribute zero and are
/// skipped without failing the call. Entries that are neither regular
/// files nor directories (symlinks, sockets, devices) are left out
/// entirely.
///
/// Nothing is cached: calling this twice re-walks the filesystem both
/// times.
///
/// # Errors
///
/// [`ScanError::DirectoryUnavailable`] if `path` itself cannot be
/// enumerated; [`ScanError::TraversalTooDeep`] if a subdirectory nests
/// more than [`TRAVERSAL_DEPTH_LIMIT`] levels deep.
pub fn compute_child_sizes(path: &Path) -> Result<DirectoryUsage, ScanError> {
    let entries = fs::read_dir(path).map_err(|source| ScanError::DirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut usage = DirectoryUsage::default();

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
            Err(err) => {
                debug!("skipping {}: {}", entry.path().display(), err);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();

        if file_type.is_dir() {
            let child_path = entry.path();
            let size = recursive_size(&child_path, 1)?;
            usage.directories.push(DirectoryEntry {
                name,
                path: child_path,
                size,
            });
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(metadata) => usage.files.push(FileEntry {
                    name,
                    size: metadata.len(),
                }),
                Err(err) => {
                    debug!("skipping {}: {}", entry.path().display(), err);
                }
            }
        }
    }

    Ok(usage)
}

/// Recursive byte total of every readable file under `path`.
///
/// An unreadable directory counts as empty; unreadable or special child
/// entries are skipped. `depth` is the number of levels below the
/// directory whose children are being sized.
fn recursive_size(path: &Path, depth: usize) -> Result<u64, ScanError> {
    if depth > TRAVERSAL_DEPTH_LIMIT {
        return Err(ScanError::TraversalTooDeep {
            path: path.to_path_buf(),
            limit: TRAVERSAL_DEPTH_LIMIT,
        });
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(
                "cannot enumerate {}, counting it as empty: {}",
                path.display(),
                err
            );
            return Ok(0);
        }
    };

    let mut total = 0u64;

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
            total += recursive_size(&entry.path(), depth + 1)?;
        } else if file_type.is_file() {
            if let Ok(metadata) = entry.metadata() {
                total += metadata.len();
            }
        }
    }

    Ok(total)
}

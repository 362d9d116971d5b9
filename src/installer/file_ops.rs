//! Basic file operations for resource installation
//!
//! This module handles low-level file operations:
//! - Directory creation (ensure_parent_dir)
//! - Removing an existing destination (remove_existing)
//! - Recursive directory copy (copy_dir_recursive)

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AgrError, Result, file_read_failed, file_write_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
    }
    Ok(())
}

/// True when something (including a dangling symlink) occupies `path`
pub fn path_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Remove whatever occupies `path`. Nothing is backed up.
pub fn remove_existing(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => return Ok(()),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| file_write_failed(path, e))
}

/// Copy the tree under `src` to `dst`, preserving structure.
///
/// Symlinks are not followed and not copied, including `src` itself.
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    let walker = WalkDir::new(src)
        .follow_links(false)
        .follow_root_links(false);

    for entry in walker {
        let entry = entry.map_err(|e| AgrError::FileReadFailed {
            path: e
                .path()
                .map_or_else(|| src.display().to_string(), |p| p.display().to_string()),
            reason: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| file_read_failed(entry.path(), e))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| file_write_failed(&target, e))?;
        } else if file_type.is_file() {
            ensure_parent_dir(&target)?;
            fs::copy(entry.path(), &target).map_err(|e| file_write_failed(&target, e))?;
            copied += 1;
        } else {
            tracing::warn!(path = %entry.path().display(), "skipping symlink in resource");
        }
    }

    Ok(copied)
}

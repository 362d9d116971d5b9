//! Locating a resource inside an extracted repository tree

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AgrError, Result};
use crate::resource::ResourceReference;

/// Path of the resource directory inside the extracted tree.
///
/// `archive_root` is the tarball's top-level directory name (`{repo}-{branch}`).
pub fn resource_path(extracted: &Path, archive_root: &str, reference: &ResourceReference) -> PathBuf {
    extracted
        .join(archive_root)
        .join(".claude")
        .join(reference.kind.plural())
        .join(&reference.name)
}

/// Find the resource directory, failing with [`AgrError::ResourceNotFound`]
/// when it is missing or not a directory.
///
/// A symlink anywhere between `extracted` and the resource directory fails with
/// [`AgrError::UnsafeArchivePath`], since its target lies outside the archive.
pub fn locate_resource(
    extracted: &Path,
    archive_root: &str,
    reference: &ResourceReference,
) -> Result<PathBuf> {
    let source = resource_path(extracted, archive_root, reference);
    reject_symlinks(extracted, &source)?;

    if !source.is_dir() {
        return Err(AgrError::ResourceNotFound {
            kind: reference.kind.title().to_string(),
            name: reference.name.clone(),
            repo: reference.repo_slug(),
            expected: reference.relative_location(),
        });
    }

    tracing::debug!(source = %source.display(), "resource located");
    Ok(source)
}

/// Walk `source` down from `extracted` one component at a time without following links.
fn reject_symlinks(extracted: &Path, source: &Path) -> Result<()> {
    let Ok(relative) = source.strip_prefix(extracted) else {
        return Ok(());
    };

    let mut current = extracted.to_path_buf();
    for component in relative.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                return Err(AgrError::UnsafeArchivePath {
                    path: relative_display(extracted, &current),
                });
            }
            Ok(_) => {}
            // Missing components are reported as not found by the caller
            Err(_) => return Ok(()),
        }
    }

    Ok(())
}

fn relative_display(extracted: &Path, path: &Path) -> String {
    path.strip_prefix(extracted)
        .unwrap_or(path)
        .display()
        .to_string()
}

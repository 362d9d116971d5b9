//! Installing a located resource into a `.claude` directory
//!
//! The destination is `<root>/<kind plural>/<name>`. An occupied destination is
//! an error unless overwrite is requested, in which case it is removed first.
//! Copies are not transactional: a failure part way leaves a partial tree.

pub mod file_ops;

use std::path::{Path, PathBuf};

use crate::error::{AgrError, Result};
use crate::resource::ResourceReference;

/// Destination directory for `reference` under the `.claude` root
pub fn destination_path(dest_root: &Path, reference: &ResourceReference) -> PathBuf {
    dest_root.join(reference.kind.plural()).join(&reference.name)
}

/// Fail with [`AgrError::ResourceExists`] if the destination is occupied and
/// `overwrite` is false. Returns the destination path.
pub fn check_destination(
    dest_root: &Path,
    reference: &ResourceReference,
    overwrite: bool,
) -> Result<PathBuf> {
    let dest = destination_path(dest_root, reference);

    if file_ops::path_occupied(&dest) && !overwrite {
        return Err(AgrError::ResourceExists {
            kind: reference.kind.title().to_string(),
            name: reference.name.clone(),
            path: dest.display().to_string(),
        });
    }

    Ok(dest)
}

/// Copy `source` to `<dest_root>/<kind plural>/<name>` and return the installed path.
pub fn install_resource(
    source: &Path,
    dest_root: &Path,
    reference: &ResourceReference,
    overwrite: bool,
) -> Result<PathBuf> {
    let dest = check_destination(dest_root, reference, overwrite)?;

    if file_ops::path_occupied(&dest) {
        tracing::debug!(path = %dest.display(), "removing existing resource");
        file_ops::remove_existing(&dest)?;
    }

    file_ops::ensure_parent_dir(&dest)?;
    let copied = file_ops::copy_dir_recursive(source, &dest)?;

    tracing::info!(
        kind = %reference.kind,
        name = %reference.name,
        files = copied,
        path = %dest.display(),
        "resource installed"
    );
    Ok(dest)
}

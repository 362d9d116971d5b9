//! Download, extract, locate and install one resource
//!
//! All intermediate files live in a single temp directory that is removed when
//! the fetch returns, whether it succeeded or not.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::installer;
use crate::resource::ResourceReference;
use crate::temp;

use super::extract::extract_tarball;
use super::locate::locate_resource;
use super::transport::GitHubClient;

const ARCHIVE_FILE: &str = "repo.tar.gz";
const EXTRACT_DIR: &str = "extracted";

/// Fetch `reference` and install it under `dest_root` (a `.claude` directory).
///
/// An occupied destination is rejected before any network traffic unless
/// `overwrite` is set. Returns the installed resource directory.
pub fn fetch_resource(
    client: &GitHubClient,
    reference: &ResourceReference,
    dest_root: &Path,
    overwrite: bool,
) -> Result<PathBuf> {
    fetch_resource_in(
        client,
        reference,
        dest_root,
        overwrite,
        &temp::temp_dir_base(),
    )
}

/// [`fetch_resource`] with the scratch directory created under `temp_base`.
pub fn fetch_resource_in(
    client: &GitHubClient,
    reference: &ResourceReference,
    dest_root: &Path,
    overwrite: bool,
    temp_base: &Path,
) -> Result<PathBuf> {
    installer::check_destination(dest_root, reference, overwrite)?;

    let workdir = temp::scoped_temp_dir_in(temp_base)?;
    tracing::debug!(workdir = %workdir.path().display(), "created fetch directory");

    let result = fetch_in(client, reference, dest_root, overwrite, workdir.path());

    let workdir_path = workdir.path().to_path_buf();
    if let Err(e) = workdir.close() {
        tracing::warn!(path = %workdir_path.display(), error = %e, "failed to remove fetch directory");
    }

    result
}

fn fetch_in(
    client: &GitHubClient,
    reference: &ResourceReference,
    dest_root: &Path,
    overwrite: bool,
    workdir: &Path,
) -> Result<PathBuf> {
    let archive = workdir.join(ARCHIVE_FILE);
    client.download_tarball(&reference.owner, &reference.repo, &archive)?;

    let extracted = workdir.join(EXTRACT_DIR);
    extract_tarball(&archive, &extracted)?;

    let archive_root = client.config().archive_root_name(&reference.repo);
    let source = locate_resource(&extracted, &archive_root, reference)?;

    installer::install_resource(&source, dest_root, reference, overwrite)
}

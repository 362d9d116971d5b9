//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::{FetchConfig, InstallScope, ToolVariant, resolve_install_root};
use crate::error::{AgrError, Result};
use crate::fetch::{GitHubClient, fetch_resource};
use crate::resource::{ResourceKind, ResourceReference};
use crate::ui::ProgressReporter;

/// Resolve the directory project-local installs go under.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| AgrError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })
}

/// One resource install as requested on the command line
#[derive(Debug, Clone, Copy)]
pub struct AddRequest<'a> {
    pub reference: &'a str,
    pub kind: ResourceKind,
    pub variant: ToolVariant,
    pub scope: InstallScope,
    pub overwrite: bool,
}

/// Parse, fetch and install one resource, reporting progress through `reporter`.
pub fn add_resource(
    request: &AddRequest<'_>,
    config: FetchConfig,
    project_dir: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<PathBuf> {
    let reference = ResourceReference::parse(
        request.reference,
        request.kind,
        request.variant.default_repo(),
    )?;
    let dest_root = resolve_install_root(request.scope, project_dir)?;
    let client = GitHubClient::new(config)?;

    reporter.start(&format!(
        "Fetching {} '{}' from {}...",
        reference.kind,
        reference.name,
        reference.repo_slug()
    ));

    match fetch_resource(&client, &reference, &dest_root, request.overwrite) {
        Ok(installed) => {
            reporter.finish(&format!(
                "Added {} '{}' to {}",
                reference.kind,
                reference.name,
                installed.display()
            ));
            Ok(installed)
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}

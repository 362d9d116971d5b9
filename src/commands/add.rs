//! Add command implementation

use std::path::{Path, PathBuf};

use crate::cli::AddArgs;
use crate::config::{FetchConfig, InstallScope, ToolVariant};
use crate::error::Result;
use crate::ui::ProgressReporter;

use super::helpers::{AddRequest, add_resource};

/// Run `agr add <kind> <reference>`
pub fn run(
    args: &AddArgs,
    config: FetchConfig,
    project_dir: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<PathBuf> {
    let resource_args = args.resource.args();
    let request = AddRequest {
        reference: &resource_args.reference,
        kind: args.resource.kind(),
        variant: ToolVariant::Agr,
        scope: InstallScope::from_global_flag(resource_args.global),
        overwrite: resource_args.overwrite,
    };

    add_resource(&request, config, project_dir, reporter)
}

//! Legacy `skill-add` command implementation
//!
//! Skills only, from `<username>/agent-skills`, always into the current project.

use std::path::{Path, PathBuf};

use crate::cli::SkillAddCli;
use crate::config::{FetchConfig, InstallScope, ToolVariant};
use crate::error::{Result, invalid_reference};
use crate::resource::ResourceKind;
use crate::ui::ProgressReporter;

use super::helpers::{AddRequest, add_resource};

const EXPECTED_FORMAT: &str = "<username>/<skill-name>";

/// Run `skill-add <username>/<skill-name>`
pub fn run(
    args: &SkillAddCli,
    config: FetchConfig,
    project_dir: &Path,
    reporter: &mut dyn ProgressReporter,
) -> Result<PathBuf> {
    // The legacy tool has no repository segment
    let parts: Vec<&str> = args.skill_ref.split('/').collect();
    if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
        return Err(invalid_reference(&args.skill_ref, EXPECTED_FORMAT));
    }

    let request = AddRequest {
        reference: &args.skill_ref,
        kind: ResourceKind::Skill,
        variant: ToolVariant::SkillAdd,
        scope: InstallScope::Project,
        overwrite: args.overwrite,
    };

    add_resource(&request, config, project_dir, reporter)
}

//! Install root resolution

use std::path::{Path, PathBuf};

use crate::error::{AgrError, Result};

/// Directory holding installed resources, relative to the chosen root
pub const CLAUDE_DIR: &str = ".claude";

/// Where a resource is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallScope {
    /// `<current directory>/.claude`
    Project,
    /// `<home>/.claude`
    Global,
}

impl InstallScope {
    pub fn from_global_flag(global: bool) -> Self {
        if global {
            InstallScope::Global
        } else {
            InstallScope::Project
        }
    }
}

/// Resolve the `.claude` directory resources are installed under.
///
/// `project_dir` is only consulted for [`InstallScope::Project`].
pub fn resolve_install_root(scope: InstallScope, project_dir: &Path) -> Result<PathBuf> {
    match scope {
        InstallScope::Project => Ok(project_dir.join(CLAUDE_DIR)),
        InstallScope::Global => dirs::home_dir()
            .map(|home| home.join(CLAUDE_DIR))
            .ok_or(AgrError::HomeDirNotFound),
    }
}

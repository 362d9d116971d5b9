//! Configuration for fetching and installing resources
//!
//! - [`FetchConfig`]: archive host, branch, timeout and user agent
//! - [`ToolVariant`]: which binary is running, and therefore the default repository
//! - [`destination`]: where resources are installed

pub mod destination;

pub use destination::{InstallScope, resolve_install_root};

use std::time::Duration;

/// Default host serving repository tarballs
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";

/// Environment variable overriding the archive host
pub const GITHUB_URL_ENV: &str = "AGR_GITHUB_URL";

/// The only branch tarballs are fetched from
pub const DEFAULT_BRANCH: &str = "main";

/// Bound on the whole archive request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the transport client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Scheme and host, without a trailing slash (e.g. `https://github.com`)
    pub base_url: String,
    pub branch: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Default configuration pointed at another archive host
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// `{base}/{owner}/{repo}/archive/refs/heads/{branch}.tar.gz`
    pub fn tarball_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/{}/{}/archive/refs/heads/{}.tar.gz",
            self.base_url.trim_end_matches('/'),
            owner,
            repo,
            self.branch
        )
    }

    /// Name of the single top-level directory in a branch tarball
    pub fn archive_root_name(&self, repo: &str) -> String {
        format!("{}-{}", repo, self.branch)
    }
}

/// The binary in use; each binds its own default repository name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolVariant {
    /// `agr`: skills, commands and agents
    Agr,
    /// `skill-add`: skills only, project-local installs
    SkillAdd,
}

impl ToolVariant {
    /// Repository used when a reference omits it
    pub fn default_repo(self) -> &'static str {
        match self {
            ToolVariant::Agr => "agent-resources",
            ToolVariant::SkillAdd => "agent-skills",
        }
    }
}

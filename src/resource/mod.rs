//! Resource kinds and reference parsing
//!
//! A reference names one installable resource on GitHub:
//! - `owner/name`: resolved against the tool's default repository
//! - `owner/repo/name`: an explicit repository

use std::fmt;

use crate::error::{Result, invalid_reference};

/// Kind of installable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Skill,
    Command,
    Agent,
}

impl ResourceKind {
    /// Directory name under `.claude/` holding resources of this kind
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Skill => "skills",
            ResourceKind::Command => "commands",
            ResourceKind::Agent => "agents",
        }
    }

    /// Lowercase singular name, as used on the command line
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Skill => "skill",
            ResourceKind::Command => "command",
            ResourceKind::Agent => "agent",
        }
    }

    /// Capitalized singular name for messages
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Skill => "Skill",
            ResourceKind::Command => "Command",
            ResourceKind::Agent => "Agent",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed reference to a resource in a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub owner: String,
    pub repo: String,
    pub name: String,
    pub kind: ResourceKind,
}

impl ResourceReference {
    /// Parse `owner/name` or `owner/repo/name`.
    ///
    /// `default_repo` is used when the repository segment is omitted.
    pub fn parse(input: &str, kind: ResourceKind, default_repo: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('/').collect();

        let invalid = || invalid_reference(input, expected_format(kind));

        if parts.iter().any(|part| is_invalid_segment(part)) {
            return Err(invalid());
        }

        let (owner, repo, name) = match parts.as_slice() {
            [owner, name] => (*owner, default_repo, *name),
            [owner, repo, name] => (*owner, *repo, *name),
            _ => return Err(invalid()),
        };

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            name: name.to_string(),
            kind,
        })
    }

    /// `owner/repo`, as shown in messages
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Location of the resource relative to a repository or project root
    pub fn relative_location(&self) -> String {
        format!(".claude/{}/{}/", self.kind.plural(), self.name)
    }
}

/// Empty segments are malformed; `.` and `..` would escape `.claude/<kind>/`.
fn is_invalid_segment(segment: &str) -> bool {
    segment.is_empty() || segment == "." || segment == ".."
}

fn expected_format(kind: ResourceKind) -> String {
    format!("<owner>/<{kind}-name> or <owner>/<repo>/<{kind}-name>")
}

//! agr - Agent Resources
//!
//! Fetches Claude resources (skills, slash commands, sub-agents) published under
//! `.claude/` in a GitHub repository and installs them into a local `.claude/` tree.
//!
//! The pipeline is split into:
//! - [`resource`]: parsing `<owner>/[<repo>/]<name>` references
//! - [`fetch`]: downloading, extracting and locating a resource in a repository tarball
//! - [`installer`]: copying the located directory into place
//! - [`commands`]: the user-facing `agr` and `skill-add` commands

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installer;
pub mod logging;
pub mod resource;
pub mod temp;
pub mod ui;

#[cfg(test)]
mod test_fixtures;

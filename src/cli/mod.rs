//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments (skill, command, agent)
//! - completions: Completions command arguments
//! - skill_add: Arguments of the legacy `skill-add` binary

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod add;
pub mod completions;
pub mod skill_add;

pub use add::{AddArgs, AddCommand, ResourceArgs};
pub use completions::CompletionsArgs;
pub use skill_add::SkillAddCli;

pub(crate) fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// agr - Agent Resources
///
/// Install Claude skills, slash commands and sub-agents from GitHub.
#[derive(Parser, Debug)]
#[command(
    name = "agr",
    author,
    version,
    styles = styles(),
    about = "Agent Resources - install Claude skills, commands and agents from GitHub",
    long_about = "agr installs Claude resources (skills, slash commands, sub-agents) published \
                  under .claude/ in a GitHub repository into ./.claude/ or ~/.claude/.",
    arg_required_else_help = true,
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  agr add skill alice/hello-world          \x1b[90m# From github.com/alice/agent-resources\x1b[0m\n   \
                  agr add command alice/my-repo/review     \x1b[90m# From github.com/alice/my-repo\x1b[0m\n   \
                  agr add agent alice/reviewer --global    \x1b[90m# Install into ~/.claude/\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Host serving repository tarballs
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AGR_GITHUB_URL",
        default_value = "https://github.com"
    )]
    pub github_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add skills, commands, or agents from GitHub
    Add(AddArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}

use clap::{Args, Parser, Subcommand};

use crate::resource::ResourceKind;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct AddArgs {
    #[command(subcommand)]
    pub resource: AddCommand,
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Add a skill from a GitHub repository
    #[command(after_help = "REFERENCE format:\n  \
                  username/skill-name: installs from github.com/username/agent-resources\n  \
                  username/repo/skill-name: installs from github.com/username/repo\n\n\
                  EXAMPLES:\n  agr add skill alice/hello-world\n  \
                  agr add skill alice/my-repo/hello-world --global")]
    Skill(ResourceArgs),

    /// Add a slash command from a GitHub repository
    #[command(after_help = "REFERENCE format:\n  \
                  username/command-name: installs from github.com/username/agent-resources\n  \
                  username/repo/command-name: installs from github.com/username/repo\n\n\
                  EXAMPLES:\n  agr add command alice/hello\n  \
                  agr add command alice/my-repo/hello --global")]
    Command(ResourceArgs),

    /// Add a sub-agent from a GitHub repository
    #[command(after_help = "REFERENCE format:\n  \
                  username/agent-name: installs from github.com/username/agent-resources\n  \
                  username/repo/agent-name: installs from github.com/username/repo\n\n\
                  EXAMPLES:\n  agr add agent alice/hello-agent\n  \
                  agr add agent alice/my-repo/hello-agent --global")]
    Agent(ResourceArgs),
}

impl AddCommand {
    pub fn kind(&self) -> ResourceKind {
        match self {
            AddCommand::Skill(_) => ResourceKind::Skill,
            AddCommand::Command(_) => ResourceKind::Command,
            AddCommand::Agent(_) => ResourceKind::Agent,
        }
    }

    pub fn args(&self) -> &ResourceArgs {
        match self {
            AddCommand::Skill(args) | AddCommand::Command(args) | AddCommand::Agent(args) => args,
        }
    }
}

/// Options shared by every resource kind
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Resource reference: <username>/<name> or <username>/<repo>/<name>
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Overwrite the resource if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Install to ~/.claude/ instead of ./.claude/
    #[arg(long = "global", short = 'g')]
    pub global: bool,
}

use clap::Parser;

/// skill-add - Add Claude skills from GitHub to your project
///
/// The skill is copied to .claude/skills/<skill-name>/ in the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "skill-add",
    author,
    version,
    styles = super::styles(),
    about = "Add Claude skills from GitHub to your project",
    after_help = "EXAMPLE:\n  skill-add alice/analyze-paper    # From github.com/alice/agent-skills"
)]
pub struct SkillAddCli {
    /// Skill to add in format: <username>/<skill-name>
    #[arg(value_name = "USERNAME/SKILL-NAME")]
    pub skill_ref: String,

    /// Overwrite existing skill if it exists
    #[arg(long)]
    pub overwrite: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Host serving repository tarballs
    #[arg(long, hide = true, env = "AGR_GITHUB_URL", default_value = "https://github.com")]
    pub github_url: String,
}

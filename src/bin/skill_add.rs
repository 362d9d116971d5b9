//! skill-add - the original single-purpose installer
//!
//! Same pipeline as `agr add skill`, but always reads from `<username>/agent-skills`
//! and installs into `./.claude/skills/`.

use clap::Parser;

use agr::cli::SkillAddCli;
use agr::commands;
use agr::config::FetchConfig;
use agr::logging;
use agr::ui::SpinnerReporter;

fn main() {
    let cli = SkillAddCli::parse();
    logging::init_logging(cli.verbose);

    let config = FetchConfig::with_base_url(cli.github_url.clone());
    let result = commands::helpers::current_dir().and_then(|project_dir| {
        let mut reporter = SpinnerReporter::new();
        commands::skill_add::run(&cli, config, &project_dir, &mut reporter)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! agr - Agent Resources
//!
//! Installs Claude skills, slash commands and sub-agents from GitHub repositories
//! into `./.claude/` or `~/.claude/`.

use clap::Parser;

use agr::cli::{Cli, Commands};
use agr::commands;
use agr::config::FetchConfig;
use agr::error::Result;
use agr::logging;
use agr::ui::SpinnerReporter;

fn run(cli: Cli) -> Result<()> {
    let config = FetchConfig::with_base_url(cli.github_url);

    match cli.command {
        Commands::Add(args) => {
            let project_dir = commands::helpers::current_dir()?;
            let mut reporter = SpinnerReporter::new();
            commands::add::run(&args, config, &project_dir, &mut reporter).map(|_| ())
        }
        Commands::Completions(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::completions::run(&args, &mut out)
        }
        Commands::Version => commands::version::run(&config),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

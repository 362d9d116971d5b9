//! Shell completions command

use std::io::Write;

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{AgrError, Result};

/// Generate shell completions for `agr` into `out`
pub fn run(args: &CompletionsArgs, out: &mut dyn Write) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(AgrError::UnsupportedShell {
                shell: args.shell.clone(),
            });
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "agr", out);

    Ok(())
}

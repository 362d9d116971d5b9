use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    agr completions bash > ~/.bash_completion.d/agr\n\n\
                  Generate zsh completions:\n    agr completions zsh > ~/.zfunc/_agr\n\n\
                  Generate fish completions:\n    agr completions fish > ~/.config/fish/completions/agr.fish\n\n\
                  Generate PowerShell completions:\n    agr completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

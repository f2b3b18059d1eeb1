use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    deskpack completions --shell bash > ~/.bash_completion.d/deskpack\n\n\
                  Generate zsh completions:\n    deskpack completions --shell zsh > ~/.zfunc/_deskpack\n\n\
                  Generate fish completions:\n    deskpack completions --shell fish > ~/.config/fish/completions/deskpack.fish\n\n\
                  Generate PowerShell completions:\n    deskpack completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

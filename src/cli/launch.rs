use clap::Parser;

/// Arguments for the launch command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Start the bundled application:\n    deskpack launch\n\n\
                  Start the Linux build from another host:\n    deskpack launch --platform linux")]
pub struct LaunchArgs {
    /// Platform whose executable is started; defaults to the host
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,
}

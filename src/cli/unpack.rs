use clap::Parser;

/// Arguments for the unpack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Restore electron/ from electron.zip:\n    deskpack unpack\n\n\
                  Restore a Windows bundle:\n    deskpack unpack --platform win32")]
pub struct UnpackArgs {
    /// Platform the archive was built for; defaults to the host
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,
}

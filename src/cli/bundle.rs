use clap::Parser;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle for the host platform:\n    deskpack bundle\n\n\
                  Bundle and stamp a version:\n    deskpack bundle 1.2.3\n\n\
                  Bundle for Windows:\n    deskpack bundle 1.2.3 --platform win32\n\n\
                  Bundle without writing the archive:\n    deskpack bundle --skip-archive")]
pub struct BundleArgs {
    /// Version stamped into the bundled index.html (left untouched if omitted)
    pub version: Option<String>,

    /// Target platform (darwin, mas, linux, win32); defaults to the host
    #[arg(long, short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// Stop after stamping, without writing the archive
    #[arg(long)]
    pub skip_archive: bool,
}

//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: Bundle command arguments
//! - unpack: Unpack command arguments
//! - launch: Launch command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod launch;
pub mod unpack;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use launch::LaunchArgs;
pub use unpack::UnpackArgs;

/// Deskpack - desktop bundle builder
///
/// Package a web front-end as an Electron desktop application in one step.
#[derive(Parser, Debug)]
#[command(
    name = "deskpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package a web front-end as an Electron desktop bundle",
    long_about = "Deskpack runs electron-packager over a front-end directory, moves the result \
                  to a fixed location, stamps a version into it and, except on macOS, zips it \
                  for distribution.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  deskpack bundle                       \x1b[90m# Bundle for the host platform\x1b[0m\n   \
                  deskpack bundle 1.2.3                 \x1b[90m# Bundle and stamp version 1.2.3\x1b[0m\n   \
                  deskpack bundle --platform win32      \x1b[90m# Bundle for Windows\x1b[0m\n   \
                  deskpack unpack                       \x1b[90m# Restore electron/ from electron.zip\x1b[0m\n   \
                  deskpack launch                       \x1b[90m# Start the bundled application\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DESKPACK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to deskpack.yaml in the workspace)
    #[arg(long, short = 'c', global = true, env = "DESKPACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package, relocate, stamp and archive the application
    Bundle(BundleArgs),

    /// Restore the bundle directory from its archive
    Unpack(UnpackArgs),

    /// Start the bundled application
    Launch(LaunchArgs),

    /// Print the resolved configuration
    Config,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_bundle() {
        let cli = Cli::try_parse_from(["deskpack", "bundle", "1.2.3"]).unwrap();
        match cli.command {
            Commands::Bundle(args) => {
                assert_eq!(args.version, Some("1.2.3".to_string()));
                assert_eq!(args.platform, None);
                assert!(!args.skip_archive);
            }
            _ => panic!("Expected Bundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_bundle_no_version() {
        let cli = Cli::try_parse_from(["deskpack", "bundle"]).unwrap();
        match cli.command {
            Commands::Bundle(args) => assert_eq!(args.version, None),
            _ => panic!("Expected Bundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_bundle_options() {
        let cli = Cli::try_parse_from([
            "deskpack",
            "bundle",
            "--platform",
            "win32",
            "--skip-archive",
            "0.9.0-beta",
        ])
        .unwrap();
        match cli.command {
            Commands::Bundle(args) => {
                assert_eq!(args.version, Some("0.9.0-beta".to_string()));
                assert_eq!(args.platform, Some("win32".to_string()));
                assert!(args.skip_archive);
            }
            _ => panic!("Expected Bundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_unpack_and_launch() {
        let cli = Cli::try_parse_from(["deskpack", "unpack", "-p", "linux"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Unpack(UnpackArgs { platform: Some(ref p) }) if p == "linux"
        ));

        let cli = Cli::try_parse_from(["deskpack", "launch"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Launch(LaunchArgs { platform: None })
        ));
    }

    #[test]
    fn test_cli_parsing_config_and_version() {
        let cli = Cli::try_parse_from(["deskpack", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config));

        let cli = Cli::try_parse_from(["deskpack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "deskpack",
            "-v",
            "-w",
            "/tmp/workspace",
            "-c",
            "release.yaml",
            "bundle",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
        assert_eq!(cli.config, Some(PathBuf::from("release.yaml")));
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["deskpack", "-q", "-v", "bundle"]).is_err());
        let cli = Cli::try_parse_from(["deskpack", "bundle", "-q"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["deskpack", "completions", "--shell", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["deskpack"]).is_err());
    }
}

//! Deskpack - desktop bundle builder
//!
//! Packages a web front-end as an Electron application, moves the bundle to a
//! fixed location, stamps a version into it and, except on macOS, archives it
//! for distribution.

use clap::Parser;
use miette::Diagnostic;

mod archive;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod hash;
mod logging;
mod packager;
mod pipeline;
mod platform;
mod ui;

use cli::{Cli, Commands};
use commands::Context;
use error::{DeskpackError, Result};

/// Run the selected command
fn dispatch(cli: Cli) -> Result<()> {
    let context = || Context::new(cli.workspace.clone(), cli.config.clone(), cli.quiet);

    match cli.command {
        Commands::Bundle(args) => commands::bundle::run(&context()?, args),
        Commands::Unpack(args) => commands::unpack::run(&context()?, args),
        Commands::Launch(args) => commands::launch::run(&context()?, args),
        Commands::Config => commands::config::run(&context()?),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn report_error(e: &DeskpackError) {
    eprintln!("Error: {e}");
    if let Some(help) = e.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(cli) {
        tracing::debug!("{:?}", e);
        report_error(&e);
        std::process::exit(1);
    }
}

//! Launch command implementation
//!
//! Starts the bundled application without waiting for it. On non-mac
//! platforms a missing bundle directory is restored from the archive first.

use std::path::Path;
use std::process::{Child, Command, Stdio};

use console::Style;

use crate::cli::LaunchArgs;
use crate::common::display_utils::relative_display;
use crate::error::{Result, platform as platform_error};
use crate::platform::Platform;
use crate::platform::executable::executable_path;
use crate::ui;

use super::Context;
use super::unpack::unpack_bundle;

/// Run launch command
pub fn run(ctx: &Context, args: LaunchArgs) -> Result<()> {
    let config = ctx.resolve_config()?;
    let platform = Platform::resolve(args.platform.as_deref())?;
    let executable = executable_path(&config.destination, &config.app_name, platform);
    let mut progress = ui::reporter(ctx.quiet);

    if !executable.exists() {
        if platform.is_mac_family() {
            // Mac bundles are never archived, so there is nothing to restore
            println!(
                "{} {} not found, run {} first",
                Style::new().yellow().bold().apply_to("Note:"),
                relative_display(&executable, &config.root),
                Style::new().cyan().apply_to("deskpack bundle")
            );
            return Ok(());
        }
        if config.archive.is_file() {
            tracing::info!("{} missing, unpacking archive", executable.display());
            unpack_bundle(&config, progress.as_mut())?;
        }
    }

    if !executable.is_file() {
        return Err(platform_error::executable_not_found(&executable));
    }

    let child = spawn_detached(&executable)?;
    progress.step(
        "Launched",
        &format!(
            "{} (pid {})",
            relative_display(&executable, &config.root),
            child.id()
        ),
    );
    Ok(())
}

/// Start `executable` in its own directory with no stdio attached
fn spawn_detached(executable: &Path) -> Result<Child> {
    let mut command = Command::new(executable);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(dir) = executable.parent() {
        command.current_dir(dir);
    }
    tracing::debug!("launching {:?}", command);
    command
        .spawn()
        .map_err(|e| platform_error::launch_failed(executable, e))
}

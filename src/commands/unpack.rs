//! Unpack command implementation
//!
//! Restores the bundle directory from the archive a non-mac bundle run
//! produced, replacing whatever is at the destination.

use crate::archive::extract_archive;
use crate::cli::UnpackArgs;
use crate::common::display_utils::relative_display;
use crate::common::fs::remove_dir_if_exists;
use crate::config::ResolvedConfig;
use crate::error::{Result, fs as fs_error};
use crate::platform::Platform;
use crate::platform::executable::executable_path;
use crate::ui::{self, ProgressReporter};

use super::Context;

/// Run unpack command
pub fn run(ctx: &Context, args: UnpackArgs) -> Result<()> {
    let config = ctx.resolve_config()?;
    let platform = Platform::resolve(args.platform.as_deref())?;
    let mut progress = ui::reporter(ctx.quiet);

    unpack_bundle(&config, progress.as_mut())?;

    let executable = executable_path(&config.destination, &config.app_name, platform);
    if !executable.exists() {
        tracing::warn!(
            "archive has no {} executable at {}",
            platform,
            relative_display(&executable, &config.root)
        );
    }
    Ok(())
}

/// Replace the destination with the contents of the archive
///
/// Returns the number of extracted entries.
pub fn unpack_bundle(config: &ResolvedConfig, progress: &mut dyn ProgressReporter) -> Result<usize> {
    if !config.archive.is_file() {
        return Err(fs_error::not_found(&config.archive));
    }

    if remove_dir_if_exists(&config.destination)? {
        tracing::debug!("removed {}", config.destination.display());
    }

    let entries = match extract_archive(&config.archive, &config.destination, progress) {
        Ok(entries) => entries,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };
    if !config.destination.is_dir() {
        return Err(fs_error::not_found(&config.destination));
    }

    progress.step(
        "Unpacked",
        &format!(
            "{} into {} ({} entries)",
            relative_display(&config.archive, &config.root),
            relative_display(&config.destination, &config.root),
            entries
        ),
    );
    Ok(entries)
}

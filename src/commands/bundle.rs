//! Bundle command implementation

use crate::archive::archiver_for;
use crate::cli::BundleArgs;
use crate::common::display_utils::display_bundle_report;
use crate::error::Result;
use crate::packager::ElectronPackager;
use crate::pipeline::{BundleOptions, BundlePipeline, BundleReport};
use crate::platform::Platform;
use crate::ui;

use super::Context;

/// Run bundle command
pub fn run(ctx: &Context, args: BundleArgs) -> Result<()> {
    let report = bundle(ctx, args)?;
    if !ctx.quiet {
        println!();
        display_bundle_report(&report, &ctx.root);
    }
    Ok(())
}

/// Run the pipeline for `args` and return its report
pub fn bundle(ctx: &Context, args: BundleArgs) -> Result<BundleReport> {
    let config = ctx.resolve_config()?;
    let options = BundleOptions {
        version: normalize_version(args.version),
        platform: Platform::resolve(args.platform.as_deref())?,
        skip_archive: args.skip_archive,
    };

    let packager = ElectronPackager::new(&config.packager);
    let archiver = archiver_for(config.format);
    let mut progress = ui::reporter(ctx.quiet);

    BundlePipeline::new(&config, &packager, archiver.as_ref(), progress.as_mut()).run(&options)
}

/// Treat a blank version like no version at all
fn normalize_version(version: Option<String>) -> Option<String> {
    version.filter(|v| !v.trim().is_empty())
}

//! Bundle pipeline
//!
//! This module handles:
//! - Orchestration of the bundle stages (Package → Relocate → Cleanup → Stamp → Archive)
//! - Progress reporting at each stage
//!
//! Stages run strictly in order, each on the file system state left by the
//! previous one. Any failure aborts the run and leaves the workspace as it
//! is; nothing is rolled back.

pub mod stamp;

use std::path::{Path, PathBuf};

use crate::archive::{ArchiveSummary, Archiver};
use crate::common::fs::{relocate, remove_dir_if_exists, remove_empty_dir, remove_file_if_exists};
use crate::config::ResolvedConfig;
use crate::error::{Result, packager as packager_error};
use crate::hash;
use crate::packager::{PackageRequest, Packager};
use crate::platform::Platform;
use crate::ui::ProgressReporter;

pub use stamp::StampOutcome;

/// Bundle pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Package,
    Relocate,
    Cleanup,
    Stamp,
    Archive,
}

impl PipelineStage {
    fn label(self) -> &'static str {
        match self {
            PipelineStage::Package => "Packaging",
            PipelineStage::Relocate => "Moved",
            PipelineStage::Cleanup => "Cleaned",
            PipelineStage::Stamp => "Stamped",
            PipelineStage::Archive => "Zipped",
        }
    }
}

/// Per-run inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Version stamped into the bundle, if any
    pub version: Option<String>,
    pub platform: Platform,
    /// Stop before the archive stage on every platform
    pub skip_archive: bool,
}

/// What happened in the archive stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Created {
        summary: ArchiveSummary,
        digest: String,
    },
    /// Mac-family bundles ship as `.app` directories
    SkippedMacFamily(Platform),
    SkippedByRequest,
}

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Every bundle the packager produced
    pub bundles: Vec<PathBuf>,
    pub destination: PathBuf,
    /// Whether an earlier bundle at the destination was replaced
    pub replaced_previous: bool,
    pub stamp: Option<StampOutcome>,
    pub archive: ArchiveOutcome,
}

/// Pipeline turning a front-end directory into a shippable bundle
pub struct BundlePipeline<'a> {
    config: &'a ResolvedConfig,
    packager: &'a dyn Packager,
    archiver: &'a dyn Archiver,
    progress: &'a mut dyn ProgressReporter,
}

impl<'a> BundlePipeline<'a> {
    pub fn new(
        config: &'a ResolvedConfig,
        packager: &'a dyn Packager,
        archiver: &'a dyn Archiver,
        progress: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            config,
            packager,
            archiver,
            progress,
        }
    }

    /// Run every stage for `options`
    pub fn run(&mut self, options: &BundleOptions) -> Result<BundleReport> {
        let result = self.run_stages(options);
        if let Err(e) = &result {
            tracing::debug!("bundle run aborted: {}", e);
            self.progress.abandon();
        }
        result
    }

    fn run_stages(&mut self, options: &BundleOptions) -> Result<BundleReport> {
        let bundles = self.package(options.platform)?;
        let replaced_previous = self.relocate(&bundles[0])?;
        self.cleanup()?;

        let stamp = match options.version.as_deref() {
            Some(version) => Some(self.stamp(version)?),
            None => None,
        };

        let archive = self.archive(options)?;

        Ok(BundleReport {
            bundles,
            destination: self.config.destination.clone(),
            replaced_previous,
            stamp,
            archive,
        })
    }

    /// Run the packager and require at least one bundle
    fn package(&mut self, platform: Platform) -> Result<Vec<PathBuf>> {
        let request = PackageRequest::from_config(self.config, platform);
        tracing::info!(
            "packaging {} for {} from {}",
            request.app_name,
            platform,
            request.source.display()
        );

        self.progress.step(
            PipelineStage::Package.label(),
            &format!("{} for {}", request.app_name, platform),
        );
        self.progress
            .start_packaging(&format!("Running {}", self.config.packager.program));
        let result = self.packager.package(&request);
        self.progress.finish_packaging();

        let bundles = result?;
        if bundles.is_empty() {
            return Err(packager_error::no_bundle(
                request.out.display().to_string(),
            ));
        }

        let created = bundles
            .iter()
            .map(|b| self.display_path(b))
            .collect::<Vec<_>>()
            .join(", ");
        self.progress.step("Created", &created);
        Ok(bundles)
    }

    /// Replace the destination with the first bundle
    fn relocate(&mut self, bundle: &Path) -> Result<bool> {
        let destination = &self.config.destination;
        let replaced_previous = remove_dir_if_exists(destination)?;
        if replaced_previous {
            tracing::debug!("removed previous bundle at {}", destination.display());
        }

        relocate(bundle, destination)?;
        let detail = format!("to {}", self.display_path(destination));
        self.progress.step(PipelineStage::Relocate.label(), &detail);
        Ok(replaced_previous)
    }

    /// Remove the packager's now-empty output directory
    fn cleanup(&mut self) -> Result<()> {
        remove_empty_dir(&self.config.out)?;
        tracing::debug!("removed {}", self.config.out.display());
        let detail = self.display_path(&self.config.out);
        self.progress.step(PipelineStage::Cleanup.label(), &detail);
        Ok(())
    }

    fn stamp(&mut self, version: &str) -> Result<StampOutcome> {
        let outcome =
            stamp::stamp_file(&self.config.stamp_file(), &self.config.stamp.token, version)?;
        let detail = if outcome.replaced {
            format!("{} into {}", version, self.display_path(&outcome.path))
        } else {
            format!(
                "{} (no {} in {})",
                version,
                self.config.stamp.token,
                self.display_path(&outcome.path)
            )
        };
        self.progress.step(PipelineStage::Stamp.label(), &detail);
        Ok(outcome)
    }

    /// Archive the destination unless the platform or options say otherwise
    ///
    /// Archive failures abort the run like every other stage.
    fn archive(&mut self, options: &BundleOptions) -> Result<ArchiveOutcome> {
        if options.skip_archive {
            return Ok(ArchiveOutcome::SkippedByRequest);
        }
        if options.platform.is_mac_family() {
            tracing::info!("no archive for {}", options.platform);
            return Ok(ArchiveOutcome::SkippedMacFamily(options.platform));
        }

        let archive_path = &self.config.archive;
        if remove_file_if_exists(archive_path)? {
            tracing::debug!("removed previous archive {}", archive_path.display());
        }

        let summary =
            self.archiver
                .archive(&self.config.destination, archive_path, &mut *self.progress)?;
        let digest = hash::hash_file(&summary.path)?;

        let detail = format!("at {}", self.display_path(archive_path));
        self.progress.step(PipelineStage::Archive.label(), &detail);
        Ok(ArchiveOutcome::Created { summary, digest })
    }

    /// Path relative to the workspace root when possible
    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.config.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests;

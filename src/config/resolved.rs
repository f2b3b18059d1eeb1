//! Configuration resolved against a workspace root

use std::path::{Component, Path, PathBuf};

use normpath::{BasePathBuf, PathExt};
use serde::Serialize;

use crate::error::{Result, config as config_error};

use super::package_json::PackageJson;
use super::{ArchiveFormat, BundleConfig, DEFAULT_APP_NAME, PackagerCommand, StampConfig};

/// Fully resolved configuration with absolute paths
///
/// This is what the pipeline runs on; tests construct it directly to point a
/// run at a temporary directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub source: PathBuf,
    pub out: PathBuf,
    pub app_name: String,
    pub destination: PathBuf,
    pub archive: PathBuf,
    pub ignore: Vec<String>,
    pub format: ArchiveFormat,
    pub stamp: StampConfig,
    pub packager: PackagerCommand,
}

impl ResolvedConfig {
    /// Resolve `config` against the workspace `root`
    pub fn resolve(config: &BundleConfig, root: &Path) -> Result<Self> {
        config.validate()?;

        let root = normalize(root);
        let absolute = |path: &Path| {
            if path.is_absolute() {
                normalize(path)
            } else {
                normalize(&root.join(path))
            }
        };

        let source = absolute(&config.source);
        let out = absolute(&config.out);
        let destination = absolute(&config.destination);
        let archive = absolute(&config.archive);

        if destination == source || source.starts_with(&destination) {
            return Err(config_error::invalid(format!(
                "destination {} must not contain the source directory",
                destination.display()
            )));
        }
        if out == source {
            return Err(config_error::invalid(
                "out must differ from the source directory",
            ));
        }
        if out.starts_with(&destination) || destination.starts_with(&out) {
            return Err(config_error::invalid(format!(
                "out {} and destination {} must not contain each other",
                out.display(),
                destination.display()
            )));
        }
        if archive.starts_with(&destination) {
            return Err(config_error::invalid(format!(
                "archive {} must not be inside the destination",
                archive.display()
            )));
        }

        let app_name = match &config.name {
            Some(name) => name.trim().to_string(),
            None => PackageJson::read(&source)
                .as_ref()
                .and_then(PackageJson::app_name)
                .unwrap_or(DEFAULT_APP_NAME)
                .to_string(),
        };

        Ok(Self {
            root,
            source,
            out,
            app_name,
            destination,
            archive,
            ignore: config.ignore.clone(),
            format: config.format,
            stamp: config.stamp.clone(),
            packager: config.packager.clone(),
        })
    }

    /// File that receives the version stamp
    pub fn stamp_file(&self) -> PathBuf {
        self.destination.join(&self.stamp.file)
    }

    /// Ignore patterns handed to the packager
    ///
    /// Adds the destination and archive when they live under the source, so a
    /// previous run's output is never packed into the next bundle.
    pub fn packager_ignore(&self) -> Vec<String> {
        let mut patterns = self.ignore.clone();
        for produced in [&self.destination, &self.archive] {
            let Ok(relative) = produced.strip_prefix(&self.source) else {
                continue;
            };
            let pattern = relative.to_string_lossy().replace('\\', "/");
            if !pattern.is_empty() && !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        patterns
    }
}

/// Normalize a path, resolving links on the part that already exists
///
/// Paths that do not exist yet are resolved through their longest existing
/// ancestor, and the remaining components are appended with `.` dropped and
/// `..` folded.
fn normalize(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return norm.into_path_buf();
    }

    let mut current = path;
    let mut missing = Vec::new();
    while !current.exists() {
        let (Some(parent), Some(last)) = (current.parent(), current.components().next_back())
        else {
            return path.to_path_buf();
        };
        missing.push(last);
        current = parent;
    }

    let mut result = current
        .normalize()
        .map_or_else(|_| current.to_path_buf(), BasePathBuf::into_path_buf);
    for component in missing.iter().rev() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}

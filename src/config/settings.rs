//! Bundle configuration (deskpack.yaml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DeskpackError, Result, config as config_error};

use super::CONFIG_FILE;

/// Archiving strategy for the final bundle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveFormat {
    /// Zip with deflate compression
    #[default]
    Zip,
    /// Zip without compression
    ZipStored,
}

/// Version stamp settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StampConfig {
    /// File inside the destination that receives the version
    pub file: PathBuf,

    /// Placeholder replaced by the version string
    pub token: String,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("resources/app/src/index.html"),
            token: "{{dev}}".to_string(),
        }
    }
}

/// Command used to invoke the external packager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PackagerCommand {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["electron-packager".to_string()],
        }
    }
}

/// Bundle configuration from deskpack.yaml
///
/// Every key is optional; the defaults package `./` as `frontpage` into
/// `electron/` and archive it to `electron.zip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    /// Directory handed to the packager
    pub source: PathBuf,

    /// Intermediate packager output directory
    pub out: PathBuf,

    /// Application name (falls back to package.json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Canonical bundle directory
    pub destination: PathBuf,

    /// Archive written on non-mac platforms
    pub archive: PathBuf,

    /// Patterns the packager must leave out of the bundle
    pub ignore: Vec<String>,

    pub format: ArchiveFormat,

    pub stamp: StampConfig,

    pub packager: PackagerCommand,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            out: PathBuf::from("temp"),
            name: None,
            destination: PathBuf::from("electron"),
            archive: PathBuf::from("electron.zip"),
            ignore: ["node_modules", "electron", "electron.zip", ".py", ".md"]
                .into_iter()
                .map(String::from)
                .collect(),
            format: ArchiveFormat::default(),
            stamp: StampConfig::default(),
            packager: PackagerCommand::default(),
        }
    }
}

impl BundleConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the configuration for a workspace
    ///
    /// An explicit path must exist. Without one, `deskpack.yaml` in the
    /// workspace root is used when present and the defaults otherwise.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => root.join(path),
            None => {
                let default_path = root.join(CONFIG_FILE);
                if !default_path.is_file() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content =
            fs::read_to_string(&path).map_err(|e| config_error::read_failed(&path, e))?;
        tracing::debug!("loaded configuration from {}", path.display());

        Self::from_yaml(&content).map_err(|e| match e {
            DeskpackError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(&path, reason)
            }
            other => other,
        })
    }

    /// Check the settings that do not depend on the file system
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(config_error::invalid("name must not be empty"));
            }
            if name.contains(['/', '\\']) {
                return Err(config_error::invalid(format!(
                    "name must not contain path separators: {name}"
                )));
            }
        }

        if self.stamp.token.is_empty() {
            return Err(config_error::invalid("stamp.token must not be empty"));
        }

        if !is_plain_relative(&self.stamp.file) {
            return Err(config_error::invalid(format!(
                "stamp.file must be a relative path inside the destination: {}",
                self.stamp.file.display()
            )));
        }

        if self.packager.program.trim().is_empty() {
            return Err(config_error::invalid("packager.program must not be empty"));
        }

        for (key, path) in [
            ("out", &self.out),
            ("destination", &self.destination),
            ("archive", &self.archive),
        ] {
            if path.as_os_str().is_empty() || path == Path::new(".") {
                return Err(config_error::invalid(format!(
                    "{key} must name a path other than the workspace root"
                )));
            }
        }

        Ok(())
    }
}

/// Relative path made only of normal components
fn is_plain_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, std::path::Component::Normal(_)))
}

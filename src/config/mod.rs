//! Configuration file handling for Deskpack
//!
//! This module contains data structures for:
//! - `deskpack.yaml` - Bundle configuration (all keys optional)
//! - `package.json` - Read for the application name fallback
//!
//! The file model ([`BundleConfig`]) is turned into a [`ResolvedConfig`] with
//! absolute paths before anything touches the file system.

pub mod package_json;
pub mod resolved;
pub mod settings;

// Re-export commonly used types
pub use resolved::ResolvedConfig;
pub use settings::{ArchiveFormat, BundleConfig, PackagerCommand, StampConfig};

/// Name of the configuration file looked up in the workspace root
pub const CONFIG_FILE: &str = "deskpack.yaml";

/// Application name used when neither the config nor package.json name one
pub const DEFAULT_APP_NAME: &str = "frontpage";

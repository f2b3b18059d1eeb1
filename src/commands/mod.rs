//! Command implementations for Deskpack CLI
//!
//! Every command runs against a [`Context`]: the workspace root, an optional
//! explicit configuration file and the output mode.

pub mod bundle;
pub mod completions;
pub mod config;
pub mod launch;
pub mod unpack;
pub mod version;

use std::path::{Path, PathBuf};

use crate::config::{BundleConfig, ResolvedConfig};
use crate::error::{Result, fs as fs_error};

/// Shared invocation context
#[derive(Debug, Clone)]
pub struct Context {
    /// Canonical workspace root
    pub root: PathBuf,
    /// Configuration file given on the command line
    pub config_path: Option<PathBuf>,
    /// Suppress progress and report output
    pub quiet: bool,
}

impl Context {
    /// Build the context for `workspace`, or the current directory
    pub fn new(workspace: Option<PathBuf>, config_path: Option<PathBuf>, quiet: bool) -> Result<Self> {
        let root = match workspace {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let root = canonical_root(&root)?;
        tracing::debug!("workspace root: {}", root.display());

        Ok(Self {
            root,
            config_path,
            quiet,
        })
    }

    /// Load and resolve the workspace configuration
    pub fn resolve_config(&self) -> Result<ResolvedConfig> {
        let config = BundleConfig::load(&self.root, self.config_path.as_deref())?;
        ResolvedConfig::resolve(&config, &self.root)
    }
}

fn canonical_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(fs_error::not_found(path));
    }
    dunce::canonicalize(path).map_err(|e| fs_error::read_failed(path, e))
}

//! External application packager
//!
//! The packager turns the front-end source directory into one or more
//! platform bundles under an output directory and reports their paths. It is
//! opaque to the pipeline: only [`Packager::package`] is relied on.

pub mod electron;

use std::path::PathBuf;

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::platform::Platform;

pub use electron::ElectronPackager;

/// Everything the packager needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Front-end directory to package
    pub source: PathBuf,
    /// Directory the packager writes bundles into
    pub out: PathBuf,
    pub app_name: String,
    /// Patterns excluded from the bundle
    pub ignore: Vec<String>,
    /// Replace bundles left in `out` by an earlier run
    pub overwrite: bool,
    pub platform: Platform,
}

impl PackageRequest {
    /// Build the request for a resolved configuration
    pub fn from_config(config: &ResolvedConfig, platform: Platform) -> Self {
        Self {
            source: config.source.clone(),
            out: config.out.clone(),
            app_name: config.app_name.clone(),
            ignore: config.packager_ignore(),
            overwrite: true,
            platform,
        }
    }
}

/// Produces application bundles
pub trait Packager {
    /// Package `request`, blocking until done
    ///
    /// Returns the produced bundle directories in the packager's order.
    fn package(&self, request: &PackageRequest) -> Result<Vec<PathBuf>>;
}

//! Bundle archiving
//!
//! The archiving step is a strategy object selected from the configured
//! [`ArchiveFormat`]. Extraction is the inverse used by `deskpack unpack`.

pub mod compress;
pub mod extract;

use std::path::{Path, PathBuf};

use crate::config::ArchiveFormat;
use crate::error::Result;
use crate::ui::ProgressReporter;

pub use compress::ZipArchiver;
pub use extract::extract_archive;

/// What an archiving run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    /// Files, directories and links written
    pub entries: usize,
    /// Size of the archive on disk
    pub bytes: u64,
}

/// Compresses a directory into a single archive file
pub trait Archiver {
    /// Archive the contents of `source_dir` into `dest`
    ///
    /// Entries are stored relative to `source_dir`; `dest` is created or
    /// truncated.
    fn archive(
        &self,
        source_dir: &Path,
        dest: &Path,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ArchiveSummary>;
}

/// Archiver for a configured format
pub fn archiver_for(format: ArchiveFormat) -> Box<dyn Archiver> {
    match format {
        ArchiveFormat::Zip => Box::new(ZipArchiver::deflated()),
        ArchiveFormat::ZipStored => Box::new(ZipArchiver::stored()),
    }
}

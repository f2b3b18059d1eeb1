//! Zip archive creation

use std::fs::{self, File, Metadata};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::common::fs::ensure_parent;
use crate::error::{Result, archive as archive_error, fs as fs_error};
use crate::ui::ProgressReporter;

use super::{ArchiveSummary, Archiver};

/// Zip writer over a directory tree
///
/// Entries are written in file name order with the zip format's fixed
/// default timestamp, so identical trees give identical archives.
#[derive(Debug, Clone, Copy)]
pub struct ZipArchiver {
    method: CompressionMethod,
}

impl ZipArchiver {
    pub fn deflated() -> Self {
        Self {
            method: CompressionMethod::Deflated,
        }
    }

    pub fn stored() -> Self {
        Self {
            method: CompressionMethod::Stored,
        }
    }

    fn options_for(&self, metadata: &Metadata) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.method)
            .unix_permissions(permissions_of(metadata))
            .large_file(metadata.len() >= u64::from(u32::MAX))
    }
}

impl Archiver for ZipArchiver {
    fn archive(
        &self,
        source_dir: &Path,
        dest: &Path,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ArchiveSummary> {
        if !source_dir.is_dir() {
            return Err(fs_error::not_found(source_dir));
        }

        let entries: Vec<walkdir::DirEntry> = WalkDir::new(source_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .collect::<std::result::Result<_, _>>()?;
        let file_count = entries.iter().filter(|e| !e.file_type().is_dir()).count();

        ensure_parent(dest)?;
        let file = File::create(dest).map_err(|e| archive_error::failed(dest, e))?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        progress.init_file_progress(file_count as u64);

        for entry in &entries {
            let relative = entry.path().strip_prefix(source_dir).unwrap_or(entry.path());
            let name = relative.to_string_lossy().replace('\\', "/");
            let metadata = entry
                .path()
                .symlink_metadata()
                .map_err(|e| fs_error::read_failed(entry.path(), e))?;
            let options = self.options_for(&metadata);

            if entry.file_type().is_dir() {
                zip.add_directory(format!("{name}/"), options)
                    .map_err(|e| archive_error::failed(dest, e))?;
                continue;
            }

            if entry.file_type().is_symlink() {
                let target = fs::read_link(entry.path())
                    .map_err(|e| fs_error::read_failed(entry.path(), e))?;
                zip.add_symlink(
                    name.clone(),
                    target.to_string_lossy().replace('\\', "/"),
                    options,
                )
                .map_err(|e| archive_error::failed(dest, e))?;
            } else {
                zip.start_file(name.clone(), options)
                    .map_err(|e| archive_error::failed(dest, e))?;
                let mut reader =
                    File::open(entry.path()).map_err(|e| fs_error::read_failed(entry.path(), e))?;
                io::copy(&mut reader, &mut zip).map_err(|e| archive_error::failed(dest, e))?;
            }
            progress.update_file(&name);
        }

        zip.finish()
            .map_err(|e| archive_error::failed(dest, e))?
            .flush()
            .map_err(|e| archive_error::failed(dest, e))?;
        progress.finish_files();

        let bytes = fs::metadata(dest)
            .map_err(|e| fs_error::read_failed(dest, e))?
            .len();

        Ok(ArchiveSummary {
            path: dest.to_path_buf(),
            entries: entries.len(),
            bytes,
        })
    }
}

#[cfg(unix)]
fn permissions_of(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permissions_of(metadata: &Metadata) -> u32 {
    if metadata.is_dir() { 0o755 } else { 0o644 }
}

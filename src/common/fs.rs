//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, fs as fs_error};

/// Remove a directory tree if it exists
///
/// Returns whether anything was removed.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(fs_error::remove_failed(path, e)),
    }
}

/// Remove a file if it exists
///
/// Returns whether anything was removed.
pub fn remove_file_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(fs_error::remove_failed(path, e)),
    }
}

/// Remove a directory that is expected to be empty
///
/// Fails when the directory is missing or still has entries.
pub fn remove_empty_dir(path: &Path) -> Result<()> {
    fs::remove_dir(path).map_err(|e| fs_error::remove_failed(path, e))
}

/// Move a directory to `to`, which must not exist
///
/// A plain rename: crossing file systems is an error, not a copy.
pub fn relocate(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| fs_error::relocate_failed(from, to, e))?;
    }
    fs::rename(from, to).map_err(|e| fs_error::relocate_failed(from, to, e))
}

/// Create the parent directory of `path` if needed
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))
        }
        _ => Ok(()),
    }
}

//! Version stamping of a shipped file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

/// Result of stamping one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub path: PathBuf,
    pub version: String,
    /// False when the token was absent and the file was rewritten unchanged
    pub replaced: bool,
}

/// Replace the first `token` in `content` with `version`
///
/// The version is inserted verbatim; no escaping is applied.
pub fn apply_stamp(content: &str, token: &str, version: &str) -> (String, bool) {
    if content.contains(token) {
        (content.replacen(token, version, 1), true)
    } else {
        (content.to_string(), false)
    }
}

/// Stamp `version` into the file at `path` in place
pub fn stamp_file(path: &Path, token: &str, version: &str) -> Result<StampOutcome> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            fs_error::not_found(path)
        } else {
            fs_error::read_failed(path, e)
        }
    })?;

    let (stamped, replaced) = apply_stamp(&content, token, version);
    if !replaced {
        tracing::warn!("no '{}' placeholder in {}", token, path.display());
    }

    fs::write(path, stamped).map_err(|e| fs_error::write_failed(path, e))?;

    Ok(StampOutcome {
        path: path.to_path_buf(),
        version: version.to_string(),
        replaced,
    })
}

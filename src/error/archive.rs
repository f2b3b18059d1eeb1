//! Archive errors

use std::path::Path;

use super::DeskpackError;

/// Creates an archive failed error
pub fn failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::ArchiveFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an extract failed error
pub fn extract_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::ExtractFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an unsafe entry error
pub fn unsafe_entry(name: impl Into<String>) -> DeskpackError {
    DeskpackError::UnsafeArchiveEntry { name: name.into() }
}

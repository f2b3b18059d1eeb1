//! File system errors

use std::path::Path;

use super::DeskpackError;

/// Creates a file not found error
pub fn not_found(path: impl AsRef<Path>) -> DeskpackError {
    DeskpackError::FileNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a relocate failed error
pub fn relocate_failed(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    reason: impl ToString,
) -> DeskpackError {
    DeskpackError::RelocateFailed {
        from: from.as_ref().display().to_string(),
        to: to.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a remove failed error
pub fn remove_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::RemoveFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

//! Configuration errors

use std::path::Path;

use super::DeskpackError;

/// Creates a config read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::ConfigReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::ConfigParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> DeskpackError {
    DeskpackError::ConfigInvalid {
        message: message.into(),
    }
}

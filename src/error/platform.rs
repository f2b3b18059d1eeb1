//! Platform and launch errors

use std::path::Path;

use super::DeskpackError;

/// Creates an executable not found error
pub fn executable_not_found(path: impl AsRef<Path>) -> DeskpackError {
    DeskpackError::ExecutableNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a launch failed error
pub fn launch_failed(path: impl AsRef<Path>, reason: impl ToString) -> DeskpackError {
    DeskpackError::LaunchFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a platform not supported error
pub fn not_supported(platform: impl Into<String>) -> DeskpackError {
    DeskpackError::PlatformNotSupported {
        platform: platform.into(),
    }
}

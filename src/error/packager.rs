//! External packaging tool errors

use super::DeskpackError;

/// Creates a packager not found error
pub fn not_found(program: impl Into<String>) -> DeskpackError {
    DeskpackError::PackagerNotFound {
        program: program.into(),
    }
}

/// Creates a packaging failed error
pub fn failed(message: impl Into<String>) -> DeskpackError {
    DeskpackError::PackagingFailed {
        message: message.into(),
    }
}

/// Creates an error for a packager run that produced nothing
pub fn no_bundle(out: impl Into<String>) -> DeskpackError {
    DeskpackError::NoBundleProduced { out: out.into() }
}

//! Error types and handling for Deskpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`packager`]: External packaging tool errors
//! - [`fs`]: File system errors
//! - [`archive`]: Archive creation and extraction errors
//! - [`config`]: Configuration errors
//! - [`platform`]: Platform and launch errors

pub mod archive;
pub mod config;
pub mod fs;
pub mod packager;
pub mod platform;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Deskpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeskpackError {
    // Packager errors
    #[error("Packaging tool not found: {program}")]
    #[diagnostic(
        code(deskpack::packager::not_found),
        help("Install the packager (e.g. `npm install --save-dev electron-packager`) or set `packager.program` in deskpack.yaml")
    )]
    PackagerNotFound { program: String },

    #[error("Packaging failed: {message}")]
    #[diagnostic(code(deskpack::packager::failed))]
    PackagingFailed { message: String },

    #[error("Packager produced no bundle in: {out}")]
    #[diagnostic(
        code(deskpack::packager::no_bundle),
        help("Check the packager output above; the application name must match the produced directory")
    )]
    NoBundleProduced { out: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(deskpack::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(deskpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(deskpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to move '{from}' to '{to}': {reason}")]
    #[diagnostic(
        code(deskpack::fs::relocate_failed),
        help("The packager output and the destination must be on the same file system")
    )]
    RelocateFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove '{path}': {reason}")]
    #[diagnostic(code(deskpack::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(deskpack::fs::io_error))]
    IoError { message: String },

    // Archive errors
    #[error("Failed to archive '{path}': {reason}")]
    #[diagnostic(code(deskpack::archive::failed))]
    ArchiveFailed { path: String, reason: String },

    #[error("Failed to extract '{path}': {reason}")]
    #[diagnostic(code(deskpack::archive::extract_failed))]
    ExtractFailed { path: String, reason: String },

    #[error("Archive entry escapes the destination: {name}")]
    #[diagnostic(
        code(deskpack::archive::unsafe_entry),
        help("The archive contains absolute or '..' paths and was not produced by deskpack")
    )]
    UnsafeArchiveEntry { name: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(deskpack::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(deskpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(deskpack::config::invalid))]
    ConfigInvalid { message: String },

    // Platform errors
    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(deskpack::platform::not_supported),
        help("Supported platforms: darwin, mas, linux, win32")
    )]
    PlatformNotSupported { platform: String },

    #[error("Application executable not found: {path}")]
    #[diagnostic(
        code(deskpack::platform::executable_not_found),
        help("Run 'deskpack bundle' first, or 'deskpack unpack' if an archive is present")
    )]
    ExecutableNotFound { path: String },

    #[error("Failed to launch '{path}': {reason}")]
    #[diagnostic(code(deskpack::platform::launch_failed))]
    LaunchFailed { path: String, reason: String },
}

impl From<std::io::Error> for DeskpackError {
    fn from(err: std::io::Error) -> Self {
        DeskpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DeskpackError {
    fn from(err: serde_yaml::Error) -> Self {
        DeskpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for DeskpackError {
    fn from(err: walkdir::Error) -> Self {
        DeskpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeskpackError>;

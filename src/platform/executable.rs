//! Location of the application executable inside a bundle

use std::path::{Path, PathBuf};

use super::Platform;

/// Path of the executable the packager emits for `app_name` on `platform`
pub fn executable_path(destination: &Path, app_name: &str, platform: Platform) -> PathBuf {
    match platform {
        Platform::Darwin | Platform::Mas => destination
            .join(format!("{app_name}.app"))
            .join("Contents")
            .join("MacOS")
            .join(app_name),
        Platform::Win32 => destination.join(format!("{app_name}.exe")),
        Platform::Linux => destination.join(app_name),
    }
}

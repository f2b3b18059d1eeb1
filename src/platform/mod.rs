//! Target platform identification
//!
//! The platform decides two things in a run: whether an archive is produced
//! (the mac family ships its `.app` bundle as is) and where the bundled
//! executable lives inside the destination directory.

pub mod executable;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, platform as platform_error};

/// Platform a bundle is produced for, named the way the packager names them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS
    Darwin,
    /// Mac App Store build
    Mas,
    Linux,
    Win32,
}

impl Platform {
    /// All supported platforms
    pub const ALL: [Platform; 4] = [
        Platform::Darwin,
        Platform::Mas,
        Platform::Linux,
        Platform::Win32,
    ];

    /// Platform identifier as understood by the packager
    pub fn id(self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Mas => "mas",
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
        }
    }

    /// Alternative spellings accepted on the command line
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Platform::Darwin => &["macos", "mac", "osx"],
            Platform::Mas => &[],
            Platform::Linux => &[],
            Platform::Win32 => &["windows", "win"],
        }
    }

    /// Whether this platform belongs to the mac family (no archive is produced)
    pub fn is_mac_family(self) -> bool {
        matches!(self, Platform::Darwin | Platform::Mas)
    }

    /// Detect the platform of the running host
    pub fn host() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust target OS name (`std::env::consts::OS`) to a platform
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Win32),
            other => Err(platform_error::not_supported(other)),
        }
    }

    /// Resolve an explicit platform name, or the host when none is given
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(name) => name.parse(),
            None => Self::host(),
        }
    }
}

impl FromStr for Platform {
    type Err = crate::error::DeskpackError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        // Exact id first, then aliases
        if let Some(platform) = Self::ALL.iter().find(|p| p.id() == needle) {
            return Ok(*platform);
        }

        Self::ALL
            .into_iter()
            .find(|p| p.aliases().contains(&needle.as_str()))
            .ok_or_else(|| platform_error::not_supported(s))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

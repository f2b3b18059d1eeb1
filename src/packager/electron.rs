//! electron-packager driven through its command line

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::PackagerCommand;
use crate::error::{Result, packager as packager_error};

use super::{PackageRequest, Packager};

/// Number of stderr lines quoted in a failure message
const STDERR_TAIL_LINES: usize = 10;

/// Runs `electron-packager` (by default through `npx`)
#[derive(Debug, Clone)]
pub struct ElectronPackager {
    program: String,
    args: Vec<String>,
}

impl ElectronPackager {
    pub fn new(command: &PackagerCommand) -> Self {
        Self {
            program: command.program.clone(),
            args: command.args.clone(),
        }
    }

    /// Full argument list for `request`, after the configured prefix args
    pub fn arguments(&self, request: &PackageRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();

        // The packager runs inside the source directory, like `dir: "."`
        args.push(".".into());
        args.push(request.app_name.clone().into());

        let mut out = OsString::from("--out=");
        out.push(&request.out);
        args.push(out);

        args.push(format!("--platform={}", request.platform.id()).into());

        if request.overwrite {
            args.push("--overwrite".into());
        }

        for pattern in &request.ignore {
            args.push(format!("--ignore={pattern}").into());
        }

        args
    }

    fn command(&self, request: &PackageRequest) -> Command {
        let mut command = Command::new(program_for_host(&self.program));
        command
            .args(self.arguments(request))
            .current_dir(&request.source);
        command
    }
}

impl Packager for ElectronPackager {
    fn package(&self, request: &PackageRequest) -> Result<Vec<PathBuf>> {
        let mut command = self.command(request);
        tracing::debug!("running packager: {:?}", command);

        let output = command.output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                packager_error::not_found(&self.program)
            } else {
                packager_error::failed(format!("failed to start {}: {}", self.program, e))
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stdout.lines().chain(stderr.lines()) {
            tracing::debug!("packager: {}", line);
        }

        if !output.status.success() {
            return Err(packager_error::failed(format!(
                "{} exited with {}{}",
                self.program,
                output.status,
                stderr_tail(&stderr)
            )));
        }

        // electron-packager reports on stderr; accept either stream
        let mut paths: Vec<PathBuf> = parse_app_paths(&stderr)
            .into_iter()
            .chain(parse_app_paths(&stdout))
            .map(|path| request.source.join(path))
            .collect();

        if paths.is_empty() {
            tracing::debug!(
                "packager reported no paths, scanning {}",
                request.out.display()
            );
            paths = scan_out_dir(&request.out, &request.app_name)?;
        }

        if paths.is_empty() {
            return Err(packager_error::no_bundle(request.out.display().to_string()));
        }

        Ok(paths)
    }
}

/// Extract bundle paths from the packager's "Wrote new app(s) to" report
pub fn parse_app_paths(output: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut lines = output.lines();

    while let Some(line) = lines.next() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Wrote new app to") {
            let path = rest.trim_start_matches(':').trim();
            if !path.is_empty() {
                paths.push(path.to_string());
            }
        } else if line.starts_with("Wrote new apps to") {
            for next in lines.by_ref() {
                let next = next.trim();
                if next.is_empty() {
                    break;
                }
                paths.push(next.to_string());
            }
        }
    }

    paths
}

/// Bundle directories named `<app_name>-*` in `out`, sorted by name
fn scan_out_dir(out: &Path, app_name: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(out) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let prefix = format!("{app_name}-");
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() && entry.file_name().to_string_lossy().starts_with(&prefix)
        {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Last lines of stderr, formatted for an error message
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return String::new();
    }
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    format!(": {}", lines[start..].join("\n"))
}

/// Node launchers are batch files on Windows
fn program_for_host(program: &str) -> String {
    let is_node_launcher = matches!(program, "npx" | "npm" | "pnpm" | "yarn");
    if cfg!(windows) && is_node_launcher {
        format!("{program}.cmd")
    } else {
        program.to_string()
    }
}

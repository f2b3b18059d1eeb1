//! UI/Progress presentation layer
//!
//! This module handles:
//! - Step lines for each stage of a bundle run
//! - Interactive progress using indicatif (spinner while the packager runs,
//!   a bar while files are archived or extracted)
//! - Silent progress for `--quiet` and tests
//!
//! All progress reporting goes through the ProgressReporter trait, allowing
//! different implementations based on command-line flags.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for long-running operations
pub trait ProgressReporter: Send + Sync {
    /// Report a completed or starting step, e.g. `("Moved", "to electron")`
    fn step(&mut self, label: &str, detail: &str);

    /// Start an indeterminate wait for the external packager
    fn start_packaging(&mut self, message: &str);

    /// Stop the packaging wait
    fn finish_packaging(&mut self);

    /// Initialize file progress with total file count
    fn init_file_progress(&mut self, total_files: u64);

    /// Update file progress
    fn update_file(&mut self, file_path: &str);

    /// Finish file progress
    fn finish_files(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with visual progress bars
pub struct InteractiveProgressReporter {
    /// Spinner shown while the packager runs
    spinner: Option<ProgressBar>,
    /// File progress bar (shown when archiving or extracting)
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: None,
            file_pb: None,
        }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn step(&mut self, label: &str, detail: &str) {
        let line = format!(
            "{:>12} {}",
            Style::new().green().bold().apply_to(label),
            detail
        );
        // Hidden bars (no terminal) drop println output
        match self.spinner.as_ref().or(self.file_pb.as_ref()) {
            Some(pb) if !pb.is_hidden() => pb.println(line),
            _ => println!("{line}"),
        }
    }

    fn start_packaging(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn finish_packaging(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn init_file_progress(&mut self, total_files: u64) {
        let file_style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);
        self.file_pb = Some(file_pb);
    }

    fn update_file(&mut self, file_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            // Truncate long paths for display
            let display_path = match file_path.char_indices().rev().nth(46) {
                Some((idx, _)) if file_path.chars().count() > 50 => {
                    format!("...{}", &file_path[idx..])
                }
                _ => file_path.to_string(),
            };
            file_pb.set_message(display_path);
            file_pb.inc(1);
        }
    }

    fn finish_files(&mut self) {
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abandon();
        }
        if let Some(file_pb) = self.file_pb.take() {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter for quiet mode
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn step(&mut self, _label: &str, _detail: &str) {}

    fn start_packaging(&mut self, _message: &str) {}

    fn finish_packaging(&mut self) {}

    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_file(&mut self, _file_path: &str) {}

    fn finish_files(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick the reporter for the current invocation
pub fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}

/// Reporter that records step labels, for asserting on pipeline order
#[cfg(test)]
#[derive(Default)]
pub struct RecordingProgressReporter {
    pub steps: Vec<(String, String)>,
    pub files: Vec<String>,
}

#[cfg(test)]
impl RecordingProgressReporter {
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|(label, _)| label.as_str()).collect()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingProgressReporter {
    fn step(&mut self, label: &str, detail: &str) {
        self.steps.push((label.to_string(), detail.to_string()));
    }

    fn start_packaging(&mut self, _message: &str) {}

    fn finish_packaging(&mut self) {}

    fn init_file_progress(&mut self, _total_files: u64) {}

    fn update_file(&mut self, file_path: &str) {
        self.files.push(file_path.to_string());
    }

    fn finish_files(&mut self) {}

    fn abandon(&mut self) {}
}

//! Display helpers for bundle reports and resolved configuration
//!
//! Formatting is kept separate from printing so the text can be checked
//! without a terminal.

use std::fmt::Write;
use std::path::Path;

use console::Style;

use crate::pipeline::{ArchiveOutcome, BundleReport};

/// Path relative to `root` when it lives under it
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Human readable byte count
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

/// Format the summary of a finished bundle run
pub fn format_bundle_report(report: &BundleReport, root: &Path) -> String {
    let key = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(out, "{}", key.apply_to("Bundles:"));
    for (index, bundle) in report.bundles.iter().enumerate() {
        let marker = if index == 0 {
            Style::new().green().apply_to("*")
        } else {
            Style::new().dim().apply_to("-")
        };
        let _ = writeln!(out, "  {} {}", marker, relative_display(bundle, root));
    }

    let _ = write!(
        out,
        "{} {}",
        key.apply_to("Destination:"),
        relative_display(&report.destination, root)
    );
    if report.replaced_previous {
        let _ = write!(out, " {}", Style::new().dim().apply_to("(replaced)"));
    }
    out.push('\n');

    match &report.stamp {
        Some(stamp) if stamp.replaced => {
            let _ = writeln!(
                out,
                "{} {}",
                key.apply_to("Version:"),
                Style::new().cyan().apply_to(&stamp.version)
            );
        }
        Some(stamp) => {
            let _ = writeln!(
                out,
                "{} {} {}",
                key.apply_to("Version:"),
                stamp.version,
                Style::new().yellow().apply_to("(placeholder not found)")
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                key.apply_to("Version:"),
                Style::new().dim().apply_to("not stamped")
            );
        }
    }

    match &report.archive {
        ArchiveOutcome::Created { summary, digest } => {
            let _ = writeln!(
                out,
                "{} {} ({} entries, {})",
                key.apply_to("Archive:"),
                relative_display(&summary.path, root),
                summary.entries,
                format_size(summary.bytes)
            );
            let _ = writeln!(out, "{} {}", key.apply_to("Digest:"), digest);
        }
        ArchiveOutcome::SkippedMacFamily(platform) => {
            let _ = writeln!(
                out,
                "{} {}",
                key.apply_to("Archive:"),
                Style::new()
                    .dim()
                    .apply_to(format!("none for {platform}, ship the .app bundle"))
            );
        }
        ArchiveOutcome::SkippedByRequest => {
            let _ = writeln!(
                out,
                "{} {}",
                key.apply_to("Archive:"),
                Style::new().dim().apply_to("skipped")
            );
        }
    }

    out
}

/// Print the summary of a finished bundle run
pub fn display_bundle_report(report: &BundleReport, root: &Path) {
    print!("{}", format_bundle_report(report, root));
}

//! Report rendering for the command line.

use std::io::Write;

use eyre::{Result, WrapErr};

use stepsync::SyncReport;

/// Write the human-readable outcome of a synchronisation run.
///
/// Mirrors the two things a caller wants to know: whether stubs were added,
/// and which file to open next.
pub(crate) fn write_text_report(writer: &mut dyn Write, report: &SyncReport) -> Result<()> {
    if report.is_up_to_date() {
        writeln!(writer, "No missing steps found for {}", target_name(report))
            .wrap_err("failed to write sync report")?;
    } else {
        let count = report.appended.len();
        let suffix = if count == 1 { "" } else { "s" };
        writeln!(
            writer,
            "Added {count} missing step stub{suffix} to {}",
            report.target.display()
        )
        .wrap_err("failed to write sync report")?;
    }
    writer.flush().wrap_err("failed to flush sync report")
}

/// Write the synchronisation report as a single JSON document.
pub(crate) fn write_json_report(writer: &mut dyn Write, report: &SyncReport) -> Result<()> {
    serde_json::to_writer(&mut *writer, report)
        .wrap_err("failed to serialise sync report to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")?;
    writer.flush().wrap_err("failed to flush JSON output")
}

/// File name of the report's target, falling back to the full path.
fn target_name(report: &SyncReport) -> String {
    report.target.file_name().map_or_else(
        || report.target.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

//! Terminal styling and plain-text rendering of runs and reports.
mod render;
mod theme;


pub use render::{
    RunSummary, benchmark_header, comparison_table, level_lines, progress_line, report_lines,
    run_header, saved_line,
};
pub use theme::Theme;

/// Writes rendered lines to `out`, one per line.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn emit<W>(out: &mut W, lines: &[String]) -> std::io::Result<()>
where
    W: std::io::Write,
{
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

// crates/cli/src/presentation.rs
use crate::args::OutputFormat;
use crate::error::Result;
use crossterm::style::{Color, Stylize};
use linesindir_engine::stats::{LineCount, RunResult};
use serde::Serialize;
use std::io::Write;

/// How the final report is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStyle {
    pub format: OutputFormat,
    pub list: bool,
    /// Apply colors and bold; only meaningful on a terminal.
    pub colored: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    filter: &'a str,
    files: usize,
    lines: usize,
    entries: &'a [LineCount],
}

/// Write the report for a successful run.
///
/// # Errors
/// Fails when `out` cannot be written or JSON serialization fails.
pub fn print_report<W: Write>(
    out: &mut W,
    result: &RunResult,
    filter: &str,
    style: ReportStyle,
) -> Result<()> {
    match style.format {
        OutputFormat::Text => print_text(out, result, filter, style),
        OutputFormat::Json => print_json(out, result, filter),
    }
}

fn print_text<W: Write>(
    out: &mut W,
    result: &RunResult,
    filter: &str,
    style: ReportStyle,
) -> Result<()> {
    if style.list {
        for file in &result.files {
            writeln!(out, "{:>9}  {}", file.count, file.path.display())?;
        }
        writeln!(out)?;
    }

    let heading = format!("Looking at {filter} files:");
    writeln!(out, "{}", paint(heading, Color::Yellow, true, style.colored))?;
    writeln!(out)?;

    let files = paint(result.aggregate.total_files.to_string(), Color::Red, true, style.colored);
    let lines = paint(result.aggregate.total_lines.to_string(), Color::Red, true, style.colored);
    writeln!(
        out,
        "{}{files}",
        paint("Total number of files: ".to_string(), Color::Green, false, style.colored)
    )?;
    writeln!(
        out,
        "{}{lines}",
        paint("Total number of lines: ".to_string(), Color::Green, false, style.colored)
    )?;
    Ok(())
}

fn print_json<W: Write>(out: &mut W, result: &RunResult, filter: &str) -> Result<()> {
    let report = JsonReport {
        filter,
        files: result.aggregate.total_files,
        lines: result.aggregate.total_lines,
        entries: &result.files,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn paint(text: String, color: Color, bold: bool, colored: bool) -> String {
    if !colored {
        return text;
    }
    let styled = text.with(color);
    if bold {
        styled.bold().to_string()
    } else {
        styled.to_string()
    }
}

// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;
pub mod progress;

use crate::args::{Args, OutputFormat};
use crate::config::ScanOptions;
use crate::error::Result;
use crate::presentation::ReportStyle;
use crate::progress::TerminalProgress;
use crossterm::tty::IsTty;
use std::io::{self, Write};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan, count and print the report for `args`.
///
/// Progress and colors are only drawn when stdout is a terminal and the text
/// format is selected; the totals are the same either way.
///
/// # Errors
/// Returns the engine's `NoFilesFound` when nothing matched, or an I/O error
/// when the report cannot be written. Nothing is printed on failure.
pub fn run(args: &Args) -> Result<()> {
    let options = ScanOptions::try_from(args)?;
    let stdout = io::stdout();
    let interactive = args.output.format == OutputFormat::Text && stdout.is_tty();

    let result = if interactive {
        linesindir_engine::run_with_progress(&options, &mut TerminalProgress::new())?
    } else {
        linesindir_engine::run(&options)?
    };

    let style = ReportStyle {
        format: args.output.format,
        list: args.output.list,
        colored: interactive,
    };
    let mut out = stdout.lock();
    presentation::print_report(&mut out, &result, &options.filter_label(), style)?;
    out.flush()?;
    Ok(())
}

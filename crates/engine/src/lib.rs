// crates/engine/src/lib.rs
pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod progress;
pub mod stats;

use crate::config::ScanOptions;
use crate::error::{EngineError, Result};
use crate::progress::{NoProgress, ProgressReporter};
use crate::stats::{Aggregate, FileCandidate, ProgressState, RunResult};
use std::path::PathBuf;

/// Run the line counter without progress output.
///
/// # Errors
///
/// See [`run_with_progress`].
pub fn run(options: &ScanOptions) -> Result<RunResult> {
    run_with_progress(options, &mut NoProgress)
}

/// Scan `options.root`, count every candidate and total the results.
///
/// Files that cannot be read at counting time are logged, recorded in
/// `RunResult::errors` and left out of the totals. The progress step still
/// advances for them so the reporter always ends at `total`.
///
/// # Errors
///
/// Returns `EngineError::NoFilesFound` when the scan yields no candidate. No
/// `update` or `complete` call reaches the reporter in that case.
pub fn run_with_progress<P>(options: &ScanOptions, progress: &mut P) -> Result<RunResult>
where
    P: ProgressReporter + ?Sized,
{
    log::info!(
        "scanning {} for {} files",
        options.root.display(),
        options.filter_label()
    );

    progress.collecting();
    let mut scan = filesystem::scan(options);
    let candidates: Vec<FileCandidate> = scan.by_ref().collect();
    let errors = scan.into_errors();
    progress.collected(candidates.len());

    if candidates.is_empty() {
        return Err(EngineError::NoFilesFound {
            root: options.root.clone(),
            filter: options.filter_label(),
        });
    }

    let result = count_candidates(candidates, progress, errors);
    progress.complete(true);

    log::info!(
        "counted {} lines in {} files",
        result.aggregate.total_lines,
        result.aggregate.total_files
    );
    Ok(result)
}

/// Count `candidates` in order, folding the counts into an `Aggregate`.
///
/// Unreadable candidates are appended to `errors` and still advance the step.
fn count_candidates<P>(
    candidates: Vec<FileCandidate>,
    progress: &mut P,
    mut errors: Vec<(PathBuf, EngineError)>,
) -> RunResult
where
    P: ProgressReporter + ?Sized,
{
    let total = candidates.len();
    let (aggregate, files) = candidates.into_iter().enumerate().fold(
        (Aggregate::default(), Vec::with_capacity(total)),
        |(aggregate, mut files), (index, candidate)| {
            let (aggregate, label) = match processor::count(&candidate) {
                Ok(counted) => {
                    let label = format!(
                        "Lines in file: {}: {}",
                        candidate.file_name(),
                        counted.count
                    );
                    let aggregate = aggregate.record(&counted);
                    files.push(counted);
                    (aggregate, label)
                }
                Err(e) => {
                    log::warn!("skipping {}: {e}", candidate.path.display());
                    let label = format!("Unreadable file: {}", candidate.file_name());
                    errors.push((candidate.path, e));
                    (aggregate, label)
                }
            };

            progress.update(&ProgressState {
                step: index + 1,
                total,
                label,
            });
            (aggregate, files)
        },
    );

    RunResult {
        aggregate,
        files,
        errors,
    }
}

// crates/engine/src/stats.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::error::EngineError;

/// A filesystem entry that survived classification.
///
/// Only entries that are both regular files and decodable as text are ever
/// emitted by the scanner; the flags are kept so that callers and logs can see
/// why an entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    /// Extension without the leading dot, empty when the file has none.
    pub extension: String,
    pub is_regular_file: bool,
    pub is_text_decodable: bool,
}

impl FileCandidate {
    pub fn new(path: PathBuf, is_regular_file: bool, is_text_decodable: bool) -> Self {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        Self {
            path,
            extension,
            is_regular_file,
            is_text_decodable,
        }
    }

    /// Whether the candidate may be counted at all.
    pub const fn is_eligible(&self) -> bool {
        self.is_regular_file && self.is_text_decodable
    }

    /// Short label used for progress output.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

/// Line count of one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineCount {
    pub path: PathBuf,
    #[serde(rename = "lines")]
    pub count: usize,
}

impl LineCount {
    pub const fn new(path: PathBuf, count: usize) -> Self {
        Self { path, count }
    }
}

/// Totals of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    #[serde(rename = "files")]
    pub total_files: usize,
    #[serde(rename = "lines")]
    pub total_lines: usize,
}

impl Aggregate {
    /// Fold one more counted file into the totals.
    #[must_use]
    pub const fn record(self, count: &LineCount) -> Self {
        Self {
            total_files: self.total_files + 1,
            total_lines: self.total_lines + count.count,
        }
    }
}

/// Snapshot handed to progress reporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub step: usize,
    pub total: usize,
    pub label: String,
}

impl ProgressState {
    /// Completion percentage in `0..=100`. A zero total renders as 0%.
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        let step = if self.step > self.total { self.total } else { self.step };
        step * 100 / self.total
    }
}

/// Result of a run: totals, the per-file counts that make them up, and the
/// non-fatal errors met on the way.
#[derive(Debug, Default)]
pub struct RunResult {
    pub aggregate: Aggregate,
    pub files: Vec<LineCount>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

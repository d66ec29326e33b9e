// crates/engine/src/filesystem.rs
use crate::classify::classify;
use crate::config::ScanOptions;
use crate::error::EngineError;
use crate::stats::FileCandidate;
use ignore::{Walk, WalkBuilder};
use std::path::PathBuf;

/// Lazy recursive scan of `options.root`.
///
/// Every call starts a fresh traversal. Entries are classified first and only
/// then matched against the extension filter, so binary files are never
/// counted even when every extension is accepted.
///
/// Emission order follows the walker and must not be relied upon.
pub fn scan(options: &ScanOptions) -> Scan<'_> {
    let mut builder = WalkBuilder::new(&options.root);

    // Plain enumeration unless asked otherwise: hidden entries are visited
    // and no ignore files are consulted.
    let ignore_files = options.respect_ignore_files;
    builder
        .hidden(options.skip_hidden)
        .ignore(ignore_files)
        .git_ignore(ignore_files)
        .git_global(ignore_files)
        .git_exclude(ignore_files)
        .parents(ignore_files)
        .require_git(false)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    Scan {
        walk: builder.build(),
        options,
        errors: Vec::new(),
    }
}

/// Iterator over the candidates of one traversal.
///
/// Per-entry failures are logged and kept aside; they never end the scan.
pub struct Scan<'a> {
    walk: Walk,
    options: &'a ScanOptions,
    errors: Vec<(PathBuf, EngineError)>,
}

impl Scan<'_> {
    pub fn into_errors(self) -> Vec<(PathBuf, EngineError)> {
        self.errors
    }

    fn skip(&mut self, path: PathBuf, err: EngineError) {
        log::warn!("skipping {}: {err}", path.display());
        self.errors.push((path, err));
    }
}

impl Iterator for Scan<'_> {
    type Item = FileCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = error_path(&e).unwrap_or_else(|| PathBuf::from("<walk>"));
                    self.skip(path, EngineError::Walk(e));
                    continue;
                }
            };

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }

            let candidate = match classify(entry.path()) {
                Ok(candidate) => candidate,
                Err(e) => {
                    self.skip(entry.into_path(), e);
                    continue;
                }
            };

            if !candidate.is_eligible() {
                log::debug!(
                    "not counted: {} (regular={}, text={})",
                    candidate.path.display(),
                    candidate.is_regular_file,
                    candidate.is_text_decodable
                );
                continue;
            }

            if self.options.accepts_extension(&candidate.extension) {
                return Some(candidate);
            }
        }
    }
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}

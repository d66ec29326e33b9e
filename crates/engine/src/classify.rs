// crates/engine/src/classify.rs
//! Decides whether a filesystem entry can be counted.
//!
//! An entry qualifies when it is a regular file and its whole content decodes
//! as UTF-8. A failed decode (invalid bytes, permission denied, file vanished)
//! is a filtering signal, not an error.

use crate::error::{EngineError, Result};
use crate::stats::FileCandidate;
use std::fs;
use std::io;
use std::path::Path;

/// Classify `path`.
///
/// Symlinks are classified by their target. A dangling link, or an entry
/// that disappeared since it was listed, is not a regular file.
///
/// # Errors
/// Returns `EngineError::Metadata` when the entry's metadata cannot be read
/// for any other reason. Content decoding problems never surface as errors.
pub fn classify(path: &Path) -> Result<FileCandidate> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if fs::symlink_metadata(path).is_ok() {
                log::debug!("dangling symlink {}", path.display());
            } else {
                log::debug!("{} vanished before classification", path.display());
            }
            return Ok(FileCandidate::new(path.to_path_buf(), false, false));
        }
        Err(e) => {
            return Err(EngineError::Metadata {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let is_regular_file = meta.is_file();
    let is_text_decodable = is_regular_file && is_text_decodable(path);

    Ok(FileCandidate::new(
        path.to_path_buf(),
        is_regular_file,
        is_text_decodable,
    ))
}

/// Reads the full file and checks that it is valid UTF-8.
pub fn is_text_decodable(path: &Path) -> bool {
    match fs::read(path) {
        Ok(bytes) => std::str::from_utf8(&bytes).is_ok(),
        Err(e) => {
            log::debug!("cannot read {} for decoding: {e}", path.display());
            false
        }
    }
}

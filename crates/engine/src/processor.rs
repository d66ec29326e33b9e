use crate::error::{EngineError, Result};
use crate::stats::{FileCandidate, LineCount};
use std::io;
use std::path::Path;

/// Count the lines of a candidate.
///
/// # Errors
/// Returns `EngineError::FileRead` when the file can no longer be read or no
/// longer decodes as text since it was scanned.
pub fn count(candidate: &FileCandidate) -> Result<LineCount> {
    let count = count_file(&candidate.path)?;
    log::debug!("{}: {count} lines", candidate.path.display());
    Ok(LineCount::new(candidate.path.clone(), count))
}

fn count_file(path: &Path) -> Result<usize> {
    let read_err = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(read_err)?;
    let text = std::str::from_utf8(&bytes)
        .map_err(|e| read_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    Ok(count_segments(text))
}

/// Number of segments `text` splits into on `\n`, `\r\n` and `\r`.
///
/// Segments, not separators: `"a\nb"` is 2, `"a\nb\n"` is 3 (the last one
/// empty) and `""` is 1.
pub fn count_segments(text: &str) -> usize {
    let bytes = text.as_bytes();
    let lf = bytecount::count(bytes, b'\n');
    let cr = bytecount::count(bytes, b'\r');
    // CRLF は1つの区切りとして扱う
    let crlf = memchr::memmem::find_iter(bytes, b"\r\n").count();

    lf + cr - crlf + 1
}

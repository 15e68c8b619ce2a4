//! File I/O adapter: whole-document read and write.
//!
//! Documents are plain text. Content is normalized to `\n` in memory; the
//! line ending detected at load time is restored on save. Writes overwrite
//! in full with no atomic rename or backup.

use std::fs;
use std::path::Path;

use jotpad_buffer::LineEnding;

use crate::error::EditorError;

/// Read a whole file as text, normalized to `\n` line endings.
///
/// Returns the text together with the line ending detected before
/// normalization. Missing file, permission and non-UTF-8 content all
/// surface as [`EditorError::Io`]; the caller's document stays untouched.
pub fn read_document(path: &Path) -> Result<(String, LineEnding), EditorError> {
    let raw = fs::read_to_string(path).map_err(|source| EditorError::io(path, source))?;
    let ending = LineEnding::detect(&raw);
    let text = match ending {
        LineEnding::Lf => raw,
        LineEnding::Crlf => raw.replace("\r\n", "\n"),
    };
    Ok((text, ending))
}

/// Write the full document text to `path`, restoring the line ending.
pub fn write_document(path: &Path, text: &str, ending: LineEnding) -> Result<(), EditorError> {
    let contents = match ending {
        LineEnding::Lf => text.to_string(),
        LineEnding::Crlf => text.replace('\n', "\r\n"),
    };
    fs::write(path, contents).map_err(|source| EditorError::io(path, source))
}

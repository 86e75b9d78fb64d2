//! Best-effort file reading for aggregation
//!
//! Reads never fail outright: anything that cannot be read becomes a
//! `FileContent::Unreadable` carrying the reason, which the output step
//! renders inline.

use std::path::Path;

/// Content of one admitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text; invalid UTF-8 sequences are replaced with U+FFFD.
    Text(String),
    /// The file could not be read; the string names the failure.
    Unreadable(String),
}

impl FileContent {
    pub fn is_readable(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

/// Read a file as lossy UTF-8.
///
/// Only regular files are opened (symlinks are followed), so FIFOs and
/// device nodes are reported rather than blocked on.
pub fn read_lossy(path: &Path) -> FileContent {
    match path.metadata() {
        Ok(meta) if !meta.is_file() => {
            return FileContent::Unreadable("not a regular file".to_string());
        }
        Ok(_) => {}
        Err(e) => return FileContent::Unreadable(e.to_string()),
    }

    match std::fs::read(path) {
        Ok(bytes) => FileContent::Text(decode_lossy(bytes)),
        Err(e) => FileContent::Unreadable(e.to_string()),
    }
}

/// Decode bytes as UTF-8, reusing the buffer when it is already valid.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

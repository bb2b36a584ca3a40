//! Single-line document model and file loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// One line of text as raw bytes. Never contains a trailing line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
}

impl Row {
    /// Build a row from one line, dropping any trailing `\n`/`\r` bytes.
    pub fn from_line(line: impl Into<Vec<u8>>) -> Self {
        let mut chars = line.into();
        while matches!(chars.last(), Some(b'\n' | b'\r')) {
            chars.pop();
        }
        Self { chars }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The leading bytes that fit in `width` columns.
    pub fn truncated(&self, width: usize) -> &[u8] {
        &self.chars[..self.chars.len().min(width)]
    }
}

/// Read the first line of `reader`. `Ok(None)` for empty input.
pub fn read_first_line<R: BufRead>(mut reader: R) -> std::io::Result<Option<Row>> {
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(Row::from_line(line)))
}

/// Open `path` and load its first line.
pub fn load_first_line(path: &Path) -> Result<Option<Row>> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let row = read_first_line(BufReader::new(file)).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        len = row.as_ref().map_or(0, Row::len),
        "loaded first line"
    );
    Ok(row)
}

//! Line input and tokenizing.

use std::io::BufRead;

/// Bytes that separate tokens.
pub const TOKEN_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Read one line without its `\n`. `Ok(None)` at end of input.
///
/// A final line without a terminator is still returned; the following call
/// reports end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Split a line into non-empty tokens. No quoting or escaping.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(TOKEN_DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

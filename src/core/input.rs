//! Key decoding from raw terminal bytes.
//!
//! Decoding is a fixed-lookahead state machine: one byte, or ESC plus two
//! bytes, or ESC plus three bytes for `ESC [ <digit> ~`. Every read after the
//! first is a single attempt bounded by the device timeout, so a lone Escape
//! press resolves after at most two timeouts. Unrecognized or truncated
//! sequences decode to [`Key::Escape`]; decoding itself never fails.

use crate::core::terminal::Terminal;
use crate::error::{Error, Result};

pub const ESC: u8 = 0x1b;

/// Logical key produced by [`read_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable or control byte, passed through unmodified.
    Byte(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Escape,
}

impl Key {
    /// Whether this is `letter` pressed together with Ctrl.
    pub fn is_ctrl(self, letter: u8) -> bool {
        self == Key::Byte(ctrl_key(letter))
    }
}

/// Byte a terminal sends for Ctrl + `key` (bits 5 and 6 cleared).
pub const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

/// `ESC [ <digit> ~`, keyed by the digit.
const CSI_TILDE: &[(u8, Key)] = &[
    (b'1', Key::Home),
    (b'3', Key::Delete),
    (b'4', Key::End),
    (b'5', Key::PageUp),
    (b'6', Key::PageDown),
    (b'7', Key::Home),
    (b'8', Key::End),
];

/// `ESC [ <letter>`, keyed by the letter.
const CSI_FINAL: &[(u8, Key)] = &[
    (b'A', Key::ArrowUp),
    (b'B', Key::ArrowDown),
    (b'C', Key::ArrowRight),
    (b'D', Key::ArrowLeft),
    (b'H', Key::Home),
    (b'F', Key::End),
];

/// `ESC O <letter>`, keyed by the letter.
const SS3_FINAL: &[(u8, Key)] = &[(b'H', Key::Home), (b'F', Key::End)];

fn lookup(table: &[(u8, Key)], byte: u8) -> Option<Key> {
    table
        .iter()
        .find_map(|&(candidate, key)| (candidate == byte).then_some(key))
}

fn read_once<T: Terminal>(term: &mut T) -> Result<Option<u8>> {
    term.read_byte().map_err(Error::Read)
}

/// Block until one key is available and decode it.
///
/// Timeouts before the first byte are retried indefinitely; only device errors
/// are returned.
pub fn read_key<T: Terminal>(term: &mut T) -> Result<Key> {
    let byte = loop {
        if let Some(byte) = read_once(term)? {
            break byte;
        }
    };

    if byte != ESC {
        return Ok(Key::Byte(byte));
    }
    decode_escape(term)
}

fn decode_escape<T: Terminal>(term: &mut T) -> Result<Key> {
    let Some(first) = read_once(term)? else {
        return Ok(Key::Escape);
    };
    let Some(second) = read_once(term)? else {
        return Ok(Key::Escape);
    };

    let key = match first {
        b'[' if second.is_ascii_digit() => {
            let Some(third) = read_once(term)? else {
                return Ok(Key::Escape);
            };
            if third == b'~' {
                lookup(CSI_TILDE, second)
            } else {
                None
            }
        }
        b'[' => lookup(CSI_FINAL, second),
        b'O' => lookup(SS3_FINAL, second),
        _ => None,
    };

    Ok(key.unwrap_or(Key::Escape))
}

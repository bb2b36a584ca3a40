use std::collections::VecDeque;
use std::io::{self, Write};

use kilo::{
    ctrl_key, load_first_line, read_key, run, window_size, EditorState, Key, Terminal, WindowSize,
};
use pretty_assertions::assert_eq;

const HIDE_HOME: &[u8] = b"\x1b[?25l\x1b[H";
const CLEAR_HOME: &[u8] = b"\x1b[2J\x1b[H";

/// In-memory terminal: scripted input, recorded writes, optional direct size.
struct HarnessTerminal {
    input: VecDeque<u8>,
    writes: Vec<Vec<u8>>,
    size: Option<WindowSize>,
}

impl HarnessTerminal {
    fn new(size: Option<WindowSize>) -> Self {
        Self {
            input: VecDeque::new(),
            writes: Vec::new(),
            size,
        }
    }

    fn type_bytes(&mut self, data: &[u8]) {
        self.input.extend(data.iter().copied());
    }
}

impl Terminal for HarnessTerminal {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.writes.push(data.to_vec());
        Ok(())
    }

    fn window_size(&self) -> Option<WindowSize> {
        self.size
    }
}

fn start(term: &mut HarnessTerminal) -> EditorState {
    let size = window_size(term).expect("window size");
    EditorState::new(size)
}

#[test]
fn decoding_vectors() {
    let mut term = HarnessTerminal::new(None);
    let cases: &[(&[u8], Key)] = &[
        (b"\x1b[A", Key::ArrowUp),
        (b"\x1b[3~", Key::Delete),
        (b"\x1b[1~", Key::Home),
        (b"\x1b[H", Key::Home),
        (b"\x1b[6~", Key::PageDown),
        (b"\x1bOF", Key::End),
        (b"\x1b", Key::Escape),
    ];
    for (input, expected) in cases {
        term.type_bytes(input);
        assert_eq!(read_key(&mut term).expect("decode"), *expected, "input {input:?}");
        assert!(term.input.is_empty(), "input {input:?} left bytes behind");
    }
}

#[test]
fn session_navigates_and_quits_with_single_clear() {
    let mut term = HarnessTerminal::new(Some(WindowSize::new(24, 80)));
    let mut state = start(&mut term);

    term.type_bytes(b"\x1b[6~\x1b[6~\x1b[F\x1b[Dz");
    term.type_bytes(&[ctrl_key(b'q')]);
    run(&mut term, &mut state).expect("session");

    assert_eq!((state.cx(), state.cy()), (78, 23));

    let (last, frames) = term.writes.split_last().expect("writes");
    assert_eq!(last.as_slice(), CLEAR_HOME);
    assert_eq!(frames.len(), 6, "one frame before each key");
    assert!(frames.iter().all(|frame| frame.starts_with(HIDE_HOME)));
    assert!(frames[1].ends_with(b"\x1b[24;1H\x1b[?25h"));
    assert!(frames[5].ends_with(b"\x1b[24;79H\x1b[?25h"));
}

#[test]
fn quit_immediately_renders_exactly_one_frame() {
    let mut term = HarnessTerminal::new(Some(WindowSize::new(24, 80)));
    let mut state = start(&mut term);
    term.type_bytes(&[ctrl_key(b'q')]);
    run(&mut term, &mut state).expect("session");

    assert_eq!(term.writes.len(), 2);
    assert_eq!(term.writes[1], CLEAR_HOME);
}

#[test]
fn geometry_fallback_then_session() {
    let mut term = HarnessTerminal::new(None);
    term.type_bytes(b"\x1b[10;40R");
    let mut state = start(&mut term);
    assert_eq!((state.screen_rows(), state.screen_cols()), (10, 40));

    term.type_bytes(&[ctrl_key(b'q')]);
    run(&mut term, &mut state).expect("session");

    assert_eq!(term.writes[0], b"\x1b[999C\x1b[999B");
    assert_eq!(term.writes[1], b"\x1b[6n");
    let frame = String::from_utf8_lossy(&term.writes[2]).to_string();
    assert_eq!(frame.matches("\x1b[K").count(), 10);
    assert_eq!(frame.matches("\r\n").count(), 9);
}

#[test]
fn loaded_file_is_shown_on_first_line() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"hello\r\nignored\n").expect("write");
    let row = load_first_line(file.path()).expect("load");
    assert_eq!(row.as_ref().map(|row| row.len()), Some(5));

    let mut term = HarnessTerminal::new(Some(WindowSize::new(24, 80)));
    let mut state = start(&mut term).with_row(row);
    term.type_bytes(&[ctrl_key(b'q')]);
    run(&mut term, &mut state).expect("session");

    let frame = &term.writes[0];
    assert!(frame.starts_with(b"\x1b[?25l\x1b[Hhello\x1b[K\r\n~\x1b[K"));
    assert!(!String::from_utf8_lossy(frame).contains("Kilo editor"));
}

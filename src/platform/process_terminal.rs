//! Process-backed terminal over the stdin/stdout file descriptors.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use libc::{self, c_int};

use crate::core::terminal::{Terminal, WindowSize};

/// Write all of `bytes`, retrying interrupted and short writes.
///
/// `write_once` is one `write(2)` call; stdout stays in blocking mode, so a
/// partial count only means the kernel took fewer bytes than offered.
fn write_all_fd_with<F>(fd: c_int, bytes: &[u8], mut write_once: F) -> std::io::Result<()>
where
    F: FnMut(c_int, &[u8]) -> std::io::Result<usize>,
{
    let mut remaining = bytes;
    while !remaining.is_empty() {
        match write_once(fd, remaining) {
            Ok(0) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "terminal accepted zero bytes",
                ));
            }
            Ok(written) if written > remaining.len() => {
                return Err(std::io::Error::other(format!(
                    "write reported {written} bytes for a {} byte buffer",
                    remaining.len()
                )));
            }
            Ok(written) => remaining = &remaining[written..],
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn write_fd(fd: c_int, data: &[u8]) -> std::io::Result<()> {
    write_all_fd_with(fd, data, |fd, buf| {
        let result = unsafe { libc::write(fd, buf.as_ptr() as *const libc::c_void, buf.len()) };
        if result < 0 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(result as usize)
        }
    })
}

fn read_winsize(fd: c_int) -> Option<WindowSize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some(WindowSize::new(size.ws_row, size.ws_col))
    } else {
        None
    }
}

/// Terminal on the process's own stdin/stdout.
///
/// Expects the input fd to be in raw mode (see
/// [`TerminalMode`](crate::platform::TerminalMode)) so that reads return after
/// the device timeout instead of waiting for a full line.
pub struct ProcessTerminal {
    stdin_fd: c_int,
    stdout_fd: c_int,
    shutdown: Option<Arc<AtomicBool>>,
    write_log_path: Option<PathBuf>,
    write_log_failed: bool,
}

impl ProcessTerminal {
    pub fn new() -> Self {
        Self::with_fds(libc::STDIN_FILENO, libc::STDOUT_FILENO)
    }

    pub fn with_fds(stdin_fd: c_int, stdout_fd: c_int) -> Self {
        Self {
            stdin_fd,
            stdout_fd,
            shutdown: None,
            write_log_path: None,
            write_log_failed: false,
        }
    }

    /// Mirror every written byte into `path` (append).
    pub fn with_write_log(mut self, path: Option<PathBuf>) -> Self {
        self.write_log_path = path;
        self
    }

    /// Fail reads once `flag` is raised by a shutdown signal handler.
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = Some(flag);
        self
    }

    pub fn stdin_fd(&self) -> c_int {
        self.stdin_fd
    }

    fn mirror(&mut self, data: &[u8]) {
        if self.write_log_failed {
            return;
        }
        if let Some(path) = self.write_log_path.as_ref() {
            let result = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut file| file.write_all(data));
            if let Err(err) = result {
                tracing::warn!(path = %path.display(), %err, "write log disabled");
                self.write_log_failed = true;
            }
        }
    }
}

impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ProcessTerminal {
    fn read_byte(&mut self) -> std::io::Result<Option<u8>> {
        if let Some(flag) = self.shutdown.as_ref() {
            if flag.load(Ordering::SeqCst) {
                // Not EINTR: the read path below retries those.
                return Err(std::io::Error::other("terminated by signal"));
            }
        }

        let mut byte = 0u8;
        let read_len =
            unsafe { libc::read(self.stdin_fd, &mut byte as *mut u8 as *mut libc::c_void, 1) };
        match read_len {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => {
                let err = std::io::Error::last_os_error();
                match err.kind() {
                    // EAGAIN shows up instead of a zero-length read on some
                    // platforms; EINTR is re-checked against the shutdown flag
                    // on the next call.
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::Interrupted => Ok(None),
                    _ => Err(err),
                }
            }
        }
    }

    fn write(&mut self, data: &[u8]) -> std::io::Result<()> {
        write_fd(self.stdout_fd, data)?;
        self.mirror(data);
        Ok(())
    }

    fn window_size(&self) -> Option<WindowSize> {
        read_winsize(self.stdout_fd)
    }
}

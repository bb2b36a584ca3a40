//! Pseudo-terminal fixtures for platform tests.

use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{Duration, Instant};

use libc::{self, c_int};

pub(crate) struct Pty {
    pub(crate) master: c_int,
    pub(crate) slave: c_int,
}

impl Drop for Pty {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.master);
            libc::close(self.slave);
        }
    }
}

pub(crate) fn open_pty() -> Pty {
    let mut master: c_int = 0;
    let mut slave: c_int = 0;
    let result = unsafe {
        libc::openpty(
            &mut master,
            &mut slave,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    };
    assert_eq!(result, 0, "openpty failed");
    Pty { master, slave }
}

/// Serializes tests that touch terminal settings or the process panic hook.
pub(crate) fn pty_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    match LOCK.get_or_init(|| Mutex::new(())).lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub(crate) fn poll_readable(fd: c_int, timeout_ms: i32) -> bool {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let result = unsafe { libc::poll(&mut fds, 1, timeout_ms) };
    result > 0 && (fds.revents & libc::POLLIN) != 0
}

pub(crate) fn write_all(fd: c_int, data: &[u8]) {
    let written = unsafe { libc::write(fd, data.as_ptr() as *const libc::c_void, data.len()) };
    assert_eq!(written, data.len() as isize, "short write to pty");
}

pub(crate) fn read_available(fd: c_int, timeout: Duration) -> Vec<u8> {
    let end = Instant::now() + timeout;
    let mut out = Vec::new();
    while Instant::now() < end {
        let remaining = end.saturating_duration_since(Instant::now());
        let timeout_ms = remaining.as_millis().min(i32::MAX as u128) as i32;
        if timeout_ms == 0 || !poll_readable(fd, timeout_ms) {
            break;
        }
        let mut buf = [0u8; 1024];
        let read_len = unsafe { libc::read(fd, buf.as_mut_ptr() as *mut _, buf.len()) };
        if read_len <= 0 {
            break;
        }
        out.extend_from_slice(&buf[..read_len as usize]);
    }
    out
}

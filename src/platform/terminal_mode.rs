//! Raw-mode lifecycle for the controlling terminal.
//!
//! The original line-discipline settings are captured once and restored at
//! most once, from whichever exit path runs first: explicit `disable`, the
//! guard's `Drop`, or the panic hook installed while raw mode is active.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use libc::{self, c_int};

use crate::error::{Error, Result};

/// Device read timeout in tenths of a second (`VTIME`).
pub const READ_TIMEOUT_DECISECONDS: libc::cc_t = 1;

pub(crate) fn get_termios(fd: c_int) -> std::io::Result<libc::termios> {
    let mut termios = unsafe { std::mem::zeroed::<libc::termios>() };
    let result = unsafe { libc::tcgetattr(fd, &mut termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(termios)
}

fn set_termios(fd: c_int, termios: &libc::termios) -> std::io::Result<()> {
    // TCSAFLUSH: apply after pending output drains and discard unread input.
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, termios) };
    if result != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

/// Derive the raw-mode configuration from `original`.
///
/// Input bytes reach the reader unmodified, output bytes are not
/// post-processed, and reads return after 0 bytes or 100ms.
pub fn raw_settings(original: &libc::termios) -> libc::termios {
    let mut raw = *original;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = READ_TIMEOUT_DECISECONDS;
    raw
}

struct SavedSettings {
    fd: c_int,
    original: libc::termios,
    restored: AtomicBool,
}

impl SavedSettings {
    fn restore(&self) -> std::io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        set_termios(self.fd, &self.original)
    }
}

/// Scoped raw mode. Dropping the guard restores the original settings.
pub struct TerminalMode {
    saved: Arc<SavedSettings>,
    _panic_hook: PanicHookGuard,
}

impl TerminalMode {
    /// Capture `fd`'s settings and switch it to raw mode.
    pub fn enable(fd: c_int) -> Result<Self> {
        let original = get_termios(fd).map_err(Error::GetAttr)?;
        let saved = Arc::new(SavedSettings {
            fd,
            original,
            restored: AtomicBool::new(false),
        });

        let panic_hook = {
            let saved = Arc::clone(&saved);
            install_panic_hook(move || {
                let _ = saved.restore();
            })
        };

        set_termios(fd, &raw_settings(&original)).map_err(Error::SetAttr)?;
        tracing::debug!(fd, "raw mode enabled");

        Ok(Self {
            saved,
            _panic_hook: panic_hook,
        })
    }

    /// Restore the captured settings. Later calls (and the drop) are no-ops.
    pub fn disable(&self) -> Result<()> {
        self.saved.restore().map_err(Error::SetAttr)
    }

    pub fn original(&self) -> &libc::termios {
        &self.saved.original
    }

    pub fn is_restored(&self) -> bool {
        self.saved.restored.load(Ordering::SeqCst)
    }
}

impl Drop for TerminalMode {
    fn drop(&mut self) {
        match self.saved.restore() {
            Ok(()) => tracing::debug!(fd = self.saved.fd, "terminal settings restored"),
            Err(err) => tracing::error!(fd = self.saved.fd, %err, "failed to restore terminal settings"),
        }
    }
}

type PanicHookFn = dyn Fn(&std::panic::PanicHookInfo<'_>) + Send + Sync + 'static;

/// Reinstalls the previous panic hook on drop.
pub struct PanicHookGuard {
    previous: Option<Arc<Box<PanicHookFn>>>,
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // Hooks can't be swapped from a panicking thread; the wrapper stays and
        // its cleanup is idempotent.
        if std::thread::panicking() {
            return;
        }
        let Some(previous) = self.previous.take() else {
            return;
        };
        drop(std::panic::take_hook());
        std::panic::set_hook(Box::new(move |info| (previous)(info)));
    }
}

/// Install a panic hook that runs `cleanup` before delegating to the previous
/// hook, so the panic message lands on a restored terminal.
pub fn install_panic_hook<F>(cleanup: F) -> PanicHookGuard
where
    F: Fn() + Send + Sync + 'static,
{
    let previous: Arc<Box<PanicHookFn>> = Arc::new(std::panic::take_hook());
    let chained = Arc::clone(&previous);
    std::panic::set_hook(Box::new(move |info| {
        cleanup();
        (chained)(info);
    }));
    PanicHookGuard {
        previous: Some(previous),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_termios, install_panic_hook, raw_settings, TerminalMode};
    use crate::error::Error;
    use crate::platform::test_pty::{open_pty, pty_lock};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn raw_settings_clear_line_discipline() {
        let original = unsafe { std::mem::zeroed::<libc::termios>() };
        let mut cooked = original;
        cooked.c_iflag = libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON;
        cooked.c_oflag = libc::OPOST;
        cooked.c_lflag = libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG;
        cooked.c_cc[libc::VMIN] = 1;

        let raw = raw_settings(&cooked);
        assert_eq!(raw.c_iflag, 0);
        assert_eq!(raw.c_oflag, 0);
        assert_eq!(raw.c_lflag, 0);
        assert_eq!(raw.c_cflag & libc::CS8, libc::CS8);
        assert_eq!(raw.c_cc[libc::VMIN], 0);
        assert_eq!(raw.c_cc[libc::VTIME], 1);
    }

    #[test]
    fn enable_applies_raw_mode_and_drop_restores() {
        let _lock = pty_lock();
        let pty = open_pty();
        let original = get_termios(pty.slave).expect("get termios");

        let mode = TerminalMode::enable(pty.slave).expect("enable raw mode");
        let raw = get_termios(pty.slave).expect("get termios");
        assert_eq!(raw.c_lflag & (libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG), 0);
        assert_eq!(raw.c_iflag & (libc::ICRNL | libc::IXON | libc::BRKINT), 0);
        assert_eq!(raw.c_oflag & libc::OPOST, 0);
        assert_eq!(raw.c_cflag & libc::CS8, libc::CS8);
        assert_eq!(raw.c_cc[libc::VMIN], 0);
        assert_eq!(raw.c_cc[libc::VTIME], 1);
        assert!(!mode.is_restored());

        drop(mode);
        let restored = get_termios(pty.slave).expect("get termios");
        assert_eq!(restored.c_lflag, original.c_lflag);
        assert_eq!(restored.c_iflag, original.c_iflag);
        assert_eq!(restored.c_oflag, original.c_oflag);
        assert_eq!(restored.c_cflag, original.c_cflag);
    }

    #[test]
    fn disable_restores_once() {
        let _lock = pty_lock();
        let pty = open_pty();
        let original = get_termios(pty.slave).expect("get termios");

        let mode = TerminalMode::enable(pty.slave).expect("enable raw mode");
        mode.disable().expect("disable");
        assert!(mode.is_restored());
        assert_eq!(
            get_termios(pty.slave).expect("get termios").c_lflag,
            original.c_lflag
        );

        // Already restored: a second disable must not fail even once the fd is
        // gone.
        drop(pty);
        mode.disable().expect("second disable is a no-op");
    }

    #[test]
    fn enable_fails_on_bad_fd() {
        let _lock = pty_lock();
        let err = match TerminalMode::enable(-1) {
            Ok(_) => panic!("expected enable to fail"),
            Err(err) => err,
        };
        match err {
            Error::GetAttr(source) => assert_eq!(source.raw_os_error(), Some(libc::EBADF)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn panic_hook_runs_cleanup_then_guard_uninstalls() {
        let _lock = pty_lock();
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));

        let calls = Arc::new(AtomicUsize::new(0));
        let guard = {
            let calls = Arc::clone(&calls);
            install_panic_hook(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };

        let _ = std::panic::catch_unwind(|| panic!("boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(guard);
        let _ = std::panic::catch_unwind(|| panic!("boom again"));
        assert_eq!(calls.load(Ordering::SeqCst), 1, "cleanup ran after uninstall");

        std::panic::set_hook(original);
    }
}

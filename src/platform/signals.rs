//! Termination signal registration.
//!
//! Handlers only raise a flag. The process terminal checks it on every read,
//! which turns a signal into an ordinary fatal read error on the main thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGHUP, SIGQUIT, SIGTERM};
use signal_hook::SigId;

pub const SHUTDOWN_SIGNALS: [libc::c_int; 3] = [SIGTERM, SIGHUP, SIGQUIT];

/// Registered shutdown handlers. Dropping unregisters them.
pub struct ShutdownSignals {
    flag: Arc<AtomicBool>,
    ids: Vec<SigId>,
}

impl ShutdownSignals {
    pub fn register() -> std::io::Result<Self> {
        let flag = Arc::new(AtomicBool::new(false));
        let mut registered = Self {
            flag,
            ids: Vec::with_capacity(SHUTDOWN_SIGNALS.len()),
        };
        for signal in SHUTDOWN_SIGNALS {
            let id = signal_hook::flag::register(signal, Arc::clone(&registered.flag))?;
            registered.ids.push(id);
        }
        Ok(registered)
    }

    /// Shared flag, raised once any shutdown signal arrives.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    pub fn received(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Drop for ShutdownSignals {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ShutdownSignals;
    use crate::platform::test_pty::pty_lock;
    use std::time::{Duration, Instant};

    #[test]
    fn sighup_raises_flag() {
        let _lock = pty_lock();
        let signals = ShutdownSignals::register().expect("register signals");
        assert!(!signals.received());

        unsafe {
            libc::raise(libc::SIGHUP);
        }

        let deadline = Instant::now() + Duration::from_secs(1);
        while !signals.received() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(signals.received());
        assert!(signals.flag().load(std::sync::atomic::Ordering::SeqCst));
    }
}

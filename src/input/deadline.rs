//! Single-shot deadline timer.
//!
//! Arms a named thread that sleeps on a disarm channel for the round's time
//! limit. If the limit passes first it stores `true` into a shared flag and
//! exits; that is all it ever does. Dropping the [`Deadline`] disconnects the
//! channel, which wakes the thread immediately, and joins it.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// An armed timer. Disarmed on drop.
pub struct Deadline {
    fired: Arc<AtomicBool>,
    disarm: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Deadline {
    /// Start the countdown.
    pub fn arm(limit: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<()>();
        let fired = Arc::new(AtomicBool::new(false));
        let fired_clone = fired.clone();

        let handle = thread::Builder::new()
            .name("gauntlet-deadline".to_string())
            .spawn(move || {
                if let Err(RecvTimeoutError::Timeout) = rx.recv_timeout(limit) {
                    fired_clone.store(true, Ordering::SeqCst);
                }
            })?;

        tracing::debug!(limit_ms = limit.as_millis() as u64, "deadline armed");

        Ok(Self {
            fired,
            disarm: Some(tx),
            handle: Some(handle),
        })
    }

    /// Whether the limit has passed.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Stop the timer. Returns whether it had already fired.
    pub fn disarm(mut self) -> bool {
        self.stop();
        self.has_fired()
    }

    fn stop(&mut self) {
        // Disconnecting the channel ends recv_timeout early.
        self.disarm.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.stop();
    }
}

//! Scoped terminal echo suppression.
//!
//! Raw mode is how crossterm turns echo off: typed characters are not shown
//! and arrive one key at a time instead of a line at a time. The guard puts
//! the terminal back the way it found it when dropped.

use std::io;

use crossterm::terminal;

/// Echo stays off while this guard is alive.
#[derive(Debug)]
pub struct EchoGuard {
    /// False when the terminal was already raw before we got here.
    restore: bool,
}

impl EchoGuard {
    /// Disable echo, remembering whether it needs turning back on.
    pub fn acquire() -> io::Result<Self> {
        let already_raw = terminal::is_raw_mode_enabled()?;
        if !already_raw {
            terminal::enable_raw_mode()?;
        }
        tracing::trace!(already_raw, "echo suppressed");
        Ok(Self { restore: !already_raw })
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        if self.restore {
            self.restore = false;
            terminal::disable_raw_mode()?;
            tracing::trace!("echo restored");
        }
        Ok(())
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore_mode() {
            tracing::warn!(%err, "failed to restore terminal echo");
        }
    }
}

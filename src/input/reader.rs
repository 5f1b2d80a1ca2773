//! Hidden line reader with a deadline.
//!
//! Reads one line with echo off while a [`Deadline`] counts down. Keys are
//! awaited in short poll slices and the deadline flag is checked every time a
//! poll returns, so an expired deadline ends the read within one slice even
//! if the player never touches the keyboard again.

use std::io;
use std::time::Duration;

use super::deadline::Deadline;
use super::keys::{Key, KeySource};
use crate::error::InputError;

/// How long a single key poll may block.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

// =============================================================================
// OUTCOME
// =============================================================================

/// How a read ended.
#[derive(Debug)]
pub enum InputOutcome {
    /// Enter or end-of-input; the full line.
    Completed(String),
    /// The deadline fired; whatever had been typed so far.
    TimedOut(String),
    /// The terminal failed or the player pressed Ctrl-C.
    Error(InputError),
}

impl InputOutcome {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut(_))
    }
}

// =============================================================================
// LINE BUFFER
// =============================================================================

/// What the reader should do after a key.
#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    Continue,
    Submit,
    Interrupt,
}

/// Editable line with a fixed character capacity.
#[derive(Debug)]
struct LineBuffer {
    text: String,
    capacity: usize,
}

impl LineBuffer {
    /// `max_len` counts a terminator slot, so one less character fits.
    fn new(max_len: usize) -> Self {
        let capacity = max_len.saturating_sub(1);
        Self { text: String::with_capacity(capacity), capacity }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn apply(&mut self, key: Key) -> LineEdit {
        match key {
            Key::Char(c) if is_printable(c) => {
                if self.len() < self.capacity {
                    self.text.push(c);
                }
                LineEdit::Continue
            }
            Key::Char('\r') | Key::Char('\n') | Key::Enter | Key::EndOfInput => LineEdit::Submit,
            Key::Char('\u{7f}') | Key::Char('\u{8}') | Key::Backspace => {
                self.text.pop();
                LineEdit::Continue
            }
            Key::Interrupt => LineEdit::Interrupt,
            Key::Char(_) | Key::Ignored => LineEdit::Continue,
        }
    }

    fn into_string(self) -> String {
        self.text
    }
}

/// Printable ASCII, space included.
fn is_printable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

// =============================================================================
// READER
// =============================================================================

/// Reads hidden lines from a [`KeySource`].
pub struct HiddenReader<S> {
    source: S,
    poll_interval: Duration,
}

impl<S: KeySource> HiddenReader<S> {
    pub fn new(source: S) -> Self {
        Self { source, poll_interval: DEFAULT_POLL_INTERVAL }
    }

    /// Upper bound on how late a timeout is noticed.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Read one line of at most `max_len - 1` characters with echo off,
    /// giving up when `limit` elapses.
    ///
    /// Echo is restored and the deadline disarmed before this returns,
    /// whichever way the read ended.
    pub fn read_hidden_line(&mut self, max_len: usize, limit: Duration) -> InputOutcome {
        match self.read_under_deadline(max_len, limit) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(%err, "hidden read failed");
                InputOutcome::Error(err)
            }
        }
    }

    fn read_under_deadline(
        &mut self,
        max_len: usize,
        limit: Duration,
    ) -> Result<InputOutcome, InputError> {
        // Drop order matters: the deadline is disarmed before echo comes back.
        let _echo = self.source.suppress_echo()?;
        let deadline = Deadline::arm(limit)?;
        let mut line = LineBuffer::new(max_len);

        loop {
            let polled = self.source.poll_key(self.poll_interval);

            if deadline.has_fired() {
                tracing::debug!(partial_len = line.len(), "deadline expired during read");
                return Ok(InputOutcome::TimedOut(line.into_string()));
            }

            let key = match polled {
                Ok(Some(key)) => key,
                Ok(None) => continue,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };

            match line.apply(key) {
                LineEdit::Continue => {}
                LineEdit::Submit => return Ok(InputOutcome::Completed(line.into_string())),
                LineEdit::Interrupt => return Err(InputError::Interrupted),
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Keys Module - Key events and where they come from
//!
//! Bridges crossterm's event system with the line reader. The reader never
//! touches crossterm directly; it pulls [`Key`]s from a [`KeySource`].
//!
//! # API
//!
//! - `Key` - The handful of keys the reader cares about
//! - `KeySource` - Echo suppression plus timed key polling
//! - `TerminalKeys` - The real terminal, via crossterm
//! - `convert_key_event` - Convert crossterm KeyEvent to our Key

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind,
    KeyModifiers,
};

use super::echo::EchoGuard;

// =============================================================================
// KEY
// =============================================================================

/// A key press as seen by the line reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A character key (may be non-printable; the reader filters).
    Char(char),
    /// Backspace or Delete.
    Backspace,
    /// Enter / carriage return / line feed.
    Enter,
    /// End of input (Ctrl-D, or the stream closed).
    EndOfInput,
    /// Ctrl-C.
    Interrupt,
    /// Anything else (arrows, function keys, releases).
    Ignored,
}

// =============================================================================
// KEY SOURCE
// =============================================================================

/// Where the reader gets keys from.
pub trait KeySource {
    /// Held for the duration of a read; dropping it restores echo.
    type Guard;

    /// Turn terminal echo off until the returned guard is dropped.
    fn suppress_echo(&mut self) -> io::Result<Self::Guard>;

    /// Wait up to `timeout` for the next key.
    /// Returns `Ok(None)` if nothing arrived in time.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

impl<S: KeySource + ?Sized> KeySource for &mut S {
    type Guard = S::Guard;

    fn suppress_echo(&mut self) -> io::Result<Self::Guard> {
        (**self).suppress_echo()
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        (**self).poll_key(timeout)
    }
}

// =============================================================================
// TERMINAL KEYS (crossterm)
// =============================================================================

/// Keys read from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    type Guard = EchoGuard;

    fn suppress_echo(&mut self) -> io::Result<EchoGuard> {
        EchoGuard::acquire()
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            CrosstermEvent::Key(key) => Ok(Some(convert_key_event(key))),
            _ => Ok(None),
        }
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our Key
pub fn convert_key_event(event: CrosstermKeyEvent) -> Key {
    if event.kind == KeyEventKind::Release {
        return Key::Ignored;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Key::Interrupt,
            KeyCode::Char('d') | KeyCode::Char('D') => Key::EndOfInput,
            KeyCode::Char('h') | KeyCode::Char('H') => Key::Backspace,
            KeyCode::Char('j') | KeyCode::Char('m') => Key::Enter,
            _ => Key::Ignored,
        };
    }

    match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace | KeyCode::Delete => Key::Backspace,
        _ => Key::Ignored,
    }
}

// =============================================================================
// TESTS
// =============================================================================

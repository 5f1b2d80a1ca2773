//! Scripted key source shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use password_gauntlet::{Key, KeySource};

/// Replays queued keys, then stalls until the deadline fires.
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
    echo_off: Rc<Cell<bool>>,
    pub reads: usize,
}

pub struct ScriptedGuard(Rc<Cell<bool>>);

impl Drop for ScriptedGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self {
            keys: VecDeque::new(),
            echo_off: Rc::new(Cell::new(false)),
            reads: 0,
        }
    }

    /// Type `text` and press Enter.
    pub fn line(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self.keys.push_back(Key::Enter);
        self
    }

    pub fn key(mut self, key: Key) -> Self {
        self.keys.push_back(key);
        self
    }

    pub fn echo_off(&self) -> bool {
        self.echo_off.get()
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    type Guard = ScriptedGuard;

    fn suppress_echo(&mut self) -> io::Result<ScriptedGuard> {
        self.reads += 1;
        self.echo_off.set(true);
        Ok(ScriptedGuard(self.echo_off.clone()))
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

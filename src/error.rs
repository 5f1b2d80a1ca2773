//! Error types for input reading and the game driver.

use std::io;

use thiserror::Error;

/// Errors that end a hidden-input read.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input interrupted (Ctrl-C)")]
    Interrupted,
}

/// Errors from the game driver itself (writing output, startup).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to write game output: {0}")]
    Io(#[from] io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

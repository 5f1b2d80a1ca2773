//! # password-gauntlet
//!
//! A timed terminal game: every round asks for a password that satisfies a
//! growing list of composition rules, typed blind before the clock runs out.
//!
//! ## Modules
//!
//! - [`rules`] - Requirement generation, validation, and listing
//! - [`input`] - Hidden line reading under a deadline (crossterm)
//! - [`game`] - The round loop and end-of-game summary
//! - [`logging`] - `tracing` subscriber setup
//! - [`error`] - Error types

pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod rules;

pub use error::{GameError, InputError};
pub use game::{Game, GameConfig, GameEnding, GameSummary};
pub use input::{HiddenReader, InputOutcome, Key, KeySource, TerminalKeys};
pub use rules::{generate, validate, FailureReason, RequirementSet, SpecialRules};

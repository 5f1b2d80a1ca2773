//! Game Module - The round loop
//!
//! Generates each round's requirements, shows them, reads a hidden password
//! under the round's time limit, and validates it. The first timeout, failed
//! validation, or input error ends the game.
//!
//! The driver is generic over its key source, random source, and output, so a
//! whole game can be played against scripted keys and a byte buffer.
//!
//! # Example
//!
//! ```ignore
//! use password_gauntlet::game::{Game, GameConfig};
//! use password_gauntlet::input::{HiddenReader, TerminalKeys};
//!
//! let reader = HiddenReader::new(TerminalKeys::new());
//! let mut game = Game::new(reader, rand::thread_rng(), std::io::stdout(), GameConfig::default());
//! game.write_banner()?;
//! let summary = game.play()?;
//! ```

mod config;

pub use config::{
    GameConfig, RoundState, INITIAL_TIME_LIMIT, MAX_PASSWORD_LEN, MIN_TIME_LIMIT, ROUND_PAUSE,
    TIME_DECREMENT,
};

use std::io::Write;
use std::thread;

use rand::Rng;

use crate::error::Result;
use crate::input::{HiddenReader, InputOutcome, KeySource};
use crate::rules::{self, FailureReason};

// =============================================================================
// SUMMARY
// =============================================================================

/// Why the game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEnding {
    TimedOut,
    FailedRequirements(FailureReason),
    InputError(String),
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// The round that ended the game.
    pub final_round: u32,
    pub rounds_completed: u32,
    pub ending: GameEnding,
}

// =============================================================================
// GAME
// =============================================================================

/// Round-loop driver.
pub struct Game<S, R, W> {
    reader: HiddenReader<S>,
    rng: R,
    out: W,
    config: GameConfig,
}

impl<S, R, W> Game<S, R, W>
where
    S: KeySource,
    R: Rng,
    W: Write,
{
    pub fn new(reader: HiddenReader<S>, rng: R, out: W, config: GameConfig) -> Self {
        Self { reader, rng, out, config }
    }

    /// Give back the output sink (for inspecting a transcript).
    pub fn into_output(self) -> W {
        self.out
    }

    /// Title and instructions, ending with the "press Enter" prompt.
    pub fn write_banner(&mut self) -> Result<()> {
        writeln!(self.out, "--- Password Generation Game ---")?;
        writeln!(self.out, "You will be given password requirements and a time limit.")?;
        writeln!(self.out, "Enter a password meeting the criteria before time runs out!")?;
        writeln!(self.out, "Press Enter to start...")?;
        self.out.flush()?;
        Ok(())
    }

    /// Play rounds until one ends the game, then print the summary.
    pub fn play(&mut self) -> Result<GameSummary> {
        let mut state = RoundState::new(&self.config);

        let ending = loop {
            if let Some(ending) = self.play_round(&mut state)? {
                break ending;
            }
        };

        let summary = GameSummary {
            final_round: state.round,
            rounds_completed: state.completed(),
            ending,
        };
        tracing::info!(
            rounds_completed = summary.rounds_completed,
            ending = ?summary.ending,
            "game over"
        );
        self.write_summary(&summary)?;
        Ok(summary)
    }

    /// One round. Returns the ending if this round ended the game.
    fn play_round(&mut self, state: &mut RoundState) -> Result<Option<GameEnding>> {
        let round = state.round;
        let reqs = rules::generate(round, &mut self.rng);

        writeln!(self.out, "\n--- Round {round} ---")?;
        write!(self.out, "{reqs}")?;
        writeln!(self.out, "Time Limit: {} seconds", state.time_limit.as_secs())?;
        write!(self.out, "Enter password: ")?;
        self.out.flush()?;

        let outcome = self
            .reader
            .read_hidden_line(self.config.max_password_len, state.time_limit);

        let password = match outcome {
            InputOutcome::Completed(password) => password,
            InputOutcome::TimedOut(partial) => {
                tracing::info!(round, typed = partial.len(), "round timed out");
                writeln!(self.out, "\n\n *** Time's up! ***")?;
                return Ok(Some(GameEnding::TimedOut));
            }
            InputOutcome::Error(err) => {
                writeln!(self.out, "\nError reading input: {err}")?;
                return Ok(Some(GameEnding::InputError(err.to_string())));
            }
        };

        writeln!(self.out)?;

        let ending = match rules::validate(&password, &reqs) {
            Ok(()) => {
                writeln!(self.out, "Success! Requirements met.")?;
                state.advance(&self.config);
                tracing::debug!(next_round = state.round, "round passed");
                None
            }
            Err(reason) => {
                writeln!(self.out, "    Validation Fail: {reason}")?;
                writeln!(self.out, "Failure! Password did not meet all requirements.")?;
                tracing::info!(round, %reason, "round failed");
                Some(GameEnding::FailedRequirements(reason))
            }
        };
        self.out.flush()?;

        if !self.config.round_pause.is_zero() {
            thread::sleep(self.config.round_pause);
        }

        Ok(ending)
    }

    fn write_summary(&mut self, summary: &GameSummary) -> Result<()> {
        writeln!(self.out, "\n--- Game Over ---")?;
        let round = summary.final_round;
        match summary.ending {
            GameEnding::TimedOut => {
                writeln!(self.out, "You ran out of time on round {round}.")?;
            }
            GameEnding::FailedRequirements(_) => {
                writeln!(self.out, "You failed to meet the requirements for round {round}.")?;
            }
            GameEnding::InputError(_) => {
                writeln!(self.out, "Input could not be read on round {round}.")?;
            }
        }
        writeln!(self.out, "You completed {} round(s).", summary.rounds_completed)?;
        self.out.flush()?;
        Ok(())
    }
}

//! Game tunables and per-round state.

use std::time::Duration;

/// Starting time limit.
pub const INITIAL_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Time limit lost on each successful round.
pub const TIME_DECREMENT: Duration = Duration::from_secs(5);

/// The time limit never drops below this.
pub const MIN_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Input buffer size; one slot is reserved, so 99 characters fit.
pub const MAX_PASSWORD_LEN: usize = 100;

/// Pause after each validated round.
pub const ROUND_PAUSE: Duration = Duration::from_secs(1);

/// Driver settings. Built in code; there is no config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub initial_time_limit: Duration,
    pub time_decrement: Duration,
    pub min_time_limit: Duration,
    pub max_password_len: usize,
    pub round_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time_limit: INITIAL_TIME_LIMIT,
            time_decrement: TIME_DECREMENT,
            min_time_limit: MIN_TIME_LIMIT,
            max_password_len: MAX_PASSWORD_LEN,
            round_pause: ROUND_PAUSE,
        }
    }
}

/// Current round number and time limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundState {
    pub round: u32,
    pub time_limit: Duration,
}

impl RoundState {
    pub fn new(config: &GameConfig) -> Self {
        Self { round: 1, time_limit: config.initial_time_limit }
    }

    /// Move to the next round after a success.
    pub fn advance(&mut self, config: &GameConfig) {
        self.round += 1;
        self.time_limit = self
            .time_limit
            .saturating_sub(config.time_decrement)
            .max(config.min_time_limit);
    }

    /// Rounds finished successfully so far.
    pub fn completed(&self) -> u32 {
        self.round - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = RoundState::new(&GameConfig::default());
        assert_eq!(state.round, 1);
        assert_eq!(state.time_limit, Duration::from_secs(60));
        assert_eq!(state.completed(), 0);
    }

    #[test]
    fn test_time_limit_shrinks_to_floor() {
        let config = GameConfig::default();
        let mut state = RoundState::new(&config);

        let mut limits = Vec::new();
        for _ in 0..12 {
            state.advance(&config);
            limits.push(state.time_limit.as_secs());
        }

        assert_eq!(limits, vec![55, 50, 45, 40, 35, 30, 25, 20, 15, 10, 10, 10]);
        assert_eq!(state.round, 13);
        assert_eq!(state.completed(), 12);
    }
}

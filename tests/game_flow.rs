//! Whole games played against scripted keys.

mod common;

use std::time::{Duration, Instant};

use common::ScriptedKeys;
use password_gauntlet::{
    FailureReason, Game, GameConfig, GameEnding, GameSummary, HiddenReader, Key,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quick_config() -> GameConfig {
    GameConfig {
        round_pause: Duration::ZERO,
        ..GameConfig::default()
    }
}

fn play(keys: &mut ScriptedKeys, config: GameConfig) -> (GameSummary, String) {
    let reader = HiddenReader::new(keys).with_poll_interval(Duration::from_millis(5));
    let mut game = Game::new(reader, StdRng::seed_from_u64(9), Vec::new(), config);
    let summary = game.play().unwrap();
    let transcript = String::from_utf8(game.into_output()).unwrap();
    (summary, transcript)
}

#[test]
fn test_success_then_failure() {
    let mut keys = ScriptedKeys::new().line("Abcdee1").line("Short");
    let (summary, out) = play(&mut keys, quick_config());

    assert_eq!(summary.final_round, 2);
    assert_eq!(summary.rounds_completed, 1);
    assert_eq!(
        summary.ending,
        GameEnding::FailedRequirements(FailureReason::TooShort { length: 5, required: 9 })
    );

    assert!(out.contains("--- Round 1 ---"));
    assert!(out.contains("  - Minimum Length: 7\n"));
    assert!(out.contains("  - (None this round)\n"));
    assert!(out.contains("Time Limit: 60 seconds\n"));
    assert!(out.contains("Enter password: "));
    assert!(out.contains("Success! Requirements met.\n"));
    assert!(out.contains("--- Round 2 ---"));
    assert!(out.contains("Time Limit: 55 seconds\n"));
    assert!(out.contains("    Validation Fail: Too short (Length: 5, Required: 9)\n"));
    assert!(out.contains("Failure! Password did not meet all requirements.\n"));
    assert!(out.contains("--- Game Over ---"));
    assert!(out.contains("You failed to meet the requirements for round 2.\n"));
    assert!(out.ends_with("You completed 1 round(s).\n"));

    assert_eq!(keys.reads, 2);
    assert!(!keys.echo_off());
}

#[test]
fn test_rounds_through_palindrome() {
    let mut keys = ScriptedKeys::new()
        .line("Abcdee1")
        .line("ABcdef1!x")
        .line("ABcdef12x!")
        .line("ABCabad12x!?")
        .line("ABCab1!2!1baCBA");
    let (summary, out) = play(&mut keys, quick_config());

    assert_eq!(summary.rounds_completed, 4);
    assert_eq!(summary.final_round, 5);
    assert_eq!(summary.ending, GameEnding::FailedRequirements(FailureReason::MustEndSymbol));

    assert!(out.contains("Must START with an Uppercase letter"));
    assert!(out.contains("No consecutive identical characters"));
    assert!(out.contains("Must be a PALINDROME"));
    assert!(out.contains("Time Limit: 40 seconds\n"));
    assert_eq!(out.matches("Success! Requirements met.").count(), 4);
    assert!(out.ends_with("You completed 4 round(s).\n"));
}

#[test]
fn test_timeout_ends_game() {
    let config = GameConfig {
        initial_time_limit: Duration::from_millis(40),
        ..quick_config()
    };
    let mut keys = ScriptedKeys::new().key(Key::Char('A')).key(Key::Char('b'));
    let start = Instant::now();
    let (summary, out) = play(&mut keys, config);
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(40));
    assert!(elapsed < Duration::from_millis(140), "game ended late: {elapsed:?}");

    assert_eq!(summary.ending, GameEnding::TimedOut);
    assert_eq!(summary.final_round, 1);
    assert_eq!(summary.rounds_completed, 0);
    assert!(out.contains("*** Time's up! ***"));
    assert!(out.contains("You ran out of time on round 1.\n"));
    assert!(out.ends_with("You completed 0 round(s).\n"));
    assert!(!out.contains("Validation Fail"));
    assert!(!keys.echo_off());
}

#[test]
fn test_timeout_after_success() {
    let config = GameConfig {
        initial_time_limit: Duration::from_millis(500),
        time_decrement: Duration::from_millis(450),
        min_time_limit: Duration::from_millis(30),
        ..quick_config()
    };
    let mut keys = ScriptedKeys::new().line("Abcdee1");
    let (summary, _) = play(&mut keys, config);

    assert_eq!(summary.ending, GameEnding::TimedOut);
    assert_eq!(summary.rounds_completed, 1);
    assert_eq!(summary.final_round, 2);
}

#[test]
fn test_interrupt_is_input_error() {
    let mut keys = ScriptedKeys::new().key(Key::Char('x')).key(Key::Interrupt);
    let (summary, out) = play(&mut keys, quick_config());

    assert!(matches!(summary.ending, GameEnding::InputError(_)));
    assert_eq!(summary.rounds_completed, 0);
    assert!(out.contains("Error reading input"));
    assert!(out.contains("Input could not be read on round 1.\n"));
    assert!(!keys.echo_off());
}

#[test]
fn test_end_of_input_validates_partial() {
    let mut keys = ScriptedKeys::new().key(Key::Char('A')).key(Key::EndOfInput);
    let (summary, _) = play(&mut keys, quick_config());

    assert_eq!(
        summary.ending,
        GameEnding::FailedRequirements(FailureReason::TooShort { length: 1, required: 7 })
    );
}

#[test]
fn test_banner() {
    let reader = HiddenReader::new(ScriptedKeys::new());
    let mut game = Game::new(reader, StdRng::seed_from_u64(1), Vec::new(), quick_config());
    game.write_banner().unwrap();
    let out = String::from_utf8(game.into_output()).unwrap();

    assert!(out.starts_with("--- Password Generation Game ---\n"));
    assert!(out.ends_with("Press Enter to start...\n"));
}

use std::io::{self, BufRead};
use std::process::ExitCode;

use password_gauntlet::{logging, Game, GameConfig, HiddenReader, TerminalKeys};

fn run() -> password_gauntlet::error::Result<()> {
    logging::init()?;

    let stdout = io::stdout();
    let reader = HiddenReader::new(TerminalKeys::new());
    let mut game = Game::new(reader, rand::thread_rng(), stdout.lock(), GameConfig::default());

    game.write_banner()?;
    // Any line (or EOF) starts the game.
    let mut start = String::new();
    io::stdin().lock().read_line(&mut start)?;

    game.play()?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("[password-gauntlet] {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

//! Terminal driver for the draughts engine.
//!
//! Renders the board as text and turns typed square pairs into the
//! engine's select/move commands; the computer side plays through
//! `SearchAi`. All rule knowledge lives in the library; this binary only
//! relays intents and prints state.

use std::io::{self, BufRead, Write};

use rust_draughts::ai::SearchAi;
use rust_draughts::config::AppConfig;
use rust_draughts::engine::{Game, GameStatus, MoveOutcome, Square};

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_draughts=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    let ai = SearchAi::new(config.ai_color, config.ai_difficulty);
    let mut game = Game::new();
    game.ai_difficulty = Some(config.ai_difficulty);

    tracing::info!(
        "rust-draughts v{}: computer plays {} at {}",
        env!("CARGO_PKG_VERSION"),
        config.ai_color,
        config.ai_difficulty
    );

    println!("{}", game.board());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_game_over() {
        if game.side_to_move() == ai.color() {
            let successor = ai.play(game.board());
            game.adopt_turn(successor);
            println!("computer ({}) has moved:", ai.color());
            println!("{}", game.board());
            continue;
        }

        if human_turn(&mut game, &mut lines).is_none() {
            return; // stdin closed
        }
        println!("{}", game.board());
    }

    if let GameStatus::Won(winner) = game.status() {
        println!("game over: {winner} wins");
    }
}

/// Play one full human turn, including any capture chain. Returns `None`
/// when stdin is exhausted.
fn human_turn(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<()> {
    loop {
        prompt(&format!("{} to move (from to): ", game.side_to_move()));
        let line = lines.next()?.ok()?;
        let mut parts = line.split_whitespace();
        let (Some(from), Some(to)) = (parts.next(), parts.next()) else {
            println!("enter two squares, e.g. `b3 c4`");
            continue;
        };
        let (Some(from), Some(to)) = (Square::from_algebraic(from), Square::from_algebraic(to))
        else {
            println!("squares look like `b3`");
            continue;
        };

        if let Err(err) = game.select(from) {
            println!("{err}");
            continue;
        }
        match game.move_to(to) {
            Err(err) => {
                println!("{err}");
                continue;
            }
            Ok(MoveOutcome::TurnEnded) => return Some(()),
            Ok(MoveOutcome::ChainContinues) => return continue_chain(game, lines),
        }
    }
}

/// The selected piece has landed on another capture; keep jumping until
/// the turn closes.
fn continue_chain(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<()> {
    loop {
        println!("{}", game.board());
        let options: Vec<String> = game
            .active_moves()
            .iter()
            .map(|sq| sq.to_string())
            .collect();
        prompt(&format!("continue the jump ({}): ", options.join(" ")));

        let line = lines.next()?.ok()?;
        let Some(dest) = Square::from_algebraic(line.trim()) else {
            println!("squares look like `b3`");
            continue;
        };
        match game.move_to(dest) {
            Err(err) => println!("{err}"),
            Ok(MoveOutcome::ChainContinues) => {}
            Ok(MoveOutcome::TurnEnded) => return Some(()),
        }
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

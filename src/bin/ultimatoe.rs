//! Two-player Ultimate Tic-Tac-Toe in the terminal
//!
//! The binary is the presentation layer: it chooses the first player (coin
//! toss unless `--first` is given), reads moves from stdin, and re-renders
//! after every accepted move. All rules live in the engine; a rejected
//! move prints the engine's error and changes nothing.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use ultimatoe::render::{format_global, format_grid, status_line};
use ultimatoe::{GameEngine, GameOutcome, Mark, Phase, PlayerNames};

#[derive(Parser)]
#[command(name = "ultimatoe")]
#[command(version, about = "Two-player Ultimate Tic-Tac-Toe in the terminal", long_about = None)]
struct Cli {
    /// Starting player (x or o); skips the coin toss
    #[arg(long, value_parser = parse_mark)]
    first: Option<Mark>,

    /// Seed for the coin toss
    #[arg(long)]
    seed: Option<u64>,

    /// Display name for player X
    #[arg(long, default_value = "Player X")]
    x_name: String,

    /// Display name for player O
    #[arg(long, default_value = "Player O")]
    o_name: String,
}

fn parse_mark(s: &str) -> std::result::Result<Mark, String> {
    match s {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        other => Err(format!("invalid mark '{other}' (expected 'x' or 'o')")),
    }
}

/// Flip a coin for the first player
fn coin_toss(seed: Option<u64>) -> Mark {
    let heads = match seed {
        Some(seed) => StdRng::seed_from_u64(seed).random_bool(0.5),
        None => rand::rng().random_bool(0.5),
    };
    if heads { Mark::X } else { Mark::O }
}

/// Parse a "board cell" pair of 1-based indices.
///
/// Values above 9 are passed through to the engine so range rejection
/// comes from one place.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let board: usize = parts.next()?.parse().ok()?;
    let cell: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((board.checked_sub(1)?, cell.checked_sub(1)?))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let names = PlayerNames::new(cli.x_name, cli.o_name);

    let mut engine = GameEngine::new();
    let starting_player = match cli.first {
        Some(mark) => mark,
        None => {
            let mark = coin_toss(cli.seed);
            println!("Coin toss: {} goes first.", names.name(mark));
            mark
        }
    };
    engine.initialize(starting_player);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = match engine.state() {
            Some(state) => state,
            None => break,
        };
        println!("\n{}", format_grid(state));
        println!("{}", status_line(state, &names));

        if state.phase() == Phase::Finished {
            println!("\nFinal boards:\n{}", format_global(state));
            if state.result() == Some(GameOutcome::Draw) {
                println!("Every board is decided with no global line.");
            }
            break;
        }

        print!("board cell (1-9 1-9), or q to quit: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read from stdin")?,
            None => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "q" || trimmed == "quit" {
            break;
        }

        let Some((board, cell)) = parse_move(trimmed) else {
            println!("Enter two numbers, e.g. '5 5' for the center cell of the center board.");
            continue;
        };

        if let Err(err) = engine.apply_move(board, cell) {
            println!("Rejected: {err}");
        }
    }

    Ok(())
}

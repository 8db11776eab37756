//! Strictly Minimax - command-line front end
//!
//! Ask the engine for a move, watch it play itself, or play against it.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use strictly_minimax::{
    Action, Board, Game, GameError, GameStatus, PlayConfig, Player, Position, minimax, minimax_with_stats,
    player, status,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Best { board, json } => run_best(board, json),
        Command::Selfplay { board } => run_selfplay(board.unwrap_or_default()),
        Command::Play { human, hints } => {
            let human = human.unwrap_or(*config.human());
            let show_hints = hints || *config.show_hints();
            run_play(config.with_human(human).with_hints(show_hints))
        }
    }
}

/// Machine-readable answer for `best --json`.
#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    status: GameStatus,
    to_move: Option<Player>,
    action: Option<Action>,
    position: Option<Position>,
    value: i32,
    nodes: u64,
}

/// Print the optimal move for a board
#[instrument(skip(board), fields(board = %board))]
fn run_best(board: Board, json: bool) -> Result<()> {
    let (action, stats) = minimax_with_stats(&board);
    info!(?action, value = stats.value, nodes = stats.nodes, "Best move computed");

    if json {
        let report = BestMoveReport {
            board: board.to_string(),
            status: status(&board),
            to_move: action.map(|_| player(&board)),
            action,
            position: action.and_then(Position::from_action),
            value: stats.value,
            nodes: stats.nodes,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.pretty());
    match action {
        Some(action) => println!(
            "{} plays {} {} (value {}, {} boards searched)",
            player(&board),
            describe(action),
            action,
            stats.value,
            stats.nodes
        ),
        None => println!("Game over: {}", status(&board)),
    }
    Ok(())
}

/// Play both sides optimally from `board`
#[instrument(skip(board), fields(board = %board))]
fn run_selfplay(board: Board) -> Result<()> {
    let game = Game::self_play(board);
    for (ply, board) in game.boards().enumerate() {
        println!("Move {}:\n{}\n", ply, board.pretty());
    }
    println!("Result: {}", game.status());
    Ok(())
}

/// Human against the engine over stdin/stdout
#[instrument(skip(config), fields(human = %config.human()))]
fn run_play(config: PlayConfig) -> Result<()> {
    let human = *config.human();
    let mut game = Game::new();
    let mut lines = io::stdin().lock().lines();

    println!(
        "You are {}. Enter a square (1-9) or a name like 'center'; 'undo' takes back a move, 'quit' exits.",
        human
    );

    while let Some(to_move) = game.to_move() {
        if to_move != human {
            if let Some(action) = game.play_best()? {
                println!("\nEngine plays {}", describe(action));
            }
            continue;
        }

        println!("\n{}\n", game.board().pretty());
        if *config.show_hints()
            && let Some(hint) = minimax(game.board())
        {
            println!("Hint: {}", describe(hint));
        }
        print!("{} to move> ", human);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim() {
            "quit" | "q" => return Ok(()),
            "undo" => {
                // Back to the last position where it was our move.
                if game.history().len() < 2 {
                    println!("Nothing to undo");
                } else {
                    game.undo();
                    game.undo();
                }
            }
            input => {
                let outcome = Position::parse(input)
                    .map_err(GameError::from)
                    .and_then(|pos| game.play(pos.to_action()));
                if let Err(e) = outcome {
                    println!("{}", e);
                }
            }
        }
    }

    println!("\n{}\n\n{}", game.board().pretty(), game.status());
    Ok(())
}

fn describe(action: Action) -> String {
    match Position::from_action(action) {
        Some(pos) => format!("{} ({})", pos, pos.number()),
        None => action.to_string(),
    }
}

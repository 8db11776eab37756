//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, Player};

/// Strictly Minimax - optimal tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax engine for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board
    Best {
        /// Board in row notation, e.g. "XX./O../..."
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play both sides optimally and print every board
    Selfplay {
        /// Starting board (empty if omitted)
        board: Option<Board>,
    },

    /// Play against the engine on the terminal
    Play {
        /// Mark to play as (overrides config)
        #[arg(long = "as")]
        human: Option<Player>,

        /// Show the engine's suggestion before each of your moves
        #[arg(long)]
        hints: bool,
    },
}

//! Command-line interface for strictly_boxes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Boxes - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_boxes")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to strictly_boxes.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of cell indices (0-8) and print the result
    Replay {
        /// Cell indices in play order; invalid ones are ignored
        #[arg(allow_negative_numbers = true)]
        moves: Vec<i64>,

        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

//! Strictly Boxes - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_boxes::replay::{self, ReplayFormat};
use strictly_boxes::{Config, DEFAULT_CONFIG_PATH, logging, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (path, required) = match cli.config {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    let config = Config::load(&path, required)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(&config).with_context(|| {
                format!("Failed to create log file {}", config.log().file())
            })?;
            tui::run(&config)
        }
        Command::Replay { moves, json } => {
            logging::init_stderr(&config);
            run_replay(moves, json)
        }
    }
}

/// Plays the given moves on a fresh game and prints the outcome.
fn run_replay(moves: Vec<i64>, json: bool) -> Result<()> {
    let format = if json {
        ReplayFormat::Json
    } else {
        ReplayFormat::Text
    };
    let out = replay::replay(moves, format).context("Failed to serialize snapshot")?;
    println!("{}", out);
    Ok(())
}

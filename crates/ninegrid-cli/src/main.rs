//! Console shell for the Ninegrid Sudoku tracker.
//!
//! Reads the full board configuration from the command line (one
//! `col,row;value,fixed` entry per cell) and drives an interactive menu over
//! stdin/stdout. All game logic lives in `ninegrid-game`; this binary only
//! parses, prompts, and renders.

use std::{io, process::ExitCode};

use clap::Parser;

mod menu;
mod render;
mod setup;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "ninegrid", about, version)]
struct Args {
    /// Cell configuration entries, one per cell, in the form
    /// `col,row;value,fixed` (coordinates 0-8, value 1-9, fixed
    /// `true`/`false`). All 81 cells must be provided before a game can
    /// start.
    #[arg(value_name = "COL,ROW;VALUE,FIXED")]
    positions: Vec<String>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let positions = match setup::parse_entries(&args.positions) {
        Ok(positions) => positions,
        Err(err) => {
            eprintln!("invalid position argument: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("parsed {} position entries", positions.len());

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(err) = menu::Session::new(&positions, stdin, stdout).run() {
        eprintln!("terminal I/O failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

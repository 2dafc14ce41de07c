//! Board model and validation engine for the Ninegrid Sudoku tracker.
//!
//! This crate owns the game state: a 9×9 [`Board`] of [`Cell`]s built from a
//! complete setup, mutation of non-fixed cells, and the derived
//! [`GameStatus`]/error views the console shell reports to the player.
//!
//! Edits are deliberately unconstrained: placing a digit that violates the
//! Sudoku rules always succeeds on a non-fixed cell, and violations are only
//! surfaced afterwards through [`Board::has_errors`]. The only edits that are
//! rejected are attempts to touch a fixed cell.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use ninegrid_core::{Digit, Position};
//! use ninegrid_game::{Board, CellSetup, GameStatus};
//!
//! // A setup must cover all 81 positions; here every cell is editable.
//! let setup: HashMap<_, _> = Position::ALL
//!     .into_iter()
//!     .map(|pos| (pos, CellSetup::new(Digit::D1, false)))
//!     .collect();
//!
//! let mut board = Board::from_setup(&setup)?;
//! assert_eq!(board.status(), GameStatus::NotStarted);
//!
//! board.change_value(Position::new(0, 0), Digit::D4)?;
//! assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D4));
//! assert_eq!(board.status(), GameStatus::Incomplete);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    board::{Board, CellSetup, SetupError},
    cell::{Cell, EditError},
    status::GameStatus,
};

mod board;
mod cell;
mod status;

//! The 9×9 board: construction, mutation, and validation.

use std::collections::HashMap;

use ninegrid_core::{Digit, DigitSet, House, Position};

use crate::{Cell, EditError, GameStatus};

/// One setup entry: the configuration for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSetup {
    /// The digit the puzzle designer intends for this position.
    pub expected: Digit,
    /// Whether the position is pre-filled and locked.
    pub fixed: bool,
}

impl CellSetup {
    /// Creates a setup entry.
    #[must_use]
    pub const fn new(expected: Digit, fixed: bool) -> Self {
        Self { expected, fixed }
    }
}

/// Error returned when a board cannot be built from a setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// A position has no setup entry. The setup must cover all 81 positions;
    /// partial configurations are rejected, never defaulted.
    #[display("missing configuration for position {position}")]
    MissingPosition {
        /// The first position (in row-major order) without an entry.
        position: Position,
    },
}

/// A 9×9 Sudoku board owning all 81 [`Cell`]s.
///
/// The board is built once per game session from a complete setup and
/// mutated in place by player edits. Status and error views are recomputed
/// from scratch on every query; at 81 cells there is nothing worth caching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 81],
}

impl Board {
    /// Builds a board from a complete position → [`CellSetup`] mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MissingPosition`] naming the first uncovered
    /// position if the setup does not contain all 81 entries. No board is
    /// produced in that case.
    pub fn from_setup(setup: &HashMap<Position, CellSetup>) -> Result<Self, SetupError> {
        let mut cells = [Cell::new(Digit::D1, false); 81];
        for pos in Position::ALL {
            let entry = setup
                .get(&pos)
                .ok_or(SetupError::MissingPosition { position: pos })?;
            cells[pos.index()] = Cell::new(entry.expected, entry.fixed);
        }
        Ok(Self { cells })
    }

    fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Places `digit` at `pos`.
    ///
    /// The placement is not checked against the Sudoku rules: an illegal
    /// digit is stored as-is and only reported later by
    /// [`Board::has_errors`]. Edits are diagnostic-checked, never blocked.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FixedCell`] if the cell at `pos` is fixed; the
    /// board is unchanged in that case.
    pub fn change_value(&mut self, pos: Position, digit: Digit) -> Result<(), EditError> {
        self.cells[pos.index()].set(digit)
    }

    /// Removes the player-entered digit at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FixedCell`] if the cell at `pos` is fixed.
    pub fn clear_value(&mut self, pos: Position) -> Result<(), EditError> {
        self.cells[pos.index()].clear()
    }

    /// Returns the digit currently shown at `pos`, if any.
    ///
    /// This is the read surface the renderer uses; it does not reveal
    /// whether the cell is fixed.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).value()
    }

    /// Computes the fill-state of the board by scanning all 81 cells.
    ///
    /// The not-started check runs first: a board whose non-fixed cells are
    /// all empty is [`GameStatus::NotStarted`] even when the fixed cells
    /// alone fill it completely.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self
            .cells
            .iter()
            .all(|cell| cell.is_fixed() || !cell.is_filled())
        {
            GameStatus::NotStarted
        } else if self.cells.iter().any(|cell| !cell.is_filled()) {
            GameStatus::Incomplete
        } else {
            GameStatus::Complete
        }
    }

    /// Returns `true` if any house contains two filled cells with the same
    /// digit.
    ///
    /// Empty cells impose no constraint, and fixed cells participate in the
    /// scan exactly like player-entered ones: a setup that pre-places two
    /// equal digits in a row is a reportable error state, not a suppressed
    /// one. A board that has not been started reports no errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        if self.status().is_not_started() {
            return false;
        }
        House::ALL
            .iter()
            .any(|house| self.house_has_duplicate(*house))
    }

    fn house_has_duplicate(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            if let Some(digit) = self.value(pos)
                && !seen.insert(digit)
            {
                return true;
            }
        }
        false
    }

    /// Returns `true` if all 81 cells are filled and no house contains a
    /// duplicate.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status().is_complete() && !self.has_errors()
    }

    /// Clears every non-fixed cell, returning the board to its initial
    /// state. Fixed cells are untouched. Always succeeds.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_fixed() {
                // Only fixed cells can reject a clear, and those are skipped.
                let _ = cell.clear();
            }
        }
    }
}

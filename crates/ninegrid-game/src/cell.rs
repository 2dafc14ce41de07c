//! A single grid position.

use ninegrid_core::Digit;

/// Error returned when an edit targets a fixed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EditError {
    /// The cell was pre-filled by the puzzle and cannot be modified.
    #[display("cell holds a fixed value and cannot be changed")]
    FixedCell,
}

/// One of the 81 board positions.
///
/// A cell stores the designer's intended digit (`expected`), whether the
/// puzzle pre-filled it (`fixed`), and the digit currently shown (`actual`).
/// Fixed cells are created already holding their expected digit and reject
/// every later edit, so `fixed` implies `actual == Some(expected)` for the
/// cell's whole lifetime.
///
/// The expected digit of a non-fixed cell is stored but never consulted by
/// validation; duplicate detection within houses is the only rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    expected: Digit,
    fixed: bool,
    actual: Option<Digit>,
}

impl Cell {
    /// Creates a cell from one setup entry.
    ///
    /// Fixed cells start filled with their expected digit; editable cells
    /// start empty.
    #[must_use]
    pub const fn new(expected: Digit, fixed: bool) -> Self {
        Self {
            expected,
            fixed,
            actual: if fixed { Some(expected) } else { None },
        }
    }

    /// Sets the displayed digit.
    ///
    /// No Sudoku legality check happens here; rule violations are reported
    /// later by the board's error scan.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FixedCell`] if the cell is fixed. The cell is
    /// left unchanged in that case.
    pub fn set(&mut self, digit: Digit) -> Result<(), EditError> {
        if self.fixed {
            return Err(EditError::FixedCell);
        }
        self.actual = Some(digit);
        Ok(())
    }

    /// Clears the displayed digit.
    ///
    /// Clearing an already empty cell succeeds and has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::FixedCell`] if the cell is fixed.
    pub fn clear(&mut self) -> Result<(), EditError> {
        if self.fixed {
            return Err(EditError::FixedCell);
        }
        self.actual = None;
        Ok(())
    }

    /// Returns the digit currently shown, if any.
    #[must_use]
    pub const fn value(self) -> Option<Digit> {
        self.actual
    }

    /// Returns `true` if the cell currently shows a digit.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        self.actual.is_some()
    }

    /// Returns `true` if the cell was pre-filled by the puzzle.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        self.fixed
    }

    /// Returns the digit the puzzle designer intended for this cell.
    #[must_use]
    pub const fn expected(self) -> Digit {
        self.expected
    }
}

//! Validation groups: rows, columns, and 3×3 boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Houses are the groups whose filled cells must hold pairwise distinct
/// digits. A 9×9 board has 27 of them: 9 rows, 9 columns, and 9 boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    pub fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns an iterator over the 9 positions contained in this house.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::{House, Position};
    ///
    /// let row: Vec<_> = House::Row { y: 2 }.positions().collect();
    /// assert_eq!(row[0], Position::new(0, 2));
    /// assert_eq!(row[8], Position::new(8, 2));
    /// ```
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_each_kind() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { y: 0 });
        assert_eq!(House::ALL[9], House::Column { x: 0 });
        assert_eq!(House::ALL[18], House::Box { index: 0 });
        assert_eq!(House::ALL[26], House::Box { index: 8 });
    }

    #[test]
    fn test_box_positions() {
        let positions: Vec<_> = House::Box { index: 4 }.positions().collect();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
        assert!(positions.iter().all(|pos| pos.box_index() == 4));
    }

    #[test]
    fn test_every_position_is_in_three_houses() {
        for pos in Position::ALL {
            let count = House::ALL
                .iter()
                .filter(|house| house.positions().any(|p| p == pos))
                .count();
            assert_eq!(count, 3, "{pos} should be in one row, column, and box");
        }
    }
}

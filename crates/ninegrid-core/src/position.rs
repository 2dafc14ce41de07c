//! Board position coordinates.

use std::fmt::{self, Display};

/// A board position with `x` (column) and `y` (row) in the range 0-8.
///
/// Positions index into 81-element board storage in row-major order and
/// display as `[x,y]`, matching the coordinate convention used by the console
/// shell (column first, then row).
///
/// # Examples
///
/// ```
/// use ninegrid_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.index(), 7 * 9 + 2);
/// assert_eq!(pos.to_string(), "[2,7]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position coordinates must be 0-8");
        Self { x, y }
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the position of cell `i` (0-8) within box `box_index` (0-8).
    ///
    /// Cells within a box are numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9, "box index and cell index must be 0-8");
        Self::new((box_index % 3) * 3 + i % 3, (box_index / 3) * 3 + i / 3)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

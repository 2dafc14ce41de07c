//! Core vocabulary types for the Ninegrid Sudoku tracker.
//!
//! This crate provides the small, strongly typed building blocks shared by the
//! board model and the console shell:
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: board position (x, y) coordinates in the range 0-8
//! - [`house`]: the validation groups (rows, columns, and 3×3 boxes)
//! - [`digit_set`]: a compact set of digits, used for duplicate detection
//!
//! None of these types carry game state; they only give names and invariants
//! to values that would otherwise be bare integers.
//!
//! # Examples
//!
//! ```
//! use ninegrid_core::{Digit, House, Position};
//!
//! let pos = Position::new(4, 4);
//! assert_eq!(pos.index(), 40); // row-major: 4 * 9 + 4
//!
//! // Every position belongs to exactly three houses.
//! let containing = House::ALL
//!     .iter()
//!     .filter(|house| house.positions().any(|p| p == pos))
//!     .count();
//! assert_eq!(containing, 3);
//!
//! let digit = Digit::from_value(5);
//! assert_eq!(digit.value(), 5);
//! ```

pub mod digit;
pub mod digit_set;
pub mod house;
pub mod position;

pub use self::{digit::Digit, digit_set::DigitSet, house::House, position::Position};

//! ASCII rendering of the board.

use std::fmt::Write as _;

use ninegrid_core::Position;
use ninegrid_game::Board;

/// ANSI escape for green status feedback.
pub const GREEN: &str = "\x1b[32m";
/// ANSI escape for red status feedback.
pub const RED: &str = "\x1b[31m";
/// ANSI escape resetting the terminal color.
pub const RESET: &str = "\x1b[0m";

const SEPARATOR: &str = "+-------+-------+-------+";

/// Renders the board as an ASCII grid with 3×3 box separators.
///
/// Empty cells render as spaces.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y % 3 == 0 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        for x in 0..9 {
            if x % 3 == 0 {
                out.push_str("| ");
            }
            match board.value(Position::new(x, y)) {
                Some(digit) => {
                    let _ = write!(out, "{digit} ");
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ninegrid_core::Digit;
    use ninegrid_game::CellSetup;

    use super::*;

    fn board_with_fixed_top_left() -> Board {
        let setup: HashMap<_, _> = Position::ALL
            .into_iter()
            .map(|pos| {
                let fixed = pos == Position::new(0, 0);
                (pos, CellSetup::new(Digit::D5, fixed))
            })
            .collect();
        Board::from_setup(&setup).unwrap()
    }

    #[test]
    fn test_render_shape() {
        let rendered = render(&board_with_fixed_top_left());
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 13); // 9 rows + 4 separators
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[4], SEPARATOR);
        assert_eq!(lines[12], SEPARATOR);
        assert!(lines.iter().all(|line| line.len() == SEPARATOR.len()));
    }

    #[test]
    fn test_render_values_and_blanks() {
        let mut board = board_with_fixed_top_left();
        board.change_value(Position::new(4, 0), Digit::D9).unwrap();

        let rendered = render(&board);
        let lines: Vec<_> = rendered.lines().collect();

        // Row 0: fixed 5 in the first cell, player 9 in the middle, blanks
        // elsewhere.
        assert_eq!(lines[1], "| 5     |   9   |       |");
    }
}

//! Interactive menu loop.

use std::{
    collections::HashMap,
    io::{self, BufRead, Write},
};

use ninegrid_core::{Digit, Position};
use ninegrid_game::{Board, CellSetup, EditError};

use crate::render::{self, GREEN, RED, RESET};

/// One interactive game session.
///
/// The session owns the only live [`Board`] (behind an `Option`, since the
/// player starts and abandons games through the menu) and loops over stdin
/// commands until the player quits or input ends.
pub struct Session<'a, R, W> {
    positions: &'a HashMap<Position, CellSetup>,
    input: R,
    output: W,
    board: Option<Board>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session over the given configuration and I/O streams.
    pub fn new(positions: &'a HashMap<Position, CellSetup>, input: R, output: W) -> Self {
        Self {
            positions,
            input,
            output,
            board: None,
        }
    }

    /// Runs the menu loop until the player quits or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying streams. End of input is
    /// not an error; the loop simply ends.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            let Some(option) = self.read_number(1, 8)? else {
                break;
            };
            match option {
                1 => self.start_game()?,
                2 => self.place_number()?,
                3 => self.remove_number()?,
                4 => self.show_board()?,
                5 => self.show_status()?,
                6 => self.clear_board()?,
                7 => self.finish_game()?,
                8 => {
                    writeln!(self.output, "Leaving the game. See you next time!")?;
                    break;
                }
                _ => unreachable!("read_number bounds the option to 1-8"),
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Select one of the following options:")?;
        writeln!(self.output, "1 - Start a new game")?;
        writeln!(self.output, "2 - Place a number")?;
        writeln!(self.output, "3 - Remove a number")?;
        writeln!(self.output, "4 - Show the current game")?;
        writeln!(self.output, "5 - Check the game status")?;
        writeln!(self.output, "6 - Clear the game")?;
        writeln!(self.output, "7 - Finish the game")?;
        writeln!(self.output, "8 - Quit")
    }

    /// Reads the next line, trimmed. `None` means end of input.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Re-prompts until a number in `min..=max` is entered.
    fn read_number(&mut self, min: u8, max: u8) -> io::Result<Option<u8>> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match line.parse::<u8>() {
                Ok(number) if (min..=max).contains(&number) => return Ok(Some(number)),
                Ok(_) => writeln!(self.output, "Enter a number between {min} and {max}:")?,
                Err(_) => writeln!(self.output, "Invalid input. Please enter a number.")?,
            }
        }
    }

    fn report_not_started(&mut self) -> io::Result<()> {
        writeln!(self.output, "The game has not been started yet.")
    }

    fn start_game(&mut self) -> io::Result<()> {
        if self.board.is_some() {
            return writeln!(self.output, "The game has already been started.");
        }
        match Board::from_setup(self.positions) {
            Ok(board) => {
                self.board = Some(board);
                log::info!("game started");
                writeln!(self.output, "The game is ready to begin.")
            }
            Err(err) => writeln!(
                self.output,
                "{err}. Make sure all 81 positions are provided."
            ),
        }
    }

    fn place_number(&mut self) -> io::Result<()> {
        if self.board.is_none() {
            return self.report_not_started();
        }
        writeln!(self.output, "Enter the column for the new number:")?;
        let Some(col) = self.read_number(0, 8)? else {
            return Ok(());
        };
        writeln!(self.output, "Enter the row for the new number:")?;
        let Some(row) = self.read_number(0, 8)? else {
            return Ok(());
        };
        let pos = Position::new(col, row);
        writeln!(self.output, "Enter the number to place at {pos}:")?;
        let Some(value) = self.read_number(1, 9)? else {
            return Ok(());
        };
        let digit = Digit::from_value(value);

        let Some(board) = self.board.as_mut() else {
            return Ok(());
        };
        match board.change_value(pos, digit) {
            Ok(()) => {
                log::debug!("placed {digit} at {pos}");
                writeln!(self.output, "Number {digit} placed at {pos}.")
            }
            Err(EditError::FixedCell) => writeln!(
                self.output,
                "Position {pos} holds a fixed value and cannot be changed."
            ),
        }
    }

    fn remove_number(&mut self) -> io::Result<()> {
        if self.board.is_none() {
            return self.report_not_started();
        }
        writeln!(self.output, "Enter the column to remove a number from:")?;
        let Some(col) = self.read_number(0, 8)? else {
            return Ok(());
        };
        writeln!(self.output, "Enter the row to remove a number from:")?;
        let Some(row) = self.read_number(0, 8)? else {
            return Ok(());
        };
        let pos = Position::new(col, row);

        let Some(board) = self.board.as_mut() else {
            return Ok(());
        };
        match board.clear_value(pos) {
            Ok(()) => {
                log::debug!("cleared {pos}");
                writeln!(self.output, "Number removed from {pos}.")
            }
            Err(EditError::FixedCell) => writeln!(
                self.output,
                "Position {pos} holds a fixed value and cannot be changed."
            ),
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        let Some(board) = &self.board else {
            return self.report_not_started();
        };
        let rendered = render::render(board);
        writeln!(self.output, "Your game looks like this:")?;
        write!(self.output, "{rendered}")
    }

    fn show_status(&mut self) -> io::Result<()> {
        let Some(board) = &self.board else {
            return self.report_not_started();
        };
        let status = board.status();
        let has_errors = board.has_errors();
        writeln!(self.output, "The game is currently {GREEN}{status}{RESET}.")?;
        if has_errors {
            writeln!(
                self.output,
                "{RED}The game contains errors. Review the board and fix them.{RESET}"
            )
        } else {
            writeln!(self.output, "{GREEN}The game contains no errors.{RESET}")
        }
    }

    fn clear_board(&mut self) -> io::Result<()> {
        if self.board.is_none() {
            return self.report_not_started();
        }
        writeln!(
            self.output,
            "Are you sure you want to clear the game and lose all progress? (yes/no)"
        )?;
        loop {
            let Some(answer) = self.next_line()? else {
                return Ok(());
            };
            if answer.eq_ignore_ascii_case("yes") {
                if let Some(board) = self.board.as_mut() {
                    board.reset();
                }
                log::info!("game cleared");
                return writeln!(self.output, "The game has been cleared.");
            }
            if answer.eq_ignore_ascii_case("no") {
                return writeln!(self.output, "Action cancelled. The game was not cleared.");
            }
            writeln!(self.output, "Enter 'yes' or 'no':")?;
        }
    }

    fn finish_game(&mut self) -> io::Result<()> {
        let Some(board) = &self.board else {
            return self.report_not_started();
        };
        if board.is_finished() {
            let rendered = render::render(board);
            log::info!("game finished");
            writeln!(
                self.output,
                "{GREEN}Congratulations! You completed the game.{RESET}"
            )?;
            write!(self.output, "{rendered}")?;
            self.board = None;
            Ok(())
        } else if board.has_errors() {
            writeln!(
                self.output,
                "{RED}Your game contains errors. Review the board and fix them.{RESET}"
            )
        } else {
            writeln!(
                self.output,
                "{RED}You still need to fill in at least one cell.{RESET}"
            )
        }
    }
}

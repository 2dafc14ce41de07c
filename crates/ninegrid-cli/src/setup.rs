//! Parsing of command-line cell configuration entries.

use std::collections::HashMap;

use ninegrid_core::{Digit, Position};
use ninegrid_game::CellSetup;

/// Error produced while parsing a `col,row;value,fixed` entry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupParseError {
    /// The entry does not have the `col,row;value,fixed` shape.
    #[display("malformed entry {entry:?}, expected \"col,row;value,fixed\"")]
    Malformed {
        /// The offending argument.
        entry: String,
    },
    /// A coordinate is not in the range 0-8.
    #[display("coordinate out of range in {entry:?}, expected 0-8")]
    CoordinateOutOfRange {
        /// The offending argument.
        entry: String,
    },
    /// The cell value is not in the range 1-9.
    #[display("cell value out of range in {entry:?}, expected 1-9")]
    ValueOutOfRange {
        /// The offending argument.
        entry: String,
    },
    /// The fixed flag is neither `true` nor `false`.
    #[display("invalid fixed flag in {entry:?}, expected \"true\" or \"false\"")]
    InvalidFixedFlag {
        /// The offending argument.
        entry: String,
    },
    /// Two entries configure the same position.
    #[display("position {position} is configured more than once")]
    DuplicatePosition {
        /// The position that appeared twice.
        position: Position,
    },
}

/// Parses all configuration entries into a position → setup mapping.
///
/// Completeness is not checked here; the board constructor reports missing
/// positions when a game is started.
///
/// # Errors
///
/// Returns the first [`SetupParseError`] encountered, in argument order.
pub fn parse_entries(
    entries: &[String],
) -> Result<HashMap<Position, CellSetup>, SetupParseError> {
    let mut positions = HashMap::with_capacity(entries.len());
    for entry in entries {
        let (position, cell_setup) = parse_entry(entry)?;
        if positions.insert(position, cell_setup).is_some() {
            return Err(SetupParseError::DuplicatePosition { position });
        }
    }
    Ok(positions)
}

fn parse_entry(entry: &str) -> Result<(Position, CellSetup), SetupParseError> {
    let malformed = || SetupParseError::Malformed {
        entry: entry.to_owned(),
    };

    let (coordinate, config) = entry.split_once(';').ok_or_else(malformed)?;
    let (x, y) = coordinate.split_once(',').ok_or_else(malformed)?;
    let (value, fixed) = config.split_once(',').ok_or_else(malformed)?;

    let x: u8 = x.trim().parse().map_err(|_| malformed())?;
    let y: u8 = y.trim().parse().map_err(|_| malformed())?;
    if x > 8 || y > 8 {
        return Err(SetupParseError::CoordinateOutOfRange {
            entry: entry.to_owned(),
        });
    }

    let value: u8 = value.trim().parse().map_err(|_| malformed())?;
    let expected = Digit::try_from(value).map_err(|_| SetupParseError::ValueOutOfRange {
        entry: entry.to_owned(),
    })?;

    let fixed = match fixed.trim() {
        "true" => true,
        "false" => false,
        _ => {
            return Err(SetupParseError::InvalidFixedFlag {
                entry: entry.to_owned(),
            });
        }
    };

    Ok((Position::new(x, y), CellSetup::new(expected, fixed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(s: &str) -> Vec<String> {
        vec![s.to_owned()]
    }

    #[test]
    fn test_parse_well_formed_entry() {
        let positions = parse_entries(&entry("0,0;5,true")).unwrap();
        assert_eq!(
            positions.get(&Position::new(0, 0)),
            Some(&CellSetup::new(Digit::D5, true))
        );

        let positions = parse_entries(&entry("8,3;9,false")).unwrap();
        assert_eq!(
            positions.get(&Position::new(8, 3)),
            Some(&CellSetup::new(Digit::D9, false))
        );
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let positions = parse_entries(&entry("1, 2; 3, true")).unwrap();
        assert_eq!(
            positions.get(&Position::new(1, 2)),
            Some(&CellSetup::new(Digit::D3, true))
        );
    }

    #[test]
    fn test_malformed_entries_are_rejected() {
        for bad in ["", "0,0", "0;5,true", "0,0;5", "a,0;5,true", "0,0;b,true"] {
            assert!(
                matches!(
                    parse_entries(&entry(bad)),
                    Err(SetupParseError::Malformed { .. })
                ),
                "expected {bad:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_out_of_range_coordinate() {
        assert!(matches!(
            parse_entries(&entry("9,0;5,true")),
            Err(SetupParseError::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            parse_entries(&entry("0,12;5,true")),
            Err(SetupParseError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_out_of_range_value() {
        assert!(matches!(
            parse_entries(&entry("0,0;0,true")),
            Err(SetupParseError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            parse_entries(&entry("0,0;10,true")),
            Err(SetupParseError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_fixed_flag() {
        assert!(matches!(
            parse_entries(&entry("0,0;5,yes")),
            Err(SetupParseError::InvalidFixedFlag { .. })
        ));
    }

    #[test]
    fn test_duplicate_position() {
        let entries = vec!["0,0;5,true".to_owned(), "0,0;6,false".to_owned()];
        assert_eq!(
            parse_entries(&entries),
            Err(SetupParseError::DuplicatePosition {
                position: Position::new(0, 0)
            })
        );
    }
}

//! Derived fill-state classification.

/// Fill-state of the board, derived on demand from its cells.
///
/// The status only describes how much of the board is filled; rule
/// violations are reported separately by [`Board::has_errors`].
///
/// [`Board::has_errors`]: crate::Board::has_errors
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum GameStatus {
    /// Every non-fixed cell is empty.
    #[display("not started")]
    NotStarted,
    /// Some player input exists, but at least one cell is still empty.
    #[display("incomplete")]
    Incomplete,
    /// Every cell, fixed or not, holds a digit.
    #[display("complete")]
    Complete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(GameStatus::NotStarted.to_string(), "not started");
        assert_eq!(GameStatus::Incomplete.to_string(), "incomplete");
        assert_eq!(GameStatus::Complete.to_string(), "complete");
    }

    #[test]
    fn test_variant_helpers() {
        assert!(GameStatus::NotStarted.is_not_started());
        assert!(GameStatus::Incomplete.is_incomplete());
        assert!(GameStatus::Complete.is_complete());
    }
}

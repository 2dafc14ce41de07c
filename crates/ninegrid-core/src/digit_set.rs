//! A compact set of Sudoku digits.

use crate::Digit;

/// A set of [`Digit`] values backed by a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively. The board's duplicate scan
/// uses this to remember which digits it has already seen in a house.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitSet};
///
/// let mut seen = DigitSet::EMPTY;
/// assert!(seen.insert(Digit::D5));
/// assert!(!seen.insert(Digit::D5)); // already present
/// assert!(seen.contains(Digit::D5));
/// assert_eq!(seen.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Inserts `digit`, returning `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let inserted = !self.contains(digit);
        self.bits |= Self::bit(digit);
        inserted
    }

    /// Removes `digit`, returning `true` if it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let removed = self.contains(digit);
        self.bits &= !Self::bit(digit);
        removed
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> {
        let set = *self;
        Digit::ALL
            .into_iter()
            .filter(move |digit| set.contains(*digit))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Digit::D1));
        assert!(set.insert(Digit::D9));
        assert!(!set.insert(Digit::D1));
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = DigitSet::from_iter([Digit::D3, Digit::D7]);
        assert!(set.remove(Digit::D3));
        assert!(!set.remove(Digit::D3));
        assert!(!set.contains(Digit::D3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
    }

    proptest! {
        #[test]
        fn prop_insert_then_contains(values in prop::collection::vec(1u8..=9, 0..9)) {
            let mut set = DigitSet::new();
            for value in &values {
                set.insert(Digit::from_value(*value));
            }
            for value in &values {
                prop_assert!(set.contains(Digit::from_value(*value)));
            }
            prop_assert!(set.len() <= values.len());
        }
    }
}

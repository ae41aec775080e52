//! Compact sets of lowercase ASCII letters
//!
//! A `LetterSet` is a 26-bit mask, one bit per letter `a`..=`z`.

use std::fmt;

/// A set of lowercase ASCII letters stored as a bitmask
///
/// Ordering compares the raw masks, so it is total but not alphabetical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Build a set from a sequence of letters
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter, returning `true` if it was not already present
    ///
    /// Bytes outside `a..=z` are ignored and return `false`.
    pub fn insert(&mut self, letter: u8) -> bool {
        if !letter.is_ascii_lowercase() {
            return false;
        }
        let had = self.contains(letter);
        self.0 |= Self::bit(letter);
        !had
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// `true` if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

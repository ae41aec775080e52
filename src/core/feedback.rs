//! Wordle feedback calculation and representation
//!
//! Feedback holds one mark per position:
//! - `Absent` (grey): letter not in the word, or all its occurrences already marked
//! - `Present` (yellow): letter in the word, wrong position
//! - `Correct` (green): letter in the correct position

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// The mark given to a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// The per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's exact rules for duplicate letters: a letter is
    /// marked at most as many times as it occurs in the target.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the target's letter pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) while the pool still holds the letter
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    ///
    /// // C(grey) R(grey) A(green) N(grey) E(green)
    /// assert_eq!(Feedback::calculate(&guess, &target), Feedback::from_str("--G-G").unwrap());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
        let mut pool = target.letter_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                marks[i] = LetterFeedback::Correct;
                pool[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == LetterFeedback::Correct {
                continue;
            }
            let remaining = &mut pool[usize::from(g - b'a')];
            if *remaining > 0 {
                marks[i] = LetterFeedback::Present;
                *remaining -= 1;
            }
        }

        Self(marks)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&mark| mark == LetterFeedback::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&mark| mark == LetterFeedback::Present)
            .count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Feedback;
    ///
    /// let p1 = Feedback::from_str("GY-GY").unwrap();
    /// let p2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for ergonomic callers; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
        let mut count = 0;

        for ch in s.chars() {
            let slot = marks.get_mut(count)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '.' | '⬜' => LetterFeedback::Absent,
                _ => return None,
            };
            count += 1;
        }

        (count == WORD_LENGTH).then_some(Self(marks))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            let ch = match mark {
                LetterFeedback::Correct => 'G',
                LetterFeedback::Present => 'Y',
                LetterFeedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

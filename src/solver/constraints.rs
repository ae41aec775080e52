//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintSet` starts empty and only ever grows as feedback is folded in.
//! Every mutation is validated first and applied atomically, so a rejected
//! update leaves the set exactly as it was.

use crate::core::{
    Feedback, GuessError, LetterFeedback, LetterSet, SolverError, WORD_LENGTH, Word, WordError,
};
use std::fmt;

/// Everything learned about the hidden word across all guesses so far
///
/// Invariants:
/// - a letter known at a position is also a required letter
/// - a letter excluded at a position is also a required letter
/// - no letter is both required and excluded
/// - a position with a known letter carries no position exclusions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    position_known: [Option<u8>; WORD_LENGTH],
    position_excluded: [LetterSet; WORD_LENGTH],
    required: LetterSet,
    excluded: LetterSet,
}

fn contradiction(detail: String) -> SolverError {
    SolverError::ContradictoryConstraints(detail)
}

/// Only `a..=z` can be stored in a `LetterSet`
fn check_letter(letter: u8) -> Result<(), SolverError> {
    if letter.is_ascii_lowercase() {
        Ok(())
    } else {
        Err(SolverError::InvalidGuess(GuessError::Malformed(
            WordError::InvalidCharacters,
        )))
    }
}

impl ConstraintSet {
    /// An empty set; every word satisfies it
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Letter confirmed at `position` (green), if any
    #[must_use]
    pub const fn position_known(&self, position: usize) -> Option<u8> {
        self.position_known[position]
    }

    /// Letters known not to be at `position` but present elsewhere
    #[must_use]
    pub const fn position_excluded(&self, position: usize) -> LetterSet {
        self.position_excluded[position]
    }

    /// Letters confirmed to be in the word
    #[must_use]
    pub const fn required_letters(&self) -> LetterSet {
        self.required
    }

    /// Letters confirmed absent from the whole word
    #[must_use]
    pub const fn excluded_letters(&self) -> LetterSet {
        self.excluded
    }

    /// Record that `letter` sits at `position` (green)
    ///
    /// Any position exclusions at `position` become redundant and are dropped.
    ///
    /// # Errors
    /// `InvalidGuess` if `letter` is not in `a..=z`. `ContradictoryConstraints`
    /// if the letter is excluded, another letter is already known there, or the
    /// letter was ruled out at this position.
    ///
    /// # Panics
    /// If `position >= WORD_LENGTH`.
    pub fn require_at(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        check_letter(letter)?;
        let ch = letter as char;
        if self.excluded.contains(letter) {
            return Err(contradiction(format!(
                "'{ch}' is required at position {} but excluded from the word",
                position + 1
            )));
        }
        match self.position_known[position] {
            Some(known) if known != letter => {
                return Err(contradiction(format!(
                    "position {} cannot be both '{}' and '{ch}'",
                    position + 1,
                    known as char
                )));
            }
            Some(_) => return Ok(()),
            None => {}
        }
        if self.position_excluded[position].contains(letter) {
            return Err(contradiction(format!(
                "'{ch}' was ruled out at position {}",
                position + 1
            )));
        }
        self.position_known[position] = Some(letter);
        self.position_excluded[position] = LetterSet::EMPTY;
        self.required.insert(letter);
        Ok(())
    }

    /// Record that `letter` is in the word but not at `position` (yellow)
    ///
    /// # Errors
    /// `InvalidGuess` if `letter` is not in `a..=z`. `ContradictoryConstraints`
    /// if the letter is excluded or known at `position`.
    ///
    /// # Panics
    /// If `position >= WORD_LENGTH`.
    pub fn exclude_at(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        check_letter(letter)?;
        let ch = letter as char;
        if self.excluded.contains(letter) {
            return Err(contradiction(format!(
                "'{ch}' is required but excluded from the word"
            )));
        }
        self.ban_at(position, letter)?;
        self.required.insert(letter);
        Ok(())
    }

    /// Record that `letter` does not occur anywhere in the word (dud)
    ///
    /// # Errors
    /// `InvalidGuess` if `letter` is not in `a..=z`. `ContradictoryConstraints`
    /// if the letter is already required.
    pub fn exclude_letter(&mut self, letter: u8) -> Result<(), SolverError> {
        check_letter(letter)?;
        if self.required.contains(letter) {
            return Err(contradiction(format!(
                "'{}' is both required and excluded",
                letter as char
            )));
        }
        self.excluded.insert(letter);
        Ok(())
    }

    /// Ban `letter` from `position` without changing whether it is required
    fn ban_at(&mut self, position: usize, letter: u8) -> Result<(), SolverError> {
        match self.position_known[position] {
            Some(known) if known == letter => Err(contradiction(format!(
                "'{}' is known at position {} and ruled out there",
                letter as char,
                position + 1
            ))),
            Some(_) => Ok(()),
            None => {
                self.position_excluded[position].insert(letter);
                Ok(())
            }
        }
    }

    /// Fold the feedback for one guess into this set
    ///
    /// Greens and yellows are applied first so that a grey mark on a repeated
    /// letter that is otherwise present only bans that position instead of the
    /// whole letter. Grey on a letter required by an earlier round is treated
    /// the same way.
    ///
    /// # Errors
    /// `ContradictoryConstraints` if the feedback conflicts with what is
    /// already known; the set is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Feedback, Word};
    /// use wordle_sieve::solver::ConstraintSet;
    ///
    /// let guess = Word::new("hello").unwrap();
    /// let target = Word::new("world").unwrap();
    ///
    /// let mut constraints = ConstraintSet::new();
    /// constraints.apply(&guess, &Feedback::calculate(&guess, &target)).unwrap();
    ///
    /// assert_eq!(constraints.position_known(3), Some(b'l'));
    /// assert!(constraints.position_excluded(2).contains(b'l'));
    /// assert!(!constraints.excluded_letters().contains(b'l'));
    /// ```
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), SolverError> {
        let mut next = self.clone();
        let marks = feedback.marks();

        for (position, (&letter, mark)) in guess.chars().iter().zip(marks).enumerate() {
            match mark {
                LetterFeedback::Correct => next.require_at(position, letter)?,
                LetterFeedback::Present => next.exclude_at(position, letter)?,
                LetterFeedback::Absent => {}
            }
        }

        for (position, (&letter, mark)) in guess.chars().iter().zip(marks).enumerate() {
            if *mark != LetterFeedback::Absent {
                continue;
            }
            if next.required.contains(letter) {
                next.ban_at(position, letter)?;
            } else {
                next.exclude_letter(letter)?;
            }
        }

        *self = next;
        Ok(())
    }

    /// Union another set's knowledge into this one
    ///
    /// # Errors
    /// `ContradictoryConstraints` if the two sets disagree; the set is left unchanged.
    pub fn merge(&mut self, other: &Self) -> Result<(), SolverError> {
        let mut next = self.clone();

        for position in 0..WORD_LENGTH {
            if let Some(letter) = other.position_known[position] {
                next.require_at(position, letter)?;
            }
        }
        for position in 0..WORD_LENGTH {
            for letter in other.position_excluded[position].iter() {
                next.exclude_at(position, letter)?;
            }
        }
        for letter in other.required.iter() {
            if next.excluded.contains(letter) {
                return Err(contradiction(format!(
                    "'{}' is both required and excluded",
                    letter as char
                )));
            }
            next.required.insert(letter);
        }
        for letter in other.excluded.iter() {
            next.exclude_letter(letter)?;
        }

        *self = next;
        Ok(())
    }

    /// `true` iff `word` is consistent with everything in this set
    #[must_use]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(position, &ch)| {
            self.position_known[position].is_none_or(|known| known == ch)
                && !self.position_excluded[position].contains(ch)
        });

        // A required letter is only banned from its recorded positions.
        let banned = self.excluded.difference(self.required);

        positions_ok
            && self.required.is_subset(word.letters())
            && word.letters().intersection(banned).is_empty()
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .position_known
            .iter()
            .map(|known| known.map_or('?', char::from))
            .collect();
        write!(f, "known: {pattern}")?;
        for (position, banned) in self.position_excluded.iter().enumerate() {
            if !banned.is_empty() {
                write!(f, " !{}:{banned}", position + 1)?;
            }
        }
        write!(
            f,
            " required: [{}] excluded: [{}]",
            self.required, self.excluded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn learned(guess: &str, target: &str) -> ConstraintSet {
        let guess = word(guess);
        let mut constraints = ConstraintSet::new();
        constraints
            .apply(&guess, &Feedback::calculate(&guess, &word(target)))
            .unwrap();
        constraints
    }

    #[test]
    fn empty_set_accepts_everything() {
        let constraints = ConstraintSet::new();
        assert!(constraints.is_empty());
        for text in ["crane", "zzzzz", "fuzzy"] {
            assert!(constraints.is_satisfied_by(&word(text)));
        }
    }

    #[test]
    fn apply_records_each_mark() {
        // CRANE vs CHASE: C green, R grey, A green, N grey, E green
        let constraints = learned("crane", "chase");

        assert_eq!(constraints.position_known(0), Some(b'c'));
        assert_eq!(constraints.position_known(2), Some(b'a'));
        assert_eq!(constraints.position_known(4), Some(b'e'));
        assert_eq!(constraints.required_letters(), LetterSet::from_letters(b"cae"));
        assert_eq!(constraints.excluded_letters(), LetterSet::from_letters(b"rn"));
    }

    #[test]
    fn yellow_requires_letter_and_bans_position() {
        // SLATE vs LEAST: S yellow, L yellow, A green, T yellow, E yellow
        let constraints = learned("slate", "least");

        assert!(constraints.position_excluded(0).contains(b's'));
        assert!(constraints.position_excluded(1).contains(b'l'));
        assert!(constraints.required_letters().contains(b't'));
        assert!(constraints.is_satisfied_by(&word("least")));
        assert!(!constraints.is_satisfied_by(&word("slate")));
    }

    #[test]
    fn repeated_grey_letter_stays_required() {
        // SASSY vs CHASE: only the S at position 3 is green.
        let constraints = learned("sassy", "chase");

        assert_eq!(constraints.position_known(3), Some(b's'));
        assert!(constraints.required_letters().contains(b's'));
        assert!(!constraints.excluded_letters().contains(b's'));
        assert!(constraints.position_excluded(0).contains(b's'));
        assert!(constraints.position_excluded(2).contains(b's'));
        assert!(constraints.is_satisfied_by(&word("chase")));
        assert!(!constraints.is_satisfied_by(&word("spasm")));
    }

    #[test]
    fn grey_on_previously_required_letter_only_bans_position() {
        let mut constraints = learned("sassy", "chase");
        let guess = word("essay");
        let fb = Feedback::calculate(&guess, &word("chase"));
        constraints.apply(&guess, &fb).unwrap();

        assert!(constraints.required_letters().contains(b's'));
        assert!(!constraints.excluded_letters().contains(b's'));
        assert!(constraints.is_satisfied_by(&word("chase")));
    }

    #[test]
    fn required_and_excluded_letter_is_rejected() {
        let mut constraints = ConstraintSet::new();
        constraints.exclude_at(0, b'q').unwrap();
        let before = constraints.clone();

        let err = constraints.exclude_letter(b'q').unwrap_err();
        assert!(matches!(err, SolverError::ContradictoryConstraints(_)));

        let mut dud = ConstraintSet::new();
        dud.exclude_letter(b'q').unwrap();
        assert!(constraints.merge(&dud).is_err());
        assert_eq!(constraints, before);
        assert!(dud.require_at(2, b'q').is_err());
    }

    #[test]
    fn conflicting_feedback_leaves_set_unchanged() {
        let mut constraints = learned("crane", "chase");
        let before = constraints.clone();

        // Claim R is green after it was reported grey.
        let guess = word("roast");
        let bogus = Feedback::from_str("G----").unwrap();
        assert!(constraints.apply(&guess, &bogus).is_err());
        assert_eq!(constraints, before);
    }

    #[test]
    fn two_letters_at_one_position_is_rejected() {
        let mut constraints = ConstraintSet::new();
        constraints.require_at(1, b'r').unwrap();
        assert!(constraints.require_at(1, b'r').is_ok());
        assert!(constraints.require_at(1, b'h').is_err());
        assert!(constraints.exclude_at(1, b'r').is_err());
    }

    #[test]
    fn letters_outside_a_to_z_are_rejected() {
        let mut constraints = ConstraintSet::new();
        for letter in [b'A', b'!', b'0'] {
            let malformed = SolverError::InvalidGuess(GuessError::Malformed(
                WordError::InvalidCharacters,
            ));
            assert_eq!(constraints.require_at(0, letter), Err(malformed.clone()));
            assert_eq!(constraints.exclude_at(1, letter), Err(malformed.clone()));
            assert_eq!(constraints.exclude_letter(letter), Err(malformed));
        }
        assert!(constraints.is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn position_past_the_word_panics() {
        let _ = ConstraintSet::new().require_at(WORD_LENGTH, b'a');
    }

    #[test]
    fn green_clears_earlier_yellow_at_position() {
        let mut constraints = ConstraintSet::new();
        constraints.exclude_at(0, b'a').unwrap();
        constraints.require_at(0, b'c').unwrap();

        assert!(constraints.position_excluded(0).is_empty());
        assert!(constraints.required_letters().contains(b'a'));
    }

    #[test]
    fn merge_unions_knowledge() {
        let mut first = learned("crane", "chase");
        let second = learned("moist", "chase");
        first.merge(&second).unwrap();

        assert_eq!(first.position_known(3), Some(b's'));
        assert!(first.excluded_letters().contains(b'm'));
        assert!(first.excluded_letters().contains(b'r'));
        assert!(first.is_satisfied_by(&word("chase")));
        assert!(!first.is_satisfied_by(&word("chafe")));
    }

    #[test]
    fn display_summarises_state() {
        let constraints = learned("crane", "chase");
        assert_eq!(
            constraints.to_string(),
            "known: c?a?e required: [ace] excluded: [nr]"
        );
    }
}

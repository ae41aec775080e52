//! Candidate filtering
//!
//! Narrows a word list down to the words consistent with a `ConstraintSet`.

use super::ConstraintSet;
use crate::core::Word;

/// Keep the words that satisfy `constraints`, preserving input order
///
/// Accepts anything that yields `&Word`: a dictionary slice, or a previous
/// candidate list via `.iter().copied()`. Filtering an earlier result with
/// more knowledge gives the same words as filtering the full list.
///
/// An empty result is not an error; it means the constraints cannot be met by
/// any word in the input.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::solver::{ConstraintSet, filter};
///
/// let words: Vec<Word> = ["crane", "slate", "pound"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let mut constraints = ConstraintSet::new();
/// constraints.require_at(4, b'e').unwrap();
///
/// let survivors = filter(&words, &constraints);
/// assert_eq!(survivors, vec![&words[0], &words[1]]);
/// ```
#[must_use]
pub fn filter<'w, I>(words: I, constraints: &ConstraintSet) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words
        .into_iter()
        .filter(|word| constraints.is_satisfied_by(word))
        .collect()
}

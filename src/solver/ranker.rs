//! Letter-frequency ranking of candidate words
//!
//! A word scores the sum of the weights of its distinct letters, so repeated
//! letters do not inflate the score. Higher scores are suggested first.

use crate::core::Word;
use std::cmp::Reverse;

/// Letter counts across historical Wordle answers, `a` through `z`
const HISTORICAL_COUNTS: [u32; 26] = [
    979, 281, 477, 393, 1233, 230, 311, 389, 671, 27, 210, 719, 316, 575, 754, 367, 29, 899, 669,
    729, 467, 153, 195, 37, 425, 40,
];

/// A weight per letter `a`..=`z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterWeights([u32; 26]);

impl LetterWeights {
    /// Weights from an explicit table indexed by `letter - b'a'`
    #[must_use]
    pub const fn new(table: [u32; 26]) -> Self {
        Self(table)
    }

    /// The fixed table derived from the letter distribution of past answers
    #[must_use]
    pub const fn historical() -> Self {
        Self(HISTORICAL_COUNTS)
    }

    /// Count every letter occurrence across `words`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::LetterWeights;
    ///
    /// let words = [Word::new("speed").unwrap(), Word::new("erase").unwrap()];
    /// let weights = LetterWeights::from_words(&words);
    /// assert_eq!(weights.weight(b'e'), 4);
    /// assert_eq!(weights.weight(b'z'), 0);
    /// ```
    #[must_use]
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut table = [0u32; 26];
        for word in words {
            for &ch in word.chars() {
                table[usize::from(ch - b'a')] += 1;
            }
        }
        Self(table)
    }

    /// Weight of a single letter; anything outside `a..=z` weighs 0
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            self.0[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Sum of the weights of the word's distinct letters
    #[must_use]
    pub fn score(&self, word: &Word) -> u64 {
        word.letters()
            .iter()
            .map(|letter| u64::from(self.weight(letter)))
            .sum()
    }
}

impl Default for LetterWeights {
    fn default() -> Self {
        Self::historical()
    }
}

/// Where ranking weights come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightSource {
    /// Fixed historical answer distribution
    #[default]
    Historical,
    /// Computed once from the whole dictionary
    Dictionary,
    /// Recomputed from the surviving candidates every round
    Candidates,
}

impl WeightSource {
    /// Parse a weight source name
    ///
    /// Supported names: "historical", "dictionary", "candidates".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "historical" | "history" => Some(Self::Historical),
            "dictionary" | "dict" => Some(Self::Dictionary),
            "candidates" | "adaptive" => Some(Self::Candidates),
            _ => None,
        }
    }

    /// Resolve to concrete weights for a given word list
    #[must_use]
    pub fn resolve<'w, I>(self, words: I) -> Weighting
    where
        I: IntoIterator<Item = &'w Word>,
    {
        match self {
            Self::Historical => Weighting::Fixed(LetterWeights::historical()),
            Self::Dictionary => Weighting::Fixed(LetterWeights::from_words(words)),
            Self::Candidates => Weighting::Candidates,
        }
    }
}

/// Weights ready for ranking: fixed for the whole run, or derived per round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weighting {
    Fixed(LetterWeights),
    Candidates,
}

impl Weighting {
    /// Rank `candidates` under this weighting
    #[must_use]
    pub fn rank<'w>(&self, candidates: &[&'w Word]) -> Vec<&'w Word> {
        match self {
            Self::Fixed(weights) => rank(candidates, weights),
            Self::Candidates => {
                let weights = LetterWeights::from_words(candidates.iter().copied());
                rank(candidates, &weights)
            }
        }
    }

    /// The top-ranked candidate under this weighting
    #[must_use]
    pub fn best<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word> {
        match self {
            Self::Fixed(weights) => top(candidates, weights),
            Self::Candidates => {
                let weights = LetterWeights::from_words(candidates.iter().copied());
                top(candidates, &weights)
            }
        }
    }
}

impl Default for Weighting {
    fn default() -> Self {
        Self::Fixed(LetterWeights::historical())
    }
}

/// Order `candidates` by descending score, ties broken alphabetically
///
/// Every candidate appears in the output exactly once; truncation is left to
/// the caller.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Word;
/// use wordle_sieve::solver::{LetterWeights, rank};
///
/// let words = [Word::new("fuzzy").unwrap(), Word::new("arose").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let ranked = rank(&refs, &LetterWeights::historical());
/// assert_eq!(ranked[0].text(), "arose");
/// ```
#[must_use]
pub fn rank<'w>(candidates: &[&'w Word], weights: &LetterWeights) -> Vec<&'w Word> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by_cached_key(|&word| (Reverse(weights.score(word)), word.text()));
    ranked
}

/// The candidate `rank` would put first, without sorting the rest
#[must_use]
pub fn top<'w>(candidates: &[&'w Word], weights: &LetterWeights) -> Option<&'w Word> {
    candidates
        .iter()
        .copied()
        .min_by_key(|&word| (Reverse(weights.score(word)), word.text()))
}

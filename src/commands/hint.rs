//! One-shot hint solver
//!
//! Takes what is known about each position plus the letters ruled out, and
//! prints the best-ranked words that fit.

use crate::core::{LetterSet, SolverError, WORD_LENGTH, Word};
use crate::output::{diagnostic, print_suggestions};
use crate::solver::{ConstraintSet, WeightSource, filter};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

const POSITION_NAMES: [&str; WORD_LENGTH] = ["first", "second", "third", "fourth", "fifth"];

/// What is known about one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionHint {
    #[default]
    Unknown,
    /// This letter is here
    Known(u8),
    /// These letters are in the word, but not here
    Elsewhere(LetterSet),
}

impl PositionHint {
    /// Parse a hint: empty, a single letter, or `!` followed by letters
    ///
    /// # Errors
    /// A message describing the malformed hint.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::commands::PositionHint;
    /// use wordle_sieve::core::LetterSet;
    ///
    /// assert_eq!(PositionHint::parse("S"), Ok(PositionHint::Known(b's')));
    /// assert_eq!(
    ///     PositionHint::parse("!ae"),
    ///     Ok(PositionHint::Elsewhere(LetterSet::from_letters(b"ae")))
    /// );
    /// assert!(PositionHint::parse("ab").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim().to_ascii_lowercase();
        if let Some(letters) = text.strip_prefix('!') {
            if !letters.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(format!("'{text}': only letters may follow '!'"));
            }
            let set: LetterSet = letters.bytes().collect();
            return Ok(if set.is_empty() {
                Self::Unknown
            } else {
                Self::Elsewhere(set)
            });
        }
        match text.as_bytes() {
            [] => Ok(Self::Unknown),
            [letter] if letter.is_ascii_lowercase() => Ok(Self::Known(*letter)),
            _ => Err(format!(
                "'{text}': expected a single letter or '!' followed by letters"
            )),
        }
    }
}

/// Everything the player knows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    pub positions: [PositionHint; WORD_LENGTH],
    /// Letters not in the word
    pub duds: LetterSet,
}

impl Hints {
    /// Build hints from the per-position strings and the dud letters
    ///
    /// Non-letters among the duds are ignored.
    ///
    /// # Errors
    /// A message naming the first malformed position hint.
    pub fn parse(positions: [&str; WORD_LENGTH], duds: &str) -> Result<Self, String> {
        let mut hints = Self::default();
        for (i, text) in positions.into_iter().enumerate() {
            hints.positions[i] = PositionHint::parse(text)
                .map_err(|e| format!("{} letter hint {e}", POSITION_NAMES[i]))?;
        }
        hints.duds = duds.to_ascii_lowercase().bytes().collect();
        Ok(hints)
    }
}

/// Translate hints into constraints
///
/// # Errors
/// `ContradictoryConstraints` if the hints cannot all hold, e.g. a dud letter
/// that is also known to be in the word.
pub fn constraints_from_hints(hints: &Hints) -> Result<ConstraintSet, SolverError> {
    let mut constraints = ConstraintSet::new();
    for (position, hint) in hints.positions.iter().enumerate() {
        match *hint {
            PositionHint::Unknown => {}
            PositionHint::Known(letter) => constraints.require_at(position, letter)?,
            PositionHint::Elsewhere(letters) => {
                for letter in letters.iter() {
                    constraints.exclude_at(position, letter)?;
                }
            }
        }
    }
    for letter in hints.duds.iter() {
        constraints.exclude_letter(letter)?;
    }
    Ok(constraints)
}

/// Ask for each position hint and then the duds
///
/// A malformed hint is reported and asked for again. End of input leaves the
/// remaining answers empty.
///
/// # Errors
/// Any I/O error while prompting or reading.
pub fn prompt_hints<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Hints> {
    let mut hints = Hints::default();
    for (i, name) in POSITION_NAMES.iter().enumerate() {
        hints.positions[i] = loop {
            let line = ask(input, out, &format!("{name} known letter: "))?;
            match PositionHint::parse(&line) {
                Ok(hint) => break hint,
                Err(e) => writeln!(out, "Invalid hint {e}")?,
            }
        };
    }
    let duds = ask(input, out, "Known duds: ")?;
    hints.duds = duds.to_ascii_lowercase().bytes().collect();
    Ok(hints)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Hint solver options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintConfig {
    pub weights: WeightSource,
    /// Suggestions to print; `None` prints every match
    pub limit: Option<usize>,
    pub verbose: bool,
}

impl HintConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: WeightSource::Historical,
            limit: Some(5),
            verbose: false,
        }
    }
}

impl Default for HintConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranked words matching `hints`
///
/// # Errors
/// `ContradictoryConstraints` when the hints conflict.
pub fn suggest<'d>(
    dictionary: &'d Dictionary,
    hints: &Hints,
    config: &HintConfig,
) -> Result<Vec<&'d Word>, SolverError> {
    let constraints = constraints_from_hints(hints)?;
    diagnostic(config.verbose, &constraints);

    let matches = filter(dictionary, &constraints);
    diagnostic(config.verbose, format!("{} words match", matches.len()));

    let mut ranked = config.weights.resolve(dictionary).rank(&matches);
    if let Some(limit) = config.limit {
        ranked.truncate(limit);
    }
    Ok(ranked)
}

/// Run the `hint` command against the word list at `words`
///
/// # Errors
/// Returns an error if the word list cannot be read.
pub fn run_hint(words: &Path, hints: &Hints, config: &HintConfig) -> Result<()> {
    let dictionary = Dictionary::extract(words)
        .with_context(|| format!("Failed to read word list {}", words.display()))?;
    diagnostic(
        config.verbose,
        format!("{} words loaded from {}", dictionary.len(), words.display()),
    );

    match suggest(&dictionary, hints, config) {
        Ok(ranked) => print_suggestions(&ranked),
        Err(e) => {
            eprintln!("Hints cannot all hold: {e}");
            print_suggestions(&[]);
        }
    }
    Ok(())
}

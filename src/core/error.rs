//! Error taxonomy for the solver

use super::{Word, WordError};
use std::fmt;

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Wrong length or non-alphabetic input
    Malformed(WordError),
    /// Well-formed, but membership is enforced and the word is not in the dictionary
    NotInDictionary(Word),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
        }
    }
}

/// Errors raised by the solver core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A dictionary entry is not exactly 5 alphabetic letters
    InvalidDictionary {
        /// 1-based position of the entry in the source
        index: usize,
        entry: String,
        reason: WordError,
    },
    /// A guess was refused before any state changed
    InvalidGuess(GuessError),
    /// New knowledge conflicts with what is already known
    ContradictoryConstraints(String),
    /// A guess was submitted to a session in a terminal state
    UsageError(&'static str),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDictionary {
                index,
                entry,
                reason,
            } => write!(f, "Invalid dictionary entry #{index} '{entry}': {reason}"),
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::ContradictoryConstraints(detail) => {
                write!(f, "Contradictory constraints: {detail}")
            }
            Self::UsageError(state) => {
                write!(f, "Session is {state}; no further guesses are accepted")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDictionary { reason, .. }
            | Self::InvalidGuess(GuessError::Malformed(reason)) => Some(reason),
            _ => None,
        }
    }
}

impl From<GuessError> for SolverError {
    fn from(e: GuessError) -> Self {
        Self::InvalidGuess(e)
    }
}

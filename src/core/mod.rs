//! Core domain types for Wordle
//!
//! Words, letter sets, feedback and the error taxonomy. Everything here is
//! pure and has no external dependencies.

mod error;
mod feedback;
mod letters;
mod word;

pub use error::{GuessError, SolverError};
pub use feedback::{Feedback, LetterFeedback};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};

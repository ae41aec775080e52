//! Wordle Sieve
//!
//! A constraint-based Wordle solver: feedback narrows the dictionary to the
//! words still possible, and a letter-frequency ranker orders them. On top of
//! that sit an interactive game, a hint solver and a parallel harness that
//! scores every dictionary word as an opening guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::{Feedback, Word};
//! use wordle_sieve::solver::{ConstraintSet, LetterWeights, filter, rank};
//! use wordle_sieve::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["crane", "grate", "irate", "pound"]).unwrap();
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("grate").unwrap();
//!
//! let mut constraints = ConstraintSet::new();
//! constraints.apply(&guess, &Feedback::calculate(&guess, &answer)).unwrap();
//!
//! let candidates = filter(&dictionary, &constraints);
//! let ranked = rank(&candidates, &LetterWeights::historical());
//! let texts: Vec<&str> = ranked.iter().map(|w| w.text()).collect();
//! assert_eq!(texts, vec!["irate", "grate"]);
//! ```

// Core domain types
pub mod core;

// Constraints, filtering, ranking and sessions
pub mod solver;

// Word lists
pub mod wordlists;

// First-word simulation harness
pub mod simulation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

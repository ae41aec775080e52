//! Interactive game mode
//!
//! A hidden word is drawn from the word list and the player has a fixed number
//! of rounds to find it. Typing `?` asks for suggestions without using a round.

use crate::core::{GuessError, SolverError, Word, WordError};
use crate::output::{diagnostic, format_suggestions, history_line, ordinal, render_feedback};
use crate::solver::{
    DEFAULT_MAX_ROUNDS, Observation, SessionConfig, SessionState, SolverSession, WeightSource,
};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use rand::seq::IndexedRandom;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Suggestions shown for `?` and in assistance mode
const SUGGESTION_COUNT: usize = 5;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    Guess(String),
    RequestSuggestions,
}

impl GuessInput {
    /// Interpret a raw input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == "?" {
            Self::RequestSuggestions
        } else {
            Self::Guess(line.to_string())
        }
    }
}

/// Source of player input
pub trait GuessPrompt {
    /// Show `label` and wait for the next input; `None` once input is exhausted
    ///
    /// # Errors
    /// Any I/O error while prompting or reading.
    fn next_input(&mut self, label: &str) -> io::Result<Option<GuessInput>>;
}

/// Prompts on stdout and reads lines from stdin
pub struct StdinPrompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinPrompt<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GuessPrompt for StdinPrompt<R> {
    fn next_input(&mut self, label: &str) -> io::Result<Option<GuessInput>> {
        print!("{label}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(GuessInput::parse(&line)))
    }
}

/// Game options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub weights: WeightSource,
    /// Show the top suggestions after every guess
    pub assistance: bool,
    /// Show the full ranked candidate list after every guess
    pub verbose: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            weights: WeightSource::Historical,
            assistance: false,
            verbose: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { rounds: usize },
    Lost,
    /// Input ran out before the game finished
    Quit,
}

/// Play one game against `target`, writing everything the player sees to `out`
///
/// # Errors
/// Any I/O error from `prompt` or `out`.
pub fn play_game<P, W>(
    dictionary: &Dictionary,
    target: &Word,
    config: &GameConfig,
    prompt: &mut P,
    out: &mut W,
) -> io::Result<GameOutcome>
where
    P: GuessPrompt,
    W: Write,
{
    let weighting = config.weights.resolve(dictionary);
    let mut session = SolverSession::new(
        dictionary,
        SessionConfig {
            max_rounds: Some(config.max_rounds),
            enforce_membership: true,
        },
    );

    while !session.state().is_terminal() {
        let label = format!("Enter {} word: ", ordinal(session.rounds() + 1));
        let Some(input) = prompt.next_input(&label)? else {
            return Ok(GameOutcome::Quit);
        };

        let text = match input {
            GuessInput::RequestSuggestions => {
                let suggestions = session.suggestions(&weighting, SUGGESTION_COUNT);
                writeln!(out, "Suggestions: {}", format_suggestions(&suggestions))?;
                continue;
            }
            GuessInput::Guess(text) => text,
        };

        let state = match session.submit_word(&text, Observation::Target(target)) {
            Ok(state) => state,
            Err(SolverError::InvalidGuess(GuessError::Malformed(WordError::InvalidLength(_)))) => {
                writeln!(out, "Word must be 5 characters.")?;
                continue;
            }
            Err(SolverError::InvalidGuess(_)) => {
                writeln!(out, "That's not a word!")?;
                continue;
            }
            Err(e) => return Err(io::Error::other(e)),
        };

        if let Some((guess, feedback)) = session.history().last() {
            writeln!(out, "{}", render_feedback(guess, feedback))?;
        }
        diagnostic(config.verbose, session.constraints());
        diagnostic(
            config.verbose,
            format!("{} candidates remain", session.candidates().len()),
        );

        if state == SessionState::Solved {
            break;
        }
        if config.verbose {
            let ranked = session.suggestions(&weighting, usize::MAX);
            writeln!(out, "Suggestions: {}", format_suggestions(&ranked))?;
        } else if config.assistance {
            let top = session.suggestions(&weighting, SUGGESTION_COUNT);
            writeln!(out, "Suggestions: {}", format_suggestions(&top))?;
        }
    }

    if session.state() == SessionState::Solved {
        writeln!(out, "Good job!")?;
        for (i, (guess, feedback)) in session.history().iter().enumerate() {
            writeln!(out, "  {}", history_line(i + 1, guess, feedback))?;
        }
        Ok(GameOutcome::Won {
            rounds: session.rounds(),
        })
    } else {
        writeln!(out, "Sorry, the answer is: {target}")?;
        Ok(GameOutcome::Lost)
    }
}

/// Run the `play` command: draw a random word from `words` and play on stdin/stdout
///
/// # Errors
/// Returns an error if the word list cannot be read or holds no 5-letter words,
/// or on terminal I/O failure.
pub fn run_play(words: &Path, config: &GameConfig) -> Result<GameOutcome> {
    let dictionary = Dictionary::extract(words)
        .with_context(|| format!("Failed to read word list {}", words.display()))?;
    diagnostic(
        config.verbose,
        format!("{} words loaded from {}", dictionary.len(), words.display()),
    );

    let target = dictionary
        .words()
        .choose(&mut rand::rng())
        .with_context(|| format!("No 5-letter words found in {}", words.display()))?;

    let mut prompt = StdinPrompt::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    let outcome = play_game(&dictionary, target, config, &mut prompt, &mut out)?;
    Ok(outcome)
}

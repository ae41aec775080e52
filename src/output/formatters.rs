//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::Colorize;

/// Render a guess as coloured tiles: green, yellow or grey background per letter
#[must_use]
pub fn render_feedback(guess: &Word, feedback: &Feedback) -> String {
    let mut row = String::new();
    for (&ch, mark) in guess.chars().iter().zip(feedback.marks()) {
        let tile = format!(" {} ", char::from(ch.to_ascii_uppercase()));
        let tile = match mark {
            LetterFeedback::Correct => tile.black().on_green().bold(),
            LetterFeedback::Present => tile.black().on_yellow().bold(),
            LetterFeedback::Absent => tile.bright_black().bold(),
        };
        row.push_str(&tile.to_string());
    }
    row
}

/// One numbered line of a guess history, e.g. `2. CRANE 🟩⬜🟨⬜⬜`
#[must_use]
pub fn history_line(round: usize, guess: &Word, feedback: &Feedback) -> String {
    format!(
        "{round}. {} {}",
        guess.text().to_uppercase(),
        feedback.to_emoji()
    )
}

/// Comma-separated word list as printed after "Suggestions:"
#[must_use]
pub fn format_suggestions(words: &[&Word]) -> String {
    words
        .iter()
        .map(|word| word.text())
        .collect::<Vec<_>>()
        .join(", ")
}

/// English ordinal for a round number: 1st, 2nd, 3rd, 4th ... 11th, 12th, 21st
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Command implementations

pub mod hint;
pub mod play;
pub mod simulate;

pub use hint::{
    HintConfig, Hints, PositionHint, constraints_from_hints, prompt_hints, run_hint, suggest,
};
pub use play::{GameConfig, GameOutcome, GuessInput, GuessPrompt, StdinPrompt, play_game, run_play};
pub use simulate::run_simulate;

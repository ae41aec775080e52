//! Word lists for Wordle solving
//!
//! Loads dictionaries from files or raw text.

pub mod loader;

pub use loader::Dictionary;

/// System word list mined for puzzle words when no list is given
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/words";

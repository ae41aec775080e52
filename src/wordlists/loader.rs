//! Word list loading utilities
//!
//! Two ways in:
//! - strict (`Dictionary::load`, `Dictionary::from_words`): every entry must be a
//!   5-letter word or the whole load fails
//! - lenient (`Dictionary::extract`): keep only lines that are exactly five
//!   lowercase letters, the way a system word list is mined for puzzle words

use crate::core::{SolverError, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An ordered list of distinct 5-letter words
///
/// Loaded once and shared read-only by every session and worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl Dictionary {
    /// Build a dictionary from entries, rejecting any malformed entry
    ///
    /// Entries are lowercased; duplicates after the first are dropped and the
    /// first-seen order is kept.
    ///
    /// # Errors
    /// `SolverError::InvalidDictionary` naming the first bad entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate", "CRANE"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    ///
    /// assert!(Dictionary::from_words(["crane", "cat"]).is_err());
    /// ```
    pub fn from_words<I, S>(entries: I) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for (i, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref();
            let word = Word::new(entry).map_err(|reason| SolverError::InvalidDictionary {
                index: i + 1,
                entry: entry.to_string(),
                reason,
            })?;
            dictionary.push(word);
        }
        Ok(dictionary)
    }

    /// Parse a whitespace-separated word list strictly
    ///
    /// # Errors
    /// `SolverError::InvalidDictionary` naming the first bad entry.
    pub fn from_text(text: &str) -> Result<Self, SolverError> {
        Self::from_words(text.split_whitespace())
    }

    /// Load a dictionary from a file path, or from the source text itself
    ///
    /// If `source` names an existing file, the file is read and parsed; otherwise
    /// `source` is treated as a raw whitespace-separated word list.
    ///
    /// # Errors
    /// An I/O error if the file cannot be read, or `InvalidData` wrapping
    /// `SolverError::InvalidDictionary` for a malformed entry.
    pub fn load(source: &str) -> io::Result<Self> {
        let path = Path::new(source);
        let text = if path.is_file() {
            fs::read_to_string(path)?
        } else {
            source.to_string()
        };
        Self::from_text(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Keep only the lines of `text` that are exactly five lowercase letters
    ///
    /// Capitalised entries (proper nouns), punctuation and other lengths are
    /// skipped rather than rejected.
    #[must_use]
    pub fn extract_from_text(text: &str) -> Self {
        let mut dictionary = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.len() == WORD_LENGTH
                && line.bytes().all(|b| b.is_ascii_lowercase())
                && let Ok(word) = Word::new(line)
            {
                dictionary.push(word);
            }
        }
        dictionary
    }

    /// Read a word list file leniently (see `extract_from_text`)
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::extract("/usr/share/dict/words").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn extract<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::extract_from_text(&content))
    }

    fn push(&mut self, word: Word) {
        if self.index.insert(*word.chars()) {
            self.words.push(word);
        }
    }

    /// The words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check dictionary membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.words.iter().find(|w| **w == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

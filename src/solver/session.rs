//! A single solve, round by round
//!
//! `SolverSession` owns the knowledge gathered for one hidden word and moves
//! through `Active` → `Solved` / `Exhausted` / `Abandoned`.

use super::{ConstraintSet, Weighting, filter};
use crate::core::{Feedback, GuessError, SolverError, Word};
use crate::wordlists::Dictionary;
use std::fmt;

/// Rounds allowed in a standard game
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Still accepting guesses
    Active,
    /// The last guess matched the hidden word
    Solved,
    /// No candidate is consistent with the feedback so far
    Exhausted,
    /// Stopped early: round limit reached or the caller gave up
    Abandoned,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the outcome of a guess is learned
#[derive(Debug, Clone, Copy)]
pub enum Observation<'t> {
    /// Derive feedback by comparing against the hidden word
    Target(&'t Word),
    /// Feedback reported from outside (assist mode)
    Feedback(Feedback),
}

/// Session options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Abandon after this many unsolved rounds; `None` for no limit
    pub max_rounds: Option<usize>,
    /// Refuse guesses that are not dictionary words
    pub enforce_membership: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            enforce_membership: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One full solve against a borrowed dictionary
pub struct SolverSession<'d> {
    dictionary: &'d Dictionary,
    config: SessionConfig,
    constraints: ConstraintSet,
    candidates: Vec<&'d Word>,
    history: Vec<(Word, Feedback)>,
    state: SessionState,
}

impl<'d> SolverSession<'d> {
    /// Start a session with empty knowledge; every dictionary word is a candidate
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, config: SessionConfig) -> Self {
        Self {
            dictionary,
            config,
            constraints: ConstraintSet::new(),
            candidates: dictionary.iter().collect(),
            history: Vec::new(),
            state: SessionState::Active,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Words still consistent with everything learned, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'d Word] {
        &self.candidates
    }

    /// Each accepted guess with its feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// Play `guess` and fold what it reveals into the session
    ///
    /// # Errors
    /// - `UsageError` if the session is already in a terminal state
    /// - `InvalidGuess` if membership is enforced and `guess` is not a dictionary word
    /// - `ContradictoryConstraints` if supplied feedback conflicts with earlier
    ///   rounds; the guess is not recorded and the session stays `Active`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Word;
    /// use wordle_sieve::solver::{Observation, SessionConfig, SessionState, SolverSession};
    /// use wordle_sieve::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate", "pound"]).unwrap();
    /// let target = Word::new("crane").unwrap();
    ///
    /// let mut session = SolverSession::new(&dictionary, SessionConfig::new());
    /// let state = session.submit_guess(&target, Observation::Target(&target)).unwrap();
    /// assert_eq!(state, SessionState::Solved);
    /// assert_eq!(session.rounds(), 1);
    /// ```
    pub fn submit_guess(
        &mut self,
        guess: &Word,
        observation: Observation<'_>,
    ) -> Result<SessionState, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::UsageError(self.state.name()));
        }
        if self.config.enforce_membership && !self.dictionary.contains(guess) {
            return Err(GuessError::NotInDictionary(guess.clone()).into());
        }

        let feedback = match observation {
            Observation::Target(target) => Feedback::calculate(guess, target),
            Observation::Feedback(feedback) => feedback,
        };

        self.constraints.apply(guess, &feedback)?;
        self.history.push((guess.clone(), feedback));

        // Earlier candidates already satisfy earlier rounds, so only they need rechecking.
        let previous = std::mem::take(&mut self.candidates);
        self.candidates = filter(previous, &self.constraints);

        self.state = if feedback.is_solved() {
            SessionState::Solved
        } else if self.candidates.is_empty() {
            SessionState::Exhausted
        } else if self
            .config
            .max_rounds
            .is_some_and(|limit| self.history.len() >= limit)
        {
            SessionState::Abandoned
        } else {
            SessionState::Active
        };

        Ok(self.state)
    }

    /// Parse `guess` and submit it
    ///
    /// # Errors
    /// `InvalidGuess` for malformed text, plus everything `submit_guess` returns.
    pub fn submit_word(
        &mut self,
        guess: &str,
        observation: Observation<'_>,
    ) -> Result<SessionState, SolverError> {
        let guess = Word::new(guess).map_err(GuessError::Malformed)?;
        self.submit_guess(&guess, observation)
    }

    /// Stop the session early
    ///
    /// Has no effect on a session that already finished.
    pub fn abandon(&mut self) {
        if self.state == SessionState::Active {
            self.state = SessionState::Abandoned;
        }
    }

    /// Up to `limit` candidates, best first
    #[must_use]
    pub fn suggestions(&self, weighting: &Weighting, limit: usize) -> Vec<&'d Word> {
        let mut ranked = weighting.rank(&self.candidates);
        ranked.truncate(limit);
        ranked
    }

    /// The single best next guess, if any candidate remains
    #[must_use]
    pub fn best_guess(&self, weighting: &Weighting) -> Option<&'d Word> {
        weighting.best(&self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn starts_active_with_every_word() {
        let dict = dictionary(&["crane", "slate", "pound"]);
        let session = SolverSession::new(&dict, SessionConfig::new());

        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.candidates().len(), 3);
        assert!(session.constraints().is_empty());
        assert_eq!(session.rounds(), 0);
    }

    #[test]
    fn solved_in_first_round() {
        let dict = dictionary(&["crane", "slate", "pound"]);
        let target = word("crane");
        let mut session = SolverSession::new(&dict, SessionConfig::new());

        let state = session
            .submit_guess(&word("crane"), Observation::Target(&target))
            .unwrap();

        assert_eq!(state, SessionState::Solved);
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.candidates(), &[&dict.words()[0]]);
    }

    #[test]
    fn narrows_candidates_each_round() {
        let dict = dictionary(&["crane", "slate", "pound", "crate", "grate", "irate"]);
        let target = word("grate");
        let mut session = SolverSession::new(&dict, SessionConfig::new());

        let state = session
            .submit_guess(&word("crane"), Observation::Target(&target))
            .unwrap();
        assert_eq!(state, SessionState::Active);
        let texts: Vec<&str> = session.candidates().iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["grate", "irate"]);

        let state = session
            .submit_guess(&word("grate"), Observation::Target(&target))
            .unwrap();
        assert_eq!(state, SessionState::Solved);
        assert_eq!(session.history()[1].1, Feedback::SOLVED);
    }

    #[test]
    fn terminal_sessions_refuse_guesses() {
        let dict = dictionary(&["crane", "slate"]);
        let target = word("crane");
        let mut session = SolverSession::new(&dict, SessionConfig::new());
        session
            .submit_guess(&target, Observation::Target(&target))
            .unwrap();

        let err = session
            .submit_guess(&word("slate"), Observation::Target(&target))
            .unwrap_err();
        assert_eq!(err, SolverError::UsageError("solved"));
        assert_eq!(session.rounds(), 1);

        let mut abandoned = SolverSession::new(&dict, SessionConfig::new());
        abandoned.abandon();
        assert!(matches!(
            abandoned.submit_word("crane", Observation::Target(&target)),
            Err(SolverError::UsageError("abandoned"))
        ));
    }

    #[test]
    fn exhausted_when_feedback_matches_nothing() {
        let dict = dictionary(&["crane", "slate", "moldy"]);
        let mut session = SolverSession::new(&dict, SessionConfig::new());

        // CRANE all grey leaves only MOLDY; then its O, L, D and Y are ruled out.
        let feedback = Feedback::from_str("-----").unwrap();
        let state = session
            .submit_guess(&word("crane"), Observation::Feedback(feedback))
            .unwrap();
        assert_eq!(state, SessionState::Active);

        let feedback = Feedback::from_str("G----").unwrap();
        let state = session
            .submit_guess(&word("moldy"), Observation::Feedback(feedback))
            .unwrap();
        assert_eq!(state, SessionState::Exhausted);
        assert!(session.candidates().is_empty());
        assert!(session.best_guess(&Weighting::default()).is_none());
    }

    #[test]
    fn contradictory_feedback_is_rejected_without_recording() {
        let dict = dictionary(&["crane", "slate", "moldy"]);
        let mut session = SolverSession::new(&dict, SessionConfig::new());
        let all_grey = Feedback::from_str("-----").unwrap();
        session
            .submit_guess(&word("crane"), Observation::Feedback(all_grey))
            .unwrap();

        // C was grey; now it is claimed green.
        let c_green = Feedback::from_str("G----").unwrap();
        let err = session
            .submit_guess(&word("crane"), Observation::Feedback(c_green))
            .unwrap_err();
        assert!(matches!(err, SolverError::ContradictoryConstraints(_)));
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.candidates().len(), 1);
    }

    #[test]
    fn round_limit_abandons() {
        let dict = dictionary(&["aaaaa", "bbbbb", "ccccc", "ddddd"]);
        let target = word("ddddd");
        let config = SessionConfig {
            max_rounds: Some(2),
            enforce_membership: true,
        };
        let mut session = SolverSession::new(&dict, config);

        assert_eq!(
            session.submit_word("aaaaa", Observation::Target(&target)),
            Ok(SessionState::Active)
        );
        assert_eq!(
            session.submit_word("bbbbb", Observation::Target(&target)),
            Ok(SessionState::Abandoned)
        );
    }

    #[test]
    fn winning_on_the_last_round_counts_as_solved() {
        let dict = dictionary(&["aaaaa", "bbbbb"]);
        let target = word("bbbbb");
        let config = SessionConfig {
            max_rounds: Some(2),
            enforce_membership: true,
        };
        let mut session = SolverSession::new(&dict, config);
        session.submit_word("aaaaa", Observation::Target(&target)).unwrap();
        assert_eq!(
            session.submit_word("bbbbb", Observation::Target(&target)),
            Ok(SessionState::Solved)
        );
    }

    #[test]
    fn membership_enforcement() {
        let dict = dictionary(&["crane", "slate"]);
        let target = word("slate");

        let mut strict = SolverSession::new(&dict, SessionConfig::new());
        assert!(matches!(
            strict.submit_word("pound", Observation::Target(&target)),
            Err(SolverError::InvalidGuess(GuessError::NotInDictionary(_)))
        ));
        assert!(matches!(
            strict.submit_word("pou", Observation::Target(&target)),
            Err(SolverError::InvalidGuess(GuessError::Malformed(_)))
        ));
        assert_eq!(strict.rounds(), 0);

        let config = SessionConfig {
            enforce_membership: false,
            ..SessionConfig::new()
        };
        let mut lax = SolverSession::new(&dict, config);
        assert_eq!(
            lax.submit_word("pound", Observation::Target(&target)),
            Ok(SessionState::Active)
        );
    }

    #[test]
    fn suggestions_are_ranked_and_truncated() {
        let dict = dictionary(&["fuzzy", "slate", "jiffy", "crane"]);
        let session = SolverSession::new(&dict, SessionConfig::new());

        let top: Vec<&str> = session
            .suggestions(&Weighting::default(), 2)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(top, vec!["slate", "crane"]);
        assert_eq!(
            session.best_guess(&Weighting::default()).map(Word::text),
            Some("slate")
        );
    }
}

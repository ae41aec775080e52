//! First-word simulation harness
//!
//! Plays every dictionary word as the opening guess against every dictionary
//! word as the hidden answer, with greedy follow-up guesses, and counts how
//! often each opener leads to a solve within the round limit.
//!
//! One unit of work is one opener against all targets. Units run on a rayon
//! pool sized to the worker cap and report back over a channel, so the only
//! synchronisation is one message per opener.

use crate::core::Word;
use crate::solver::{
    DEFAULT_MAX_ROUNDS, Observation, SessionConfig, SessionState, SolverSession, WeightSource,
    Weighting,
};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Worker cap for a machine with `processors` logical CPUs
///
/// Leaves one processor free when there is more than one.
#[must_use]
pub const fn worker_cap(processors: usize) -> usize {
    if processors > 1 { processors - 1 } else { 1 }
}

/// Worker cap for this machine
#[must_use]
pub fn default_worker_count() -> usize {
    thread::available_parallelism().map_or(1, |n| worker_cap(n.get()))
}

/// Simulation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum number of openers evaluated at once (at least 1)
    pub workers: usize,
    /// Rounds allowed per game, the opener included
    pub max_rounds: usize,
    /// Weights used to pick follow-up guesses
    pub weights: WeightSource,
    /// Only evaluate the first `limit` openers; every word is still a target
    pub limit: Option<usize>,
}

impl SimulationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: default_worker_count(),
            max_rounds: DEFAULT_MAX_ROUNDS,
            weights: WeightSource::Historical,
            limit: None,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome totals for one opening word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRecord {
    pub first_word: String,
    pub successes: usize,
    pub failures: usize,
}

impl SimulationRecord {
    /// Targets attempted; equals the dictionary size
    #[must_use]
    pub const fn total(&self) -> usize {
        self.successes + self.failures
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.successes as f64 / self.total() as f64
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct SimulationReport {
    /// One record per evaluated opener, in dictionary order
    pub records: Vec<SimulationRecord>,
    /// Words in the dictionary; every one was played as a target
    pub dictionary_words: usize,
    /// Worker cap the run used
    pub workers: usize,
    /// Most units observed running at the same moment
    pub peak_workers: usize,
    pub elapsed: Duration,
}

impl SimulationReport {
    /// Records ordered by successes, best first; ties keep dictionary order
    #[must_use]
    pub fn best(&self, count: usize) -> Vec<&SimulationRecord> {
        let mut ranked: Vec<&SimulationRecord> = self.records.iter().collect();
        ranked.sort_by_key(|record| std::cmp::Reverse(record.successes));
        ranked.truncate(count);
        ranked
    }

    /// `true` if fewer openers were evaluated than the dictionary holds
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.records.len() < self.dictionary_words
    }

    /// "N of M first words" when only part of the dictionary was evaluated
    #[must_use]
    pub fn coverage_note(&self) -> Option<String> {
        self.is_partial().then(|| {
            format!(
                "covers {} of {} first words",
                self.records.len(),
                self.dictionary_words
            )
        })
    }
}

/// Tracks how many units are running and the highest count seen
#[derive(Debug, Default)]
struct WorkerGauge {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl WorkerGauge {
    fn enter(&self) -> GaugeSlot<'_> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        GaugeSlot(self)
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct GaugeSlot<'a>(&'a WorkerGauge);

impl Drop for GaugeSlot<'_> {
    fn drop(&mut self) {
        self.0.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Play one game: open with `first`, then always take the top-ranked candidate
///
/// Returns `true` if the target is found within `max_rounds` guesses.
#[must_use]
pub fn solves<'d>(
    dictionary: &'d Dictionary,
    first: &'d Word,
    target: &Word,
    weighting: &Weighting,
    max_rounds: usize,
) -> bool {
    let config = SessionConfig {
        max_rounds: Some(max_rounds),
        enforce_membership: false,
    };
    let mut session = SolverSession::new(dictionary, config);
    let mut guess = first;

    loop {
        match session.submit_guess(guess, Observation::Target(target)) {
            Ok(SessionState::Solved) => return true,
            Ok(SessionState::Active) => {}
            Ok(SessionState::Exhausted | SessionState::Abandoned) | Err(_) => return false,
        }
        match session.best_guess(weighting) {
            Some(next) => guess = next,
            None => return false,
        }
    }
}

/// Evaluate one opener against every target, in dictionary order
#[must_use]
pub fn play_first_word(
    dictionary: &Dictionary,
    first: &Word,
    weighting: &Weighting,
    max_rounds: usize,
) -> SimulationRecord {
    let mut record = SimulationRecord {
        first_word: first.text().to_string(),
        successes: 0,
        failures: 0,
    };
    for target in dictionary {
        if solves(dictionary, first, target, weighting, max_rounds) {
            record.successes += 1;
        } else {
            record.failures += 1;
        }
    }
    record
}

/// Run the full simulation and collect the records
///
/// # Errors
/// Only if the worker pool cannot be started.
///
/// # Examples
/// ```
/// use wordle_sieve::simulation::{SimulationConfig, simulate};
/// use wordle_sieve::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["crane", "slate", "pound"]).unwrap();
/// let config = SimulationConfig { workers: 2, ..SimulationConfig::new() };
///
/// let report = simulate(&dictionary, &config).unwrap();
/// assert_eq!(report.records.len(), 3);
/// assert!(report.records.iter().all(|r| r.total() == 3));
/// ```
pub fn simulate(
    dictionary: &Dictionary,
    config: &SimulationConfig,
) -> io::Result<SimulationReport> {
    simulate_into(dictionary, config, |_| Ok(()))
}

/// Run the full simulation, handing each record to `sink` as its unit finishes
///
/// `sink` is called from the calling thread only, once per record, in
/// completion order. If it fails, units not yet started are skipped and the
/// error is returned once running units finish.
///
/// # Errors
/// The first error returned by `sink`, or a failure to start the worker pool.
pub fn simulate_into<F>(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    sink: F,
) -> io::Result<SimulationReport>
where
    F: FnMut(&SimulationRecord) -> io::Result<()>,
{
    let weighting = config.weights.resolve(dictionary);
    run_units(
        dictionary,
        config,
        |first| play_first_word(dictionary, first, &weighting, config.max_rounds),
        sink,
    )
}

/// Run `unit` once per opener on a pool capped at `config.workers`
fn run_units<U, F>(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    unit: U,
    mut sink: F,
) -> io::Result<SimulationReport>
where
    U: Fn(&Word) -> SimulationRecord + Sync,
    F: FnMut(&SimulationRecord) -> io::Result<()>,
{
    let started = Instant::now();
    let workers = config.workers.max(1);
    let openers: Vec<(usize, &Word)> = dictionary
        .iter()
        .enumerate()
        .take(config.limit.unwrap_or(usize::MAX))
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("simulate-{i}"))
        .build()
        .map_err(io::Error::other)?;

    let gauge = WorkerGauge::default();
    let stop = AtomicBool::new(false);
    let (tx, rx) = mpsc::channel::<(usize, SimulationRecord)>();
    let mut finished: Vec<(usize, SimulationRecord)> = Vec::with_capacity(openers.len());
    let mut sink_error = None;

    thread::scope(|scope| {
        scope.spawn(|| {
            pool.install(|| {
                openers
                    .par_iter()
                    .with_max_len(1)
                    .for_each_with(tx, |tx, &(index, first)| {
                        if stop.load(Ordering::Relaxed) {
                            return;
                        }
                        let _slot = gauge.enter();
                        let record = unit(first);
                        // The receiver only goes away after every unit is done.
                        let _ = tx.send((index, record));
                    });
            });
        });

        for (index, record) in &rx {
            if sink_error.is_none()
                && let Err(e) = sink(&record)
            {
                stop.store(true, Ordering::Relaxed);
                sink_error = Some(e);
            }
            finished.push((index, record));
        }
    });

    if let Some(e) = sink_error {
        return Err(e);
    }

    finished.sort_by_key(|(index, _)| *index);
    Ok(SimulationReport {
        records: finished.into_iter().map(|(_, record)| record).collect(),
        dictionary_words: dictionary.len(),
        workers,
        peak_workers: gauge.peak(),
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LetterWeights;
    use std::sync::Barrier;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words).unwrap()
    }

    const WORDS: &[&str] = &[
        "crane", "slate", "pound", "crate", "grate", "irate", "chase", "phase", "least", "steal",
        "fuzzy", "jiffy",
    ];

    #[test]
    fn worker_cap_leaves_headroom() {
        assert_eq!(worker_cap(0), 1);
        assert_eq!(worker_cap(1), 1);
        assert_eq!(worker_cap(2), 1);
        assert_eq!(worker_cap(8), 7);
        assert!(default_worker_count() >= 1);
    }

    #[test]
    fn opener_that_is_the_target_solves_in_one() {
        let dict = dictionary(&["crane", "slate", "pound"]);
        let crane = dict.find("crane").unwrap();
        assert!(solves(&dict, crane, crane, &Weighting::default(), 1));
    }

    #[test]
    fn one_round_only_solves_the_opener_itself() {
        let dict = dictionary(WORDS);
        let first = dict.find("slate").unwrap();
        let record = play_first_word(&dict, first, &Weighting::default(), 1);

        assert_eq!(record.successes, 1);
        assert_eq!(record.failures, WORDS.len() - 1);
    }

    #[test]
    fn greedy_play_eventually_finds_every_target() {
        // Without a round limit each round removes the guess itself, so every
        // target is reached.
        let dict = dictionary(WORDS);
        let first = dict.find("fuzzy").unwrap();
        let record = play_first_word(&dict, first, &Weighting::default(), WORDS.len());

        assert_eq!(record.successes, WORDS.len());
        assert_eq!(record.failures, 0);
    }

    #[test]
    fn every_record_covers_the_whole_dictionary() {
        let dict = dictionary(WORDS);
        let config = SimulationConfig {
            workers: 3,
            ..SimulationConfig::new()
        };
        let report = simulate(&dict, &config).unwrap();

        assert_eq!(report.records.len(), WORDS.len());
        for (record, word) in report.records.iter().zip(WORDS) {
            assert_eq!(record.first_word, *word);
            assert_eq!(record.total(), WORDS.len());
        }
    }

    #[test]
    fn concurrency_never_exceeds_cap() {
        let dict = dictionary(WORDS);
        for workers in [1, 2, 4] {
            let config = SimulationConfig {
                workers,
                ..SimulationConfig::new()
            };
            let report = simulate(&dict, &config).unwrap();
            assert_eq!(report.workers, workers);
            assert!(report.peak_workers >= 1);
            assert!(report.peak_workers <= workers);
        }
    }

    #[test]
    fn pool_fills_up_to_the_cap() {
        // Each unit waits until `workers` units are running, so the run only
        // finishes if the pool reaches the cap, and the gauge must see it.
        let dict = dictionary(WORDS);
        for workers in [2, 3, 4] {
            assert_eq!(WORDS.len() % workers, 0);
            let config = SimulationConfig {
                workers,
                ..SimulationConfig::new()
            };
            let barrier = Barrier::new(workers);
            let report = run_units(
                &dict,
                &config,
                |first| {
                    barrier.wait();
                    SimulationRecord {
                        first_word: first.text().to_string(),
                        successes: 1,
                        failures: 0,
                    }
                },
                |_| Ok(()),
            )
            .unwrap();

            assert_eq!(report.records.len(), WORDS.len());
            assert_eq!(report.peak_workers, workers);
        }
    }

    #[test]
    fn zero_workers_is_treated_as_one() {
        let dict = dictionary(&["crane", "slate"]);
        let config = SimulationConfig {
            workers: 0,
            ..SimulationConfig::new()
        };
        let report = simulate(&dict, &config).unwrap();
        assert_eq!(report.workers, 1);
        assert_eq!(report.peak_workers, 1);
    }

    #[test]
    fn results_do_not_depend_on_worker_count() {
        let dict = dictionary(WORDS);
        let serial = simulate(
            &dict,
            &SimulationConfig {
                workers: 1,
                ..SimulationConfig::new()
            },
        )
        .unwrap();
        let parallel = simulate(
            &dict,
            &SimulationConfig {
                workers: 4,
                ..SimulationConfig::new()
            },
        )
        .unwrap();
        assert_eq!(serial.records, parallel.records);
    }

    #[test]
    fn sink_sees_each_record_once() {
        let dict = dictionary(WORDS);
        let config = SimulationConfig {
            workers: 2,
            limit: Some(4),
            ..SimulationConfig::new()
        };
        let mut seen = Vec::new();
        let report = simulate_into(&dict, &config, |record| {
            seen.push(record.first_word.clone());
            Ok(())
        })
        .unwrap();

        seen.sort();
        let mut expected: Vec<String> = WORDS[..4].iter().map(|w| (*w).to_string()).collect();
        expected.sort();
        assert_eq!(seen, expected);
        assert_eq!(report.records.len(), 4);
    }

    #[test]
    fn limited_run_reports_partial_coverage() {
        let dict = dictionary(WORDS);
        let limited = simulate(
            &dict,
            &SimulationConfig {
                workers: 2,
                limit: Some(3),
                ..SimulationConfig::new()
            },
        )
        .unwrap();
        assert_eq!(limited.dictionary_words, WORDS.len());
        assert!(limited.is_partial());
        assert_eq!(
            limited.coverage_note().as_deref(),
            Some("covers 3 of 12 first words")
        );

        let over = simulate(
            &dict,
            &SimulationConfig {
                workers: 2,
                limit: Some(100),
                ..SimulationConfig::new()
            },
        )
        .unwrap();
        assert!(!over.is_partial());
        assert_eq!(over.coverage_note(), None);
    }

    #[test]
    fn sink_failure_is_reported() {
        let dict = dictionary(WORDS);
        let config = SimulationConfig {
            workers: 1,
            ..SimulationConfig::new()
        };
        let result = simulate_into(&dict, &config, |_| Err(io::Error::other("disk full")));
        assert_eq!(result.unwrap_err().to_string(), "disk full");
    }

    #[test]
    fn empty_dictionary_gives_empty_report() {
        let dict = Dictionary::default();
        let report = simulate(&dict, &SimulationConfig::new()).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.peak_workers, 0);
    }

    #[test]
    fn best_orders_by_successes() {
        let report = SimulationReport {
            records: vec![
                SimulationRecord {
                    first_word: "aaaaa".to_string(),
                    successes: 1,
                    failures: 2,
                },
                SimulationRecord {
                    first_word: "bbbbb".to_string(),
                    successes: 3,
                    failures: 0,
                },
            ],
            dictionary_words: 2,
            workers: 1,
            peak_workers: 1,
            elapsed: Duration::ZERO,
        };
        let best: Vec<&str> = report
            .best(1)
            .iter()
            .map(|r| r.first_word.as_str())
            .collect();
        assert_eq!(best, vec!["bbbbb"]);
        assert!((report.records[0].success_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn dictionary_weights_are_supported() {
        let dict = dictionary(WORDS);
        let config = SimulationConfig {
            workers: 2,
            weights: WeightSource::Dictionary,
            ..SimulationConfig::new()
        };
        let report = simulate(&dict, &config).unwrap();
        assert!(report.records.iter().all(|r| r.total() == WORDS.len()));

        let fixed = Weighting::Fixed(LetterWeights::from_words(&dict));
        let first = dict.find("crane").unwrap();
        assert_eq!(
            report.records[0],
            play_first_word(&dict, first, &fixed, DEFAULT_MAX_ROUNDS)
        );
    }
}

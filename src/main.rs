//! Wordle Sieve - CLI
//!
//! Play Wordle, ask for hints, or score every dictionary word as an opener.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_sieve::{
    commands::{GameConfig, HintConfig, Hints, prompt_hints, run_hint, run_play, run_simulate},
    simulation::{SimulationConfig, default_worker_count},
    solver::{DEFAULT_MAX_ROUNDS, WeightSource},
    wordlists::DEFAULT_WORD_LIST,
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle game, hint solver and first-word simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print diagnostics (constraint state, candidate counts) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against a random word ('?' for suggestions)
    Play {
        /// Path to the word list
        #[arg(short = 'w', long, default_value = DEFAULT_WORD_LIST)]
        words: PathBuf,

        /// Show the top suggestions after every guess
        #[arg(short, long)]
        assistance: bool,

        /// Number of rounds
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        rounds: usize,

        /// Letter weights: historical (default), dictionary, candidates
        #[arg(long, default_value = "historical")]
        weights: String,
    },

    /// Suggest words from known letters and duds
    Hint {
        /// Path to the word list
        #[arg(short = 'w', long, default_value = DEFAULT_WORD_LIST)]
        words: PathBuf,

        /// 1st character hint: a letter, or '!' and letters found elsewhere
        #[arg(short = 'a', long, default_value = "")]
        first: String,

        /// 2nd character hint
        #[arg(short = 'b', long, default_value = "")]
        second: String,

        /// 3rd character hint
        #[arg(short = 'c', long, default_value = "")]
        third: String,

        /// 4th character hint
        #[arg(short = 'd', long, default_value = "")]
        fourth: String,

        /// 5th character hint
        #[arg(short = 'e', long, default_value = "")]
        fifth: String,

        /// Characters not in the word
        #[arg(short = 'z', long, default_value = "")]
        dud: String,

        /// Prompt for the hints instead of reading flags
        #[arg(short, long)]
        interactive: bool,

        /// Letter weights: historical (default), dictionary, candidates
        #[arg(long, default_value = "historical")]
        weights: String,
    },

    /// Score every dictionary word as a first guess and write a CSV
    Simulate {
        /// Word list file, or the words themselves separated by whitespace
        dictionary: String,

        /// CSV file to write (firstword,good,bad)
        output_file: PathBuf,

        /// Worker cap (default: logical CPUs minus one)
        #[arg(short = 'j', long)]
        workers: Option<usize>,

        /// Rounds allowed per game
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        rounds: usize,

        /// Letter weights: historical (default), dictionary, candidates
        #[arg(long, default_value = "historical")]
        weights: String,

        /// Only score the first N words as openers
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_weights(name: &str) -> Result<WeightSource> {
    match WeightSource::from_name(name) {
        Some(source) => Ok(source),
        None => bail!(
            "Unknown weight source '{name}' (expected historical, dictionary or candidates)"
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            words,
            assistance,
            rounds,
            weights,
        } => {
            let config = GameConfig {
                max_rounds: rounds,
                weights: parse_weights(&weights)?,
                assistance,
                verbose: cli.verbose,
            };
            run_play(&words, &config)?;
            Ok(())
        }
        Commands::Hint {
            words,
            first,
            second,
            third,
            fourth,
            fifth,
            dud,
            interactive,
            weights,
        } => {
            let config = HintConfig {
                weights: parse_weights(&weights)?,
                limit: if cli.verbose { None } else { Some(5) },
                verbose: cli.verbose,
            };
            let hints = if interactive {
                prompt_hints(&mut io::stdin().lock(), &mut io::stdout())?
            } else {
                let positions = [
                    first.as_str(),
                    second.as_str(),
                    third.as_str(),
                    fourth.as_str(),
                    fifth.as_str(),
                ];
                Hints::parse(positions, &dud).map_err(|e| anyhow::anyhow!(e))?
            };
            run_hint(&words, &hints, &config)
        }
        Commands::Simulate {
            dictionary,
            output_file,
            workers,
            rounds,
            weights,
            limit,
        } => {
            let config = SimulationConfig {
                workers: workers.unwrap_or_else(default_worker_count),
                max_rounds: rounds,
                weights: parse_weights(&weights)?,
                limit,
            };
            run_simulate(&dictionary, &output_file, &config, cli.verbose)?;
            Ok(())
        }
    }
}

//! Batch simulation command
//!
//! Loads a dictionary, scores every word as an opener and streams the results
//! to a CSV file as each opener finishes.

use crate::output::{diagnostic, print_simulation_summary};
use crate::simulation::{CsvSink, SimulationConfig, SimulationReport, simulate_into};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::Path;

/// Run the simulation for `dictionary` (a path or an inline word list) into `output`
///
/// The output file is only created once the dictionary has loaded.
///
/// # Errors
/// Returns an error if the dictionary cannot be read or holds a malformed
/// entry, or if the output file cannot be created or written.
pub fn run_simulate(
    dictionary: &str,
    output: &Path,
    config: &SimulationConfig,
    verbose: bool,
) -> Result<SimulationReport> {
    let words = Dictionary::load(dictionary)
        .with_context(|| format!("Failed to load dictionary '{dictionary}'"))?;
    let openers = config.limit.map_or(words.len(), |limit| limit.min(words.len()));
    diagnostic(
        verbose,
        format!(
            "{} words, {openers} first words, up to {} workers, {} rounds",
            words.len(),
            config.workers.max(1),
            config.max_rounds
        ),
    );

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut sink = CsvSink::new(file)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let pb = ProgressBar::new(openers as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let report = simulate_into(&words, config, |record| {
        sink.append(record)?;
        pb.set_message(record.first_word.clone());
        pb.inc(1);
        Ok(())
    })
    .with_context(|| format!("Simulation aborted writing {}", output.display()))?;

    pb.finish_with_message("Complete!");
    diagnostic(verbose, format!("{} rows written", sink.rows()));
    if let Some(note) = report.coverage_note() {
        diagnostic(verbose, format!("--limit applied: output {note}"));
    }

    print_simulation_summary(&report, output);
    Ok(report)
}

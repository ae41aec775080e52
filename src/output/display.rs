//! Display functions for command results

use super::formatters::{create_progress_bar, format_suggestions};
use crate::core::Word;
use crate::simulation::SimulationReport;
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/// Print a diagnostic line to stderr when `verbose` is set
pub fn diagnostic(verbose: bool, message: impl Display) {
    if verbose {
        eprintln!("{}", format!("[wordle] {message}").dimmed());
    }
}

/// Print "Suggestions: a, b, c"
pub fn print_suggestions(words: &[&Word]) {
    println!("Suggestions: {}", format_suggestions(words));
}

/// Print the summary after a simulation run
pub fn print_simulation_summary(report: &SimulationReport, output: &Path) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   First words:      {}", report.records.len());
    if let Some(note) = report.coverage_note() {
        println!("   Note:             {}", format!("output {note}").bright_yellow());
    }
    println!("   Output file:      {}", output.display());
    println!(
        "   Time taken:       {}",
        format!("{:.2}s", report.elapsed.as_secs_f64()).bright_yellow()
    );
    println!(
        "   Workers:          {} (peak {})",
        report.workers, report.peak_workers
    );

    let best = report.best(10);
    if best.is_empty() {
        return;
    }

    println!("\n🏆 {}", "Best first words:".bright_cyan().bold());
    for record in best {
        let rate = record.success_rate() * 100.0;
        println!(
            "   {} {} {:5}/{:<5} ({rate:5.1}%)",
            record.first_word.to_uppercase().bright_white().bold(),
            create_progress_bar(rate, 100.0, 30).green(),
            record.successes,
            record.total(),
        );
    }
}

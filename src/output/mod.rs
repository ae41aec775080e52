//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{diagnostic, print_simulation_summary, print_suggestions};
pub use formatters::{format_suggestions, history_line, ordinal, render_feedback};

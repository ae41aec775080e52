//! Batch evaluation of opening words

pub mod harness;
pub mod sink;

pub use harness::{
    SimulationConfig, SimulationRecord, SimulationReport, default_worker_count, play_first_word,
    simulate, simulate_into, solves, worker_cap,
};
pub use sink::{CSV_HEADER, CsvSink};

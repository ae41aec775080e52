//! CSV output for simulation records

use super::SimulationRecord;
use std::io::{self, Write};

/// First line of every results file
pub const CSV_HEADER: &str = "firstword,good,bad";

/// Writes `firstword,good,bad` rows, flushing after each one
///
/// Rows land in the order they are appended, so a file written during a run
/// reflects completion order and survives an interrupted run up to the last
/// finished first word.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    /// Wrap `writer` and emit the header line
    ///
    /// # Errors
    /// Any error writing or flushing the header.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::simulation::{CsvSink, SimulationRecord};
    ///
    /// let mut sink = CsvSink::new(Vec::new()).unwrap();
    /// sink.append(&SimulationRecord {
    ///     first_word: "crane".to_string(),
    ///     successes: 2,
    ///     failures: 1,
    /// })
    /// .unwrap();
    ///
    /// let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    /// assert_eq!(text, "firstword,good,bad\ncrane,2,1\n");
    /// ```
    pub fn new(writer: W) -> io::Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(CSV_HEADER.split(','))?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    /// Write one record as a row and flush it
    ///
    /// # Errors
    /// Any error writing or flushing the row.
    pub fn append(&mut self, record: &SimulationRecord) -> io::Result<()> {
        self.writer
            .serialize((&record.first_word, record.successes, record.failures))?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, header excluded
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Flush anything pending and hand back the underlying writer
    ///
    /// # Errors
    /// Any error from the final flush.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(csv::IntoInnerError::into_error)
    }
}

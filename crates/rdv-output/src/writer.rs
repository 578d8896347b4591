//! The `OutputWriter` trait implemented by backend writers.

use crate::{EncounterRow, OutputResult, TimelineRow};

/// A sink for per-run simulation rows.
///
/// The observer stores errors internally; retrieve them with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write every timeline entry of one walker in one run.
    fn write_timeline_rows(&mut self, rows: &[TimelineRow]) -> OutputResult<()>;

    /// Write the encounter outcome of one run.
    fn write_encounter_row(&mut self, row: &EncounterRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

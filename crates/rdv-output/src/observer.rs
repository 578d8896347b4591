//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rdv_core::Walker;
use rdv_sim::{BatchSummary, SimError, SimObserver, SimulationResult};
use rdv_spatial::{CoordinateLookup, StreetNetwork};

use crate::row::{EncounterRow, TimelineRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes both walkers' timelines and the encounter
/// outcome of every completed run to any [`OutputWriter`] backend.
///
/// Skipped runs produce no rows.  Errors from the writer are stored
/// internally because `SimObserver` methods have no return value.  After
/// `run_batch` returns, check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<'n, W: OutputWriter> {
    writer:     W,
    network:    &'n StreetNetwork,
    last_error: Option<OutputError>,
}

impl<'n, W: OutputWriter> SimOutputObserver<'n, W> {
    /// Create an observer backed by `writer`; node coordinates are read from
    /// `network`.
    pub fn new(writer: W, network: &'n StreetNetwork) -> Self {
        Self { writer, network, last_error: None }
    }

    /// Take the stored write error (if any) after the batch returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn timeline_rows(&self, run: u64, walker: Walker, result: &SimulationResult) -> Vec<TimelineRow> {
        result
            .timeline(walker)
            .iter()
            .enumerate()
            .map(|(seq, entry)| {
                let pos = self.network.position(entry.node);
                TimelineRow {
                    run,
                    walker,
                    seq:       seq as u32,
                    node:      entry.node.0,
                    x:         pos.map_or(f64::NAN, |p| p.x),
                    y:         pos.map_or(f64::NAN, |p| p.y),
                    time_secs: entry.time.secs(),
                }
            })
            .collect()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

fn encounter_row(run: u64, result: &SimulationResult) -> EncounterRow {
    match &result.encounter {
        Some(e) => EncounterRow {
            run,
            met:             true,
            node:            Some(e.node.0),
            time_secs:       Some(e.time.secs()),
            other_node:      Some(e.other_node.0),
            other_time_secs: Some(e.other_time.secs()),
            distance_m:      Some(e.distance_m),
            time_diff_secs:  Some(e.time_diff_secs),
        },
        None => EncounterRow::missed(run),
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<'_, W> {
    fn on_run_end(&mut self, run: u64, result: &SimulationResult) {
        for walker in Walker::BOTH {
            let rows = self.timeline_rows(run, walker, result);
            let res = self.writer.write_timeline_rows(&rows);
            self.store_err(res);
        }
        let res = self.writer.write_encounter_row(&encounter_row(run, result));
        self.store_err(res);
    }

    fn on_run_skipped(&mut self, run: u64, error: &SimError) {
        log::debug!("run {run} skipped, nothing written: {error}");
    }

    fn on_batch_end(&mut self, _summary: &BatchSummary) {
        let res = self.writer.finish();
        self.store_err(res);
    }
}

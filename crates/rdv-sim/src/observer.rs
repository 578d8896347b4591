//! Simulation observer trait for progress reporting and data collection.

use crate::{BatchSummary, SimError, SimulationResult};

/// Callbacks invoked by [`Simulation::run_batch`][crate::Simulation::run_batch].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Runs are always reported in ascending run
/// order, with or without the `parallel` feature.
///
/// # Example — encounter counter
///
/// ```rust,ignore
/// struct MeetingLog(Vec<u64>);
///
/// impl SimObserver for MeetingLog {
///     fn on_run_end(&mut self, run: u64, result: &SimulationResult) {
///         if result.met() {
///             self.0.push(run);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first run.
    fn on_batch_start(&mut self, _runs: u64) {}

    /// Called for every completed run, met or not.
    fn on_run_end(&mut self, _run: u64, _result: &SimulationResult) {}

    /// Called for a run abandoned after its last unroutable draw.  `error`
    /// is the failure of that final draw.
    fn on_run_skipped(&mut self, _run: u64, _error: &SimError) {}

    /// Called once after the last run.
    fn on_batch_end(&mut self, _summary: &BatchSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

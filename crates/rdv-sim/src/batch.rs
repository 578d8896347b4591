//! Many independently sampled runs over one network.

use rdv_core::SimRng;
use rdv_spatial::Router;

use crate::{
    AgentParams, ScenarioSampler, SimError, SimObserver, SimResult, SimulationResult, Simulation,
};

/// Totals for a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchSummary {
    /// Runs requested.
    pub runs:       u64,
    /// Completed runs in which the walkers met.
    pub encounters: u64,
    /// Runs given up after every draw was unroutable.
    pub skipped:    u64,
}

impl BatchSummary {
    pub fn completed(&self) -> u64 {
        self.runs - self.skipped
    }

    /// Share of completed runs with an encounter (0 when nothing completed).
    pub fn encounter_rate(&self) -> f64 {
        match self.completed() {
            0 => 0.0,
            n => self.encounters as f64 / n as f64,
        }
    }
}

enum RunOutcome {
    Done(Box<SimulationResult>),
    Skipped(SimError),
}

impl<R: Router> Simulation<'_, R> {
    /// Run `runs` sampled scenarios, reporting each to `observer`.
    ///
    /// Run `k` samples from `SimRng::for_run(config.seed, k)`, so its plan
    /// depends only on the seed and `k`.  A plan whose legs cannot be routed
    /// is redrawn from the same RNG up to `config.max_resample_attempts`
    /// times; if every draw fails the run is reported through
    /// [`SimObserver::on_run_skipped`] and counted in
    /// [`BatchSummary::skipped`].  Any other error aborts the batch.
    ///
    /// With the `parallel` feature runs are computed on Rayon's pool, then
    /// delivered to the observer in ascending run order.
    pub fn run_batch<O: SimObserver>(
        &self,
        sampler:  &ScenarioSampler<'_>,
        agent_a:  &AgentParams,
        agent_b:  &AgentParams,
        runs:     u64,
        observer: &mut O,
    ) -> SimResult<BatchSummary> {
        log::info!(
            "batch of {runs} runs, seed {}, checkpoint mode {:?}",
            self.config().seed,
            sampler.mode()
        );
        observer.on_batch_start(runs);

        let mut summary = BatchSummary { runs, ..BatchSummary::default() };

        #[cfg(not(feature = "parallel"))]
        {
            for run in 0..runs {
                let outcome = self.run_sampled(run, sampler, agent_a, agent_b)?;
                deliver(run, outcome, &mut summary, observer);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let outcomes: Vec<SimResult<RunOutcome>> = (0..runs)
                .into_par_iter()
                .map(|run| self.run_sampled(run, sampler, agent_a, agent_b))
                .collect();

            for (run, outcome) in (0..runs).zip(outcomes) {
                deliver(run, outcome?, &mut summary, observer);
            }
        }

        log::info!(
            "batch done: {} met, {} without encounter, {} skipped",
            summary.encounters,
            summary.completed() - summary.encounters,
            summary.skipped
        );
        observer.on_batch_end(&summary);
        Ok(summary)
    }

    fn run_sampled(
        &self,
        run:     u64,
        sampler: &ScenarioSampler<'_>,
        agent_a: &AgentParams,
        agent_b: &AgentParams,
    ) -> SimResult<RunOutcome> {
        let mut rng = SimRng::for_run(self.config().seed, run);
        let mut attempt = 0;
        loop {
            let plan = sampler.sample(&mut rng)?;
            match self.run(sampler.area(), &plan, agent_a, agent_b) {
                Ok(result) => return Ok(RunOutcome::Done(Box::new(result))),
                Err(err) if err.is_no_path() => {
                    if attempt >= self.config().max_resample_attempts {
                        log::warn!("run {run}: skipped after {} unroutable draws: {err}", attempt + 1);
                        return Ok(RunOutcome::Skipped(err));
                    }
                    log::warn!("run {run}: resampling, {err}");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn deliver<O: SimObserver>(
    run:      u64,
    outcome:  RunOutcome,
    summary:  &mut BatchSummary,
    observer: &mut O,
) {
    match outcome {
        RunOutcome::Done(result) => {
            if result.met() {
                summary.encounters += 1;
            }
            observer.on_run_end(run, &result);
        }
        RunOutcome::Skipped(err) => {
            summary.skipped += 1;
            observer.on_run_skipped(run, &err);
        }
    }
}

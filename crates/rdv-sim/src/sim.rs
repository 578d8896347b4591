//! The `Simulation` runner and its single-run pipeline.

use rdv_core::Walker;
use rdv_spatial::{build_path, AreaPartition, DijkstraRouter, Path, Router, StreetNetwork};
use rdv_trajectory::{detect_encounter_with, time_path, Encounter, Timeline};

use crate::{AgentParams, ScenarioPlan, SimConfig, SimError, SimResult, TripPlan};

// ── SimulationResult ──────────────────────────────────────────────────────────

/// Everything one run produced.  Owned by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    pub plan:       ScenarioPlan,
    pub path_a:     Path,
    pub path_b:     Path,
    pub timeline_a: Timeline,
    pub timeline_b: Timeline,
    /// `None` when the walkers never came within tolerance.
    pub encounter:  Option<Encounter>,
}

impl SimulationResult {
    #[inline]
    pub fn met(&self) -> bool {
        self.encounter.is_some()
    }

    pub fn path(&self, walker: Walker) -> &Path {
        match walker {
            Walker::A => &self.path_a,
            Walker::B => &self.path_b,
        }
    }

    pub fn timeline(&self, walker: Walker) -> &Timeline {
        match walker {
            Walker::A => &self.timeline_a,
            Walker::B => &self.timeline_b,
        }
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// Runs scenarios against one street network.
///
/// Holds the network by shared reference and never mutates it, so a single
/// `Simulation` can serve any number of runs, concurrently if `R` allows
/// (every [`Router`] is `Send + Sync`).
pub struct Simulation<'n, R: Router> {
    network: &'n StreetNetwork,
    router:  R,
    config:  SimConfig,
}

impl<'n, R: Router> Simulation<'n, R> {
    /// # Errors
    /// [`SimError::Config`] if `config` fails [`SimConfig::validate`].
    pub fn new(network: &'n StreetNetwork, router: R, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { network, router, config })
    }

    pub fn network(&self) -> &'n StreetNetwork {
        self.network
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run one scenario with already chosen nodes.
    ///
    /// Checks walker A's trip, then walker B's, then builds and times both
    /// paths in the same order.  The first failure is returned; routing and
    /// timing errors keep the original error as their `source`.
    ///
    /// # Errors
    /// - [`SimError::CheckpointOutsideArea`] if a checkpoint is not inside `area`.
    /// - [`SimError::EndpointInsideArea`] if an origin or destination is inside.
    /// - [`SimError::DegenerateTrip`] if a walker's origin equals its destination.
    /// - [`SimError::Route`] if a leg cannot be routed (e.g. `NoPath`).
    /// - [`SimError::Timing`] for a pace that is not a positive speed.
    pub fn run(
        &self,
        area:    &AreaPartition,
        plan:    &ScenarioPlan,
        agent_a: &AgentParams,
        agent_b: &AgentParams,
    ) -> SimResult<SimulationResult> {
        for walker in Walker::BOTH {
            validate_trip(area, walker, plan.trip(walker))?;
        }

        let (path_a, timeline_a) = self.walk(Walker::A, &plan.a, agent_a)?;
        let (path_b, timeline_b) = self.walk(Walker::B, &plan.b, agent_b)?;

        let encounter = detect_encounter_with(
            self.config.scan_policy,
            &timeline_a,
            &timeline_b,
            self.config.tolerance,
            self.network,
        );

        match &encounter {
            Some(e) => log::debug!(
                "encounter at {} (A {}, B {} at {}), {:.1} m / {:.1} s apart",
                e.node, e.time, e.other_time, e.other_node, e.distance_m, e.time_diff_secs
            ),
            None => log::debug!("no encounter"),
        }

        Ok(SimulationResult {
            plan: *plan,
            path_a,
            path_b,
            timeline_a,
            timeline_b,
            encounter,
        })
    }

    fn walk(
        &self,
        walker: Walker,
        trip:   &TripPlan,
        agent:  &AgentParams,
    ) -> SimResult<(Path, Timeline)> {
        let path = build_path(
            &self.router,
            self.network,
            trip.origin,
            trip.checkpoint,
            trip.destination,
        )
        .map_err(|source| SimError::Route { walker, source })?;

        let timeline = time_path(self.network, &path, agent.departure, agent.speed_mps())
            .map_err(|source| SimError::Timing { walker, source })?;

        log::debug!(
            "walker {walker}: {} -> {} -> {}, {} nodes, {} to {}",
            trip.origin,
            trip.checkpoint,
            trip.destination,
            path.len(),
            agent.departure,
            timeline.arrival().unwrap_or(agent.departure),
        );
        Ok((path, timeline))
    }
}

fn validate_trip(area: &AreaPartition, walker: Walker, trip: &TripPlan) -> SimResult<()> {
    if !area.contains(trip.checkpoint) {
        return Err(SimError::CheckpointOutsideArea { walker, node: trip.checkpoint });
    }
    for node in [trip.origin, trip.destination] {
        if area.contains(node) {
            return Err(SimError::EndpointInsideArea { walker, node });
        }
    }
    if trip.origin == trip.destination {
        return Err(SimError::DegenerateTrip { walker, node: trip.origin });
    }
    Ok(())
}

// ── Convenience ───────────────────────────────────────────────────────────────

/// One run with [`DijkstraRouter`].
///
/// Equivalent to `Simulation::new(network, DijkstraRouter, *config)?.run(..)`.
pub fn run_simulation(
    network: &StreetNetwork,
    area:    &AreaPartition,
    plan:    &ScenarioPlan,
    agent_a: &AgentParams,
    agent_b: &AgentParams,
    config:  &SimConfig,
) -> SimResult<SimulationResult> {
    Simulation::new(network, DijkstraRouter, *config)?.run(area, plan, agent_a, agent_b)
}

//! Random scenario generation from an area partition.

use rdv_core::SimRng;
use rdv_spatial::AreaPartition;

use crate::{ScenarioPlan, SimError, SimResult, TripPlan};

/// Whether the two walkers share a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CheckpointMode {
    /// One checkpoint drawn for both walkers.
    #[default]
    Shared,
    /// Each walker draws its own checkpoint.
    PerWalker,
}

/// Draws [`ScenarioPlan`]s: checkpoints uniformly from inside the area, and
/// for each walker two distinct endpoints uniformly from outside it.
///
/// All randomness comes from the [`SimRng`] passed to [`sample`](Self::sample);
/// the same RNG state always yields the same plan.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSampler<'a> {
    area: &'a AreaPartition,
    mode: CheckpointMode,
}

impl<'a> ScenarioSampler<'a> {
    pub fn new(area: &'a AreaPartition, mode: CheckpointMode) -> Self {
        Self { area, mode }
    }

    pub fn area(&self) -> &'a AreaPartition {
        self.area
    }

    pub fn mode(&self) -> CheckpointMode {
        self.mode
    }

    /// Draw one plan.
    ///
    /// Draw order is fixed (checkpoints, then A's endpoints, then B's) so a
    /// seed reproduces a plan across versions of the caller.
    ///
    /// # Errors
    /// - [`SimError::EmptyArea`] if no node lies inside the area.
    /// - [`SimError::NotEnoughOutsideNodes`] if fewer than two lie outside.
    pub fn sample(&self, rng: &mut SimRng) -> SimResult<ScenarioPlan> {
        let inside = self.area.inside();
        let outside = self.area.outside();
        if inside.is_empty() {
            return Err(SimError::EmptyArea);
        }
        if outside.len() < 2 {
            return Err(SimError::NotEnoughOutsideNodes { available: outside.len() });
        }

        let cp_a = *rng.choose(inside).ok_or(SimError::EmptyArea)?;
        let cp_b = match self.mode {
            CheckpointMode::Shared    => cp_a,
            CheckpointMode::PerWalker => *rng.choose(inside).ok_or(SimError::EmptyArea)?,
        };

        let mut endpoints = || {
            rng.sample_distinct(outside, 2)
                .map(|v| (v[0], v[1]))
                .ok_or(SimError::NotEnoughOutsideNodes { available: outside.len() })
        };
        let (origin_a, dest_a) = endpoints()?;
        let (origin_b, dest_b) = endpoints()?;

        Ok(ScenarioPlan::new(
            TripPlan::new(origin_a, cp_a, dest_a),
            TripPlan::new(origin_b, cp_b, dest_b),
        ))
    }
}

//! Per-walker inputs: who leaves when, at what pace, along which nodes.

use rdv_core::{NodeId, Timestamp, Walker, WalkingPace};

/// How one walker moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentParams {
    pub departure: Timestamp,
    pub pace:      WalkingPace,
}

impl AgentParams {
    pub fn new(departure: Timestamp, pace: WalkingPace) -> Self {
        Self { departure, pace }
    }

    #[inline]
    pub fn speed_mps(&self) -> f64 {
        self.pace.speed_mps()
    }
}

/// The three nodes one walker's trip is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    pub origin:      NodeId,
    pub checkpoint:  NodeId,
    pub destination: NodeId,
}

impl TripPlan {
    pub fn new(origin: NodeId, checkpoint: NodeId, destination: NodeId) -> Self {
        Self { origin, checkpoint, destination }
    }
}

/// Both walkers' trips for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioPlan {
    pub a: TripPlan,
    pub b: TripPlan,
}

impl ScenarioPlan {
    pub fn new(a: TripPlan, b: TripPlan) -> Self {
        Self { a, b }
    }

    pub fn trip(&self, walker: Walker) -> &TripPlan {
        match walker {
            Walker::A => &self.a,
            Walker::B => &self.b,
        }
    }

    /// `true` when both walkers pass through the same checkpoint.
    pub fn shares_checkpoint(&self) -> bool {
        self.a.checkpoint == self.b.checkpoint
    }
}

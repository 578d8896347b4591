use rdv_core::{NodeId, Walker};
use rdv_spatial::SpatialError;
use rdv_trajectory::TimingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("walker {walker}: route failed")]
    Route {
        walker: Walker,
        source: SpatialError,
    },

    #[error("walker {walker}: timing failed")]
    Timing {
        walker: Walker,
        source: TimingError,
    },

    #[error("walker {walker}: checkpoint {node} is not inside the area")]
    CheckpointOutsideArea { walker: Walker, node: NodeId },

    #[error("walker {walker}: origin/destination {node} lies inside the area")]
    EndpointInsideArea { walker: Walker, node: NodeId },

    #[error("walker {walker}: origin and destination are both {node}")]
    DegenerateTrip { walker: Walker, node: NodeId },

    #[error("the area contains no nodes to use as a checkpoint")]
    EmptyArea,

    #[error("need at least 2 nodes outside the area for origin and destination, found {available}")]
    NotEnoughOutsideNodes { available: usize },
}

impl SimError {
    /// `true` if the underlying cause is an unreachable pair of nodes.
    ///
    /// This is the one failure a caller can fix by drawing new nodes.
    pub fn is_no_path(&self) -> bool {
        matches!(
            self,
            SimError::Route { source: SpatialError::NoPath { .. }, .. }
                | SimError::Timing { source: TimingError::Spatial(SpatialError::NoPath { .. }), .. }
        )
    }

    /// The walker this error concerns, if any.
    pub fn walker(&self) -> Option<Walker> {
        match self {
            SimError::Route { walker, .. }
            | SimError::Timing { walker, .. }
            | SimError::CheckpointOutsideArea { walker, .. }
            | SimError::EndpointInsideArea { walker, .. }
            | SimError::DegenerateTrip { walker, .. } => Some(*walker),
            _ => None,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;

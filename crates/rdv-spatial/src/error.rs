//! Spatial-subsystem error type.

use thiserror::Error;

use rdv_core::NodeId;

/// Errors produced by `rdv-spatial`.
///
/// `NoPath` is the caller's cue to resample endpoints.  The other variants
/// mean the graph or the ids handed to it are inconsistent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("no street between {from} and {to}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("node {0} not found in network")]
    UnknownNode(NodeId),

    #[error("street {from} - {to} has invalid length {length_m} m")]
    InvalidEdgeLength { from: NodeId, to: NodeId, length_m: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;

//! Position lookup seam used by the encounter detector.

use rdv_core::{NodeId, PlanarPoint};

use crate::StreetNetwork;

/// Anything that can place a node on the plane.
///
/// Implemented by [`StreetNetwork`] and by any
/// `Fn(NodeId) -> Option<PlanarPoint>`, so tests and callers with their own
/// coordinate tables need not build a network.
pub trait CoordinateLookup {
    fn position(&self, node: NodeId) -> Option<PlanarPoint>;
}

impl CoordinateLookup for StreetNetwork {
    #[inline]
    fn position(&self, node: NodeId) -> Option<PlanarPoint> {
        self.node_pos.get(node.index()).copied()
    }
}

impl<F> CoordinateLookup for F
where
    F: Fn(NodeId) -> Option<PlanarPoint>,
{
    #[inline]
    fn position(&self, node: NodeId) -> Option<PlanarPoint> {
        self(node)
    }
}

//! Node paths.

use rdv_core::NodeId;

use crate::{SpatialResult, StreetNetwork};

/// An ordered sequence of nodes, consecutive pairs joined by a street.
///
/// A single node is a valid path (the walker never moves).  An empty path
/// can be constructed but carries no meaning; the timer rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// A path that stays at `node`.
    pub fn single(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Consecutive `(u, v)` hops in walking order.
    pub fn hops(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Index of the first occurrence of `node`.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// How many times `node` appears.
    pub fn count(&self, node: NodeId) -> usize {
        self.nodes.iter().filter(|&&n| n == node).count()
    }

    /// Total walked length in metres, using the same per-hop lengths the
    /// timer charges.
    pub fn length_m(&self, network: &StreetNetwork) -> SpatialResult<f64> {
        self.hops()
            .map(|(u, v)| network.edge_length(u, v))
            .sum()
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

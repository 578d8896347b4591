//! Splitting the network into a "hot zone" and everything else.
//!
//! Checkpoints are drawn from inside the zone; origins and destinations from
//! outside it, so every trip has to cross into the zone and back out.

use rustc_hash::FxHashSet;

use rdv_core::{BBox, NodeId};

use crate::{SpatialError, SpatialResult, StreetNetwork};

/// A partition of a network's nodes into `inside` and `outside` sets.
///
/// Both lists are in ascending id order so that sampling from them with a
/// seeded RNG is reproducible.
#[derive(Debug, Clone)]
pub struct AreaPartition {
    inside:     Vec<NodeId>,
    outside:    Vec<NodeId>,
    inside_set: FxHashSet<NodeId>,
}

impl AreaPartition {
    /// Nodes within `bbox` (inclusive) versus the rest.
    pub fn from_bbox(network: &StreetNetwork, bbox: BBox) -> Self {
        let inside = network.nodes_in_bbox(bbox);
        let partition = Self::from_sorted_inside(network, inside);
        log::debug!(
            "area {:?}: {} nodes inside, {} outside",
            bbox,
            partition.inside.len(),
            partition.outside.len()
        );
        partition
    }

    /// Partition from an explicit inside set (duplicates are ignored).
    ///
    /// # Errors
    /// [`SpatialError::UnknownNode`] if any id is not in `network`.
    pub fn from_nodes<I>(network: &StreetNetwork, inside: I) -> SpatialResult<Self>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut nodes: Vec<NodeId> = Vec::new();
        for n in inside {
            if !network.contains(n) {
                return Err(SpatialError::UnknownNode(n));
            }
            nodes.push(n);
        }
        nodes.sort_unstable();
        nodes.dedup();
        Ok(Self::from_sorted_inside(network, nodes))
    }

    fn from_sorted_inside(network: &StreetNetwork, inside: Vec<NodeId>) -> Self {
        let inside_set: FxHashSet<NodeId> = inside.iter().copied().collect();
        let outside = network
            .nodes()
            .filter(|n| !inside_set.contains(n))
            .collect();
        Self { inside, outside, inside_set }
    }

    pub fn inside(&self) -> &[NodeId] {
        &self.inside
    }

    pub fn outside(&self) -> &[NodeId] {
        &self.outside
    }

    /// `true` if `node` is inside the zone.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.inside_set.contains(&node)
    }

    /// `true` if the zone holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }
}

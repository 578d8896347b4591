//! Street network representation and builder.
//!
//! # Data layout
//!
//! Every street segment is stored as two directed edges in **Compressed
//! Sparse Row (CSR)** format.  Given a `NodeId n`, its outgoing edges occupy:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Edges are stable-sorted by source node, so within one node's slice they
//! keep insertion order.  That order is what [`EdgeLengthPolicy::First`]
//! means by "first".
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over projected `[x, y]` positions answers
//! nearest-node and inside-the-box queries.

use std::ops::Range;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rdv_core::{BBox, EdgeId, NodeId, PlanarPoint};

use crate::router::{DijkstraRouter, Router};
use crate::{Path, SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [x, y]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── EdgeLengthPolicy ──────────────────────────────────────────────────────────

/// Which length to report when several street segments join the same pair
/// of nodes (a split carriageway, a footpath beside a road, …).
///
/// Routing always relaxes every parallel edge, so shortest paths effectively
/// use the shortest one.  The policy only affects [`StreetNetwork::edge_length`],
/// i.e. the time a walker is charged for the hop.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeLengthPolicy {
    /// The segment added first.
    #[default]
    First,
    /// The shortest segment.
    Shortest,
    /// The arithmetic mean of all segments.
    Mean,
}

// ── StreetNetwork ─────────────────────────────────────────────────────────────

/// Undirected street graph in CSR form plus a spatial index.
///
/// Read-only once built; share it by reference across as many simulation
/// runs (and threads) as needed.  Construct with [`StreetNetworkBuilder`].
///
/// The CSR arrays are not writable from outside the crate, so the lengths the
/// builder validated stay strictly positive:
///
/// ```compile_fail
/// let mut net = rdv_spatial::StreetNetwork::empty();
/// net.edge_length_m.push(-10.0);
/// ```
pub struct StreetNetwork {
    /// Projected position of each node.  Indexed by `NodeId`.
    pub(crate) node_pos: Vec<PlanarPoint>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub(crate) node_out_start: Vec<u32>,

    /// Source node of each directed edge.
    pub(crate) edge_from: Vec<NodeId>,

    /// Destination node of each directed edge.
    pub(crate) edge_to: Vec<NodeId>,

    /// Length of each directed edge in metres.
    pub(crate) edge_length_m: Vec<f64>,

    edge_policy: EdgeLengthPolicy,

    spatial_idx: RTree<NodeEntry>,
}

impl StreetNetwork {
    /// A network with no nodes.  Every query against it fails.
    pub fn empty() -> Self {
        StreetNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Number of directed edges (twice the number of street segments).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn street_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    pub fn edge_policy(&self) -> EdgeLengthPolicy {
        self.edge_policy
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len()).map(|i| NodeId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    #[inline]
    fn out_range(&self, node: NodeId) -> Range<usize> {
        let i = node.index();
        match (self.node_out_start.get(i), self.node_out_start.get(i + 1)) {
            (Some(&start), Some(&end)) => start as usize..end as usize,
            _ => 0..0,
        }
    }

    /// Outgoing edges of `node`, a contiguous index range.  Empty for a node
    /// not in the network.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_range(node).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.out_range(node).len()
    }

    /// `(from, to, length_m)` of a directed edge.
    pub fn edge(&self, edge: EdgeId) -> Option<(NodeId, NodeId, f64)> {
        let i = edge.index();
        Some((*self.edge_from.get(i)?, *self.edge_to.get(i)?, *self.edge_length_m.get(i)?))
    }

    /// Neighbours of `node` in CSR order (repeated once per parallel edge).
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(node).map(|e| self.edge_to[e.index()])
    }

    // ── Core queries ──────────────────────────────────────────────────────

    /// Projected coordinates of `node`.
    pub fn coordinates(&self, node: NodeId) -> SpatialResult<PlanarPoint> {
        self.node_pos
            .get(node.index())
            .copied()
            .ok_or(SpatialError::UnknownNode(node))
    }

    /// Length in metres of the street joining `u` and `v`.
    ///
    /// Parallel segments are resolved by the network's [`EdgeLengthPolicy`].
    ///
    /// # Errors
    /// [`SpatialError::UnknownNode`] if either id is absent,
    /// [`SpatialError::MissingEdge`] if they are not adjacent.
    pub fn edge_length(&self, u: NodeId, v: NodeId) -> SpatialResult<f64> {
        if !self.contains(u) {
            return Err(SpatialError::UnknownNode(u));
        }
        if !self.contains(v) {
            return Err(SpatialError::UnknownNode(v));
        }

        let mut lengths = self
            .out_edges(u)
            .filter(|e| self.edge_to[e.index()] == v)
            .map(|e| self.edge_length_m[e.index()]);

        let first = lengths
            .next()
            .ok_or(SpatialError::MissingEdge { from: u, to: v })?;

        Ok(match self.edge_policy {
            EdgeLengthPolicy::First => first,
            EdgeLengthPolicy::Shortest => lengths.fold(first, f64::min),
            EdgeLengthPolicy::Mean => {
                let (sum, n) = lengths.fold((first, 1u32), |(s, n), l| (s + l, n + 1));
                sum / n as f64
            }
        })
    }

    /// Shortest path by street length using the default [`DijkstraRouter`].
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> SpatialResult<Path> {
        DijkstraRouter.shortest_path(self, source, target)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest node to `pos`.  `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: PlanarPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Every node whose position lies inside `bbox` (inclusive), ascending.
    pub fn nodes_in_bbox(&self, bbox: BBox) -> Vec<NodeId> {
        let envelope = AABB::from_corners([bbox.min.x, bbox.min.y], [bbox.max.x, bbox.max.y]);
        let mut ids: Vec<NodeId> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Bounding box of all nodes.  `None` for an empty network.
    pub fn bounds(&self) -> Option<BBox> {
        BBox::enclosing(&self.node_pos)
    }
}

// ── StreetNetworkBuilder ──────────────────────────────────────────────────────

/// Construct a [`StreetNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rdv_core::PlanarPoint;
/// use rdv_spatial::StreetNetworkBuilder;
///
/// let mut b = StreetNetworkBuilder::new();
/// let a = b.add_node(PlanarPoint::new(0.0, 0.0));
/// let c = b.add_node(PlanarPoint::new(120.0, 0.0));
/// b.add_street(a, c, 120.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // one street, both directions
/// ```
pub struct StreetNetworkBuilder {
    nodes:       Vec<PlanarPoint>,
    raw_edges:   Vec<RawEdge>,
    edge_policy: EdgeLengthPolicy,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: f64,
}

impl StreetNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:       Vec::new(),
            raw_edges:   Vec::new(),
            edge_policy: EdgeLengthPolicy::default(),
        }
    }

    /// Pre-allocate for the expected number of nodes and street segments.
    pub fn with_capacity(nodes: usize, streets: usize) -> Self {
        Self {
            nodes:       Vec::with_capacity(nodes),
            raw_edges:   Vec::with_capacity(streets * 2),
            edge_policy: EdgeLengthPolicy::default(),
        }
    }

    /// Set how parallel segments are resolved by `edge_length`.
    pub fn edge_policy(mut self, policy: EdgeLengthPolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: PlanarPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add an undirected street segment of `length_m` metres between `a`
    /// and `b`.
    ///
    /// # Errors
    /// [`SpatialError::UnknownNode`] if either endpoint was never added;
    /// [`SpatialError::InvalidEdgeLength`] unless `length_m` is finite and
    /// strictly positive.
    pub fn add_street(&mut self, a: NodeId, b: NodeId, length_m: f64) -> SpatialResult<()> {
        for n in [a, b] {
            if n.index() >= self.nodes.len() {
                return Err(SpatialError::UnknownNode(n));
            }
        }
        if !(length_m.is_finite() && length_m > 0.0) {
            return Err(SpatialError::InvalidEdgeLength { from: a, to: b, length_m });
        }
        self.raw_edges.push(RawEdge { from: a, to: b, length_m });
        self.raw_edges.push(RawEdge { from: b, to: a, length_m });
        Ok(())
    }

    /// Add a street whose length is the straight-line distance between its
    /// endpoints.  Convenient for synthetic grids.
    pub fn add_straight_street(&mut self, a: NodeId, b: NodeId) -> SpatialResult<()> {
        let pa = *self.nodes.get(a.index()).ok_or(SpatialError::UnknownNode(a))?;
        let pb = *self.nodes.get(b.index()).ok_or(SpatialError::UnknownNode(b))?;
        self.add_street(a, b, pa.distance_m(pb))
    }

    pub fn node_pos(&self, id: NodeId) -> Option<PlanarPoint> {
        self.nodes.get(id.index()).copied()
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn street_count(&self) -> usize { self.raw_edges.len() / 2 }

    /// Consume the builder and produce a [`StreetNetwork`].
    ///
    /// O(E log E) for the edge sort + O(N log N) for the R-tree bulk load.
    pub fn build(self) -> StreetNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Stable: parallel edges keep insertion order within a node.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:     Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f64>    = raw.iter().map(|e| e.length_m).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "built street network: {} nodes, {} streets, policy {:?}",
            node_count,
            edge_count / 2,
            self.edge_policy
        );

        StreetNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            edge_policy: self.edge_policy,
            spatial_idx,
        }
    }
}

impl Default for StreetNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The simulator calls routing through the [`Router`] trait, so a caller can
//! swap in A*, a contraction hierarchy or a precomputed table without
//! touching the rest of the stack.  [`DijkstraRouter`] is the default.
//!
//! # Determinism
//!
//! Heap entries are ordered by `(cost, NodeId)` and edges are relaxed in CSR
//! order with a strict `<`, so for a fixed network the same query always
//! returns the same path, even among equal-length alternatives.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rdv_core::{EdgeId, NodeId};

use crate::network::StreetNetwork;
use crate::{Path, SpatialError, SpatialResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so one router can serve batch runs
/// on rayon worker threads.
pub trait Router: Send + Sync {
    /// Shortest path by street length from `from` to `to`, both included.
    ///
    /// `from == to` yields a single-node path.  Disconnected endpoints yield
    /// [`SpatialError::NoPath`]; ids outside the network yield
    /// [`SpatialError::UnknownNode`].
    fn shortest_path(
        &self,
        network: &StreetNetwork,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR street graph, weighted by length.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &StreetNetwork,
        from: NodeId,
        to: NodeId,
    ) -> SpatialResult<Path> {
        dijkstra(network, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Total-ordered wrapper so `f64` costs can live in a `BinaryHeap`.
#[derive(Copy, Clone, PartialEq, Debug)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(network: &StreetNetwork, from: NodeId, to: NodeId) -> SpatialResult<Path> {
    for n in [from, to] {
        if !network.contains(n) {
            return Err(SpatialError::UnknownNode(n));
        }
    }
    if from == to {
        return Ok(Path::single(from));
    }

    let n = network.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = edge that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    // Reverse turns the max-heap into a min-heap; NodeId breaks cost ties.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + network.edge_length_m[edge.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(network: &StreetNetwork, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> Path {
    let mut nodes = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeId::INVALID, "settled node without a predecessor");
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Path::new(nodes)
}

//! Paths forced through a checkpoint node.

use rdv_core::NodeId;

use crate::router::Router;
use crate::{Path, SpatialResult, StreetNetwork};

/// Shortest path `origin → checkpoint` followed by shortest path
/// `checkpoint → destination`, joined without repeating the checkpoint.
///
/// The checkpoint sits at index `len(origin → checkpoint) - 1` and appears
/// exactly once.  When `origin == checkpoint` or `checkpoint == destination`
/// the corresponding leg is a single node and contributes nothing extra.
///
/// # Errors
/// Whatever the router returns for either leg, unchanged (typically
/// [`SpatialError::NoPath`](crate::SpatialError::NoPath)).
pub fn build_path<R: Router + ?Sized>(
    router: &R,
    network: &StreetNetwork,
    origin: NodeId,
    checkpoint: NodeId,
    destination: NodeId,
) -> SpatialResult<Path> {
    let inbound = router.shortest_path(network, origin, checkpoint)?;
    let outbound = router.shortest_path(network, checkpoint, destination)?;

    let mut nodes = inbound.nodes;
    nodes.pop();
    nodes.reserve(outbound.len());
    nodes.extend(outbound.nodes);

    log::trace!(
        "checkpoint path {origin} -> {checkpoint} -> {destination}: {} nodes",
        nodes.len()
    );

    Ok(Path::new(nodes))
}

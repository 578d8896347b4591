//! The path timer: node sequence + departure + speed → arrival times.

use rdv_core::Timestamp;
use rdv_spatial::{Path, StreetNetwork};

use crate::{Timeline, TimingError, TimingResult};

/// Walk `path` at a constant `speed_mps`, leaving at `start`.
///
/// For each hop `(u, v)` the walker is stamped at `u` with the running time,
/// which then advances by `edge_length(u, v) / speed_mps`; the last node is
/// stamped after the loop.  The result has exactly `path.len()` entries, its
/// first time is `start` and its last is the true arrival at the
/// destination.  A single-node path yields `[(node, start)]`.
///
/// # Errors
///
/// - [`TimingError::InvalidSpeed`] unless `speed_mps` is finite and `> 0`
///   (checked first, so it wins over an empty path).
/// - [`TimingError::EmptyPath`] for an empty path.
/// - [`TimingError::Spatial`] if a hop is not a street of `network`.
pub fn time_path(
    network:   &StreetNetwork,
    path:      &Path,
    start:     Timestamp,
    speed_mps: f64,
) -> TimingResult<Timeline> {
    if !(speed_mps.is_finite() && speed_mps > 0.0) {
        return Err(TimingError::InvalidSpeed(speed_mps));
    }
    let last = path.last().ok_or(TimingError::EmptyPath)?;

    let mut timeline = Timeline::with_capacity(path.len());
    let mut now = start;
    for (u, v) in path.hops() {
        timeline.push(u, now);
        now = now.plus_secs(network.edge_length(u, v)? / speed_mps);
    }
    timeline.push(last, now);

    debug_assert_eq!(timeline.len(), path.len());
    Ok(timeline)
}

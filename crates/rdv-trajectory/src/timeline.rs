//! Per-node arrival times along a path.

use rdv_core::{NodeId, Timestamp};
use rdv_spatial::Path;

/// One walker reaching one node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineEntry {
    pub node: NodeId,
    pub time: Timestamp,
}

/// Arrival times along a walked path, one entry per path node.
///
/// Produced by [`time_path`](crate::time_path), which guarantees the entry
/// count equals the path length, times are non-decreasing, and the first
/// entry is the departure time.  [`Timeline::from_entries`] accepts anything
/// and is meant for callers replaying recorded traces.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { entries: Vec::with_capacity(n) }
    }

    pub(crate) fn push(&mut self, node: NodeId, time: Timestamp) {
        self.entries.push(TimelineEntry { node, time });
    }

    /// Build a timeline from raw `(node, time)` pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Timestamp)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(node, time)| TimelineEntry { node, time })
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimelineEntry> + '_ {
        self.entries.iter()
    }

    /// Time at the first node.
    pub fn departure(&self) -> Option<Timestamp> {
        self.entries.first().map(|e| e.time)
    }

    /// Time at the last node.
    pub fn arrival(&self) -> Option<Timestamp> {
        self.entries.last().map(|e| e.time)
    }

    /// Seconds between departure and arrival (0 for empty timelines).
    pub fn duration_secs(&self) -> f64 {
        match (self.departure(), self.arrival()) {
            (Some(d), Some(a)) => a - d,
            _ => 0.0,
        }
    }

    /// First time the walker is at `node`.
    pub fn time_at(&self, node: NodeId) -> Option<Timestamp> {
        self.entries.iter().find(|e| e.node == node).map(|e| e.time)
    }

    /// `true` if no entry is earlier than the one before it.
    pub fn is_non_decreasing(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// The node sequence this timeline was built from.
    pub fn path(&self) -> Path {
        Path::new(self.entries.iter().map(|e| e.node).collect())
    }
}

//! Spatiotemporal encounter detection between two timelines.

use rdv_core::{NodeId, Timestamp};
use rdv_spatial::CoordinateLookup;

use crate::Timeline;

// ── Tolerance ─────────────────────────────────────────────────────────────────

/// How close two walkers must be, in time and in space, to count as meeting.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncounterTolerance {
    pub time_secs:  f64,
    pub distance_m: f64,
}

impl EncounterTolerance {
    pub const DEFAULT_TIME_SECS:  f64 = 60.0;
    pub const DEFAULT_DISTANCE_M: f64 = 20.0;

    pub fn new(time_secs: f64, distance_m: f64) -> Self {
        Self { time_secs, distance_m }
    }

    /// `true` when both bounds are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.time_secs.is_finite()
            && self.time_secs >= 0.0
            && self.distance_m.is_finite()
            && self.distance_m >= 0.0
    }

    #[inline]
    fn admits(&self, time_diff_secs: f64, distance_m: f64) -> bool {
        time_diff_secs <= self.time_secs && distance_m <= self.distance_m
    }
}

impl Default for EncounterTolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIME_SECS, Self::DEFAULT_DISTANCE_M)
    }
}

// ── ScanPolicy ────────────────────────────────────────────────────────────────

/// Which matching pair the detector reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScanPolicy {
    /// First pair in A-outer / B-inner order.
    #[default]
    FirstMatch,
    /// Pair with the smallest `max(t_a, t_b)`; ties go to scan order.
    EarliestInTime,
}

// ── Encounter ─────────────────────────────────────────────────────────────────

/// A detected meeting.  `node`/`time` are walker A's side of the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub node:           NodeId,
    pub time:           Timestamp,
    pub other_node:     NodeId,
    pub other_time:     Timestamp,
    pub distance_m:     f64,
    pub time_diff_secs: f64,
    /// Position of the pair in each timeline.
    pub index_a:        usize,
    pub index_b:        usize,
}

impl Encounter {
    /// The later of the two arrival times: when both walkers have been there.
    pub fn settled_at(&self) -> Timestamp {
        if self.other_time > self.time { self.other_time } else { self.time }
    }
}

// ── Detection ─────────────────────────────────────────────────────────────────

/// First pair of timeline entries (A outer, B inner) within `tolerance`.
///
/// Entries whose node `lookup` cannot place never match.  Deterministic and
/// `O(|A|·|B|)`.
///
/// # Example
///
/// ```
/// use rdv_core::{NodeId, PlanarPoint, Timestamp};
/// use rdv_trajectory::{detect_encounter, EncounterTolerance, Timeline};
///
/// let at = |n: NodeId| Some(PlanarPoint::new(n.0 as f64 * 10.0, 0.0));
/// let a = Timeline::from_entries([(NodeId(0), Timestamp(0.0)), (NodeId(1), Timestamp(10.0))]);
/// let b = Timeline::from_entries([(NodeId(1), Timestamp(30.0))]);
///
/// let hit = detect_encounter(&a, &b, EncounterTolerance::default(), &at).unwrap();
/// assert_eq!(hit.node, NodeId(0));
/// ```
pub fn detect_encounter<L>(
    timeline_a: &Timeline,
    timeline_b: &Timeline,
    tolerance:  EncounterTolerance,
    lookup:     &L,
) -> Option<Encounter>
where
    L: CoordinateLookup + ?Sized,
{
    detect_encounter_with(ScanPolicy::FirstMatch, timeline_a, timeline_b, tolerance, lookup)
}

/// [`detect_encounter`] with an explicit [`ScanPolicy`].
pub fn detect_encounter_with<L>(
    policy:     ScanPolicy,
    timeline_a: &Timeline,
    timeline_b: &Timeline,
    tolerance:  EncounterTolerance,
    lookup:     &L,
) -> Option<Encounter>
where
    L: CoordinateLookup + ?Sized,
{
    // B's positions, resolved once.
    let b_pos: Vec<_> = timeline_b.iter().map(|e| lookup.position(e.node)).collect();

    let mut best: Option<Encounter> = None;
    for (ia, ea) in timeline_a.iter().enumerate() {
        let Some(pa) = lookup.position(ea.node) else { continue };

        for (ib, eb) in timeline_b.iter().enumerate() {
            let Some(pb) = b_pos[ib] else { continue };

            let time_diff_secs = ea.time.abs_diff_secs(eb.time);
            if time_diff_secs > tolerance.time_secs {
                continue;
            }
            let distance_m = pa.distance_m(pb);
            if !tolerance.admits(time_diff_secs, distance_m) {
                continue;
            }

            let hit = Encounter {
                node: ea.node,
                time: ea.time,
                other_node: eb.node,
                other_time: eb.time,
                distance_m,
                time_diff_secs,
                index_a: ia,
                index_b: ib,
            };
            match policy {
                ScanPolicy::FirstMatch => return Some(hit),
                ScanPolicy::EarliestInTime => {
                    let earlier = best
                        .as_ref()
                        .is_none_or(|b| hit.settled_at() < b.settled_at());
                    if earlier {
                        best = Some(hit);
                    }
                }
            }
        }
    }
    best
}

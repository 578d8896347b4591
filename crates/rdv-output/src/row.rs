//! Plain data row types written by output backends.

use rdv_core::Walker;

/// One walker reaching one node in one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRow {
    pub run:       u64,
    pub walker:    Walker,
    /// Position in the walker's path, from 0.
    pub seq:       u32,
    pub node:      u32,
    pub x:         f64,
    pub y:         f64,
    pub time_secs: f64,
}

/// The encounter outcome of one run.  Every `Option` is `None` when the
/// walkers did not meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncounterRow {
    pub run:             u64,
    pub met:             bool,
    /// Walker A's side of the pair.
    pub node:            Option<u32>,
    pub time_secs:       Option<f64>,
    /// Walker B's side of the pair.
    pub other_node:      Option<u32>,
    pub other_time_secs: Option<f64>,
    pub distance_m:      Option<f64>,
    pub time_diff_secs:  Option<f64>,
}

impl EncounterRow {
    /// Row for a run without an encounter.
    pub fn missed(run: u64) -> Self {
        Self {
            run,
            met:             false,
            node:            None,
            time_secs:       None,
            other_node:      None,
            other_time_secs: None,
            distance_m:      None,
            time_diff_secs:  None,
        }
    }
}

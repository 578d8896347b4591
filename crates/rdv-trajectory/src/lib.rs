//! `rdv-trajectory` — timed walks and encounter detection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`timeline`]  | `Timeline`, `TimelineEntry` — per-node arrival times          |
//! | [`timer`]     | `time_path` — path + departure + speed → timeline             |
//! | [`encounter`] | `detect_encounter`, `EncounterTolerance`, `ScanPolicy`        |
//! | [`error`]     | `TimingError`, `TimingResult<T>`                              |
//!
//! # Movement model
//!
//! A walker moves at constant speed and is only observed at nodes: the
//! timeline records when it reaches each node of its path, nothing in
//! between.  Two walkers "meet" when some node of one timeline and some node
//! of the other are close in both time and space:
//!
//! ```text
//! |t_a - t_b| <= tolerance.time_secs   AND   dist(p_a, p_b) <= tolerance.distance_m
//! ```
//!
//! The detector reports the first such pair in A-outer / B-inner order, so
//! results are reproducible bit for bit.

pub mod encounter;
pub mod error;
pub mod timeline;
pub mod timer;

#[cfg(test)]
mod tests;

pub use encounter::{detect_encounter, detect_encounter_with, Encounter, EncounterTolerance, ScanPolicy};
pub use error::{TimingError, TimingResult};
pub use timeline::{Timeline, TimelineEntry};
pub use timer::time_path;

//! `rdv-core` — foundational types for the `rendezvous` two-walker simulator.
//!
//! This crate is a dependency of every other `rdv-*` crate.  It has no
//! `rdv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                                      |
//! | [`geo`]   | `PlanarPoint`, `BBox` (projected metric coordinates)    |
//! | [`time`]  | `Timestamp` (seconds since the scenario's midnight)     |
//! | [`pace`]  | `WalkingPace`, `Walker`                                 |
//! | [`rng`]   | `SimRng` — seeded, injectable randomness for sampling   |
//! | [`error`] | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod pace;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{BBox, PlanarPoint};
pub use ids::{EdgeId, NodeId};
pub use pace::{Walker, WalkingPace};
pub use rng::SimRng;
pub use time::Timestamp;

//! `rdv-sim` — scenario orchestration for the rendezvous simulator.
//!
//! # One run
//!
//! ```text
//! ScenarioPlan (origin, checkpoint, destination per walker)
//!   ① Validate  — checkpoint inside the area, endpoints outside and distinct.
//!   ② Paths     — origin → checkpoint → destination via the Router.
//!   ③ Timelines — each path timed from the walker's departure at its pace.
//!   ④ Detect    — first node pair within the encounter tolerance.
//! ```
//!
//! A run is stateless: the network is borrowed read-only and every result is
//! owned by the caller.
//!
//! # Batches
//!
//! [`Simulation::run_batch`] samples a fresh [`ScenarioPlan`] per run from a
//! run-indexed RNG, resamples when the draw is not routable, and reports each
//! outcome to a [`SimObserver`] in ascending run order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes batch runs on Rayon's thread pool.            |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and plans. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rdv_sim::{AgentParams, CheckpointMode, ScenarioSampler, SimConfig, Simulation};
//! use rdv_spatial::{AreaPartition, DijkstraRouter};
//!
//! let area    = AreaPartition::from_bbox(&network, bbox);
//! let sim     = Simulation::new(&network, DijkstraRouter, SimConfig::default())?;
//! let sampler = ScenarioSampler::new(&area, CheckpointMode::Shared);
//! let summary = sim.run_batch(&sampler, agent_a, agent_b, 100, &mut NoopObserver)?;
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod observer;
pub mod plan;
pub mod sampler;
pub mod sim;


pub use batch::BatchSummary;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use plan::{AgentParams, ScenarioPlan, TripPlan};
pub use sampler::{CheckpointMode, ScenarioSampler};
pub use sim::{run_simulation, SimulationResult, Simulation};

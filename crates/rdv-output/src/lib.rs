//! `rdv-output` — batch output writers for the rendezvous simulator.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `timelines.csv`, `encounters.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rdv_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rdv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &network);
//! sim.run_batch(&sampler, &a, &b, 100, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EncounterRow, TimelineRow};
pub use writer::OutputWriter;

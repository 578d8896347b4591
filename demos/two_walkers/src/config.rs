//! JSON scenario file for the demo.
//!
//! Every field is optional; missing ones take the defaults below.
//!
//! ```json
//! {
//!   "grid": { "cols": 12, "rows": 10, "block_m": 80.0 },
//!   "area": { "min": { "x": 300.0, "y": 250.0 }, "max": { "x": 560.0, "y": 480.0 } },
//!   "walker_a": { "departure": "10:00", "pace": "normal" },
//!   "walker_b": { "departure": "10:05", "pace": { "custom": 0.9 } },
//!   "checkpoint_mode": "shared",
//!   "sim": { "tolerance": { "time_secs": 60.0, "distance_m": 20.0 }, "seed": 7 },
//!   "runs": 200,
//!   "output_dir": "output/two_walkers"
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use rdv_core::{BBox, PlanarPoint, Timestamp, WalkingPace};
use rdv_sim::{AgentParams, CheckpointMode, SimConfig};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cols:    u32,
    pub rows:    u32,
    pub block_m: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 12, rows: 10, block_m: 80.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Clock time, `"HH:MM"`.
    pub departure: String,
    pub pace:      WalkingPace,
}

impl WalkerConfig {
    fn new(departure: &str, pace: WalkingPace) -> Self {
        Self { departure: departure.to_owned(), pace }
    }

    pub fn to_params(&self) -> Result<AgentParams> {
        let departure = Timestamp::parse_hm(&self.departure)
            .with_context(|| format!("bad departure time {:?}", self.departure))?;
        Ok(AgentParams::new(departure, self.pace))
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::new("10:00", WalkingPace::Normal)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub grid:            GridConfig,
    pub area:            BBox,
    pub walker_a:        WalkerConfig,
    pub walker_b:        WalkerConfig,
    pub checkpoint_mode: CheckpointMode,
    pub sim:             SimConfig,
    pub runs:            u64,
    pub output_dir:      PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            grid:            GridConfig::default(),
            area:            BBox::from_corners(PlanarPoint::new(300.0, 250.0), PlanarPoint::new(560.0, 480.0)),
            walker_a:        WalkerConfig::new("10:00", WalkingPace::Normal),
            walker_b:        WalkerConfig::new("10:05", WalkingPace::Stroll),
            checkpoint_mode: CheckpointMode::Shared,
            sim:             SimConfig::default(),
            runs:            200,
            output_dir:      PathBuf::from("output/two_walkers"),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

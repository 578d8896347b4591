//! Run-level configuration.

use rdv_trajectory::{EncounterTolerance, ScanPolicy};

use crate::{SimError, SimResult};

/// Parameters shared by every run of a [`Simulation`](crate::Simulation).
///
/// | Field                   | Default                |
/// |-------------------------|------------------------|
/// | `tolerance`             | 60 s / 20 m            |
/// | `scan_policy`           | `ScanPolicy::FirstMatch` |
/// | `seed`                  | 42                     |
/// | `max_resample_attempts` | 5                      |
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// How close in time and space counts as meeting.
    pub tolerance: EncounterTolerance,

    /// Which matching pair the detector reports.
    pub scan_policy: ScanPolicy,

    /// Root seed for batch sampling.  Run `k` always uses the RNG derived
    /// from `(seed, k)`.
    pub seed: u64,

    /// Extra draws a batch run may make after an unroutable plan before the
    /// run is skipped.  `0` means a single attempt.
    pub max_resample_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tolerance:             EncounterTolerance::default(),
            scan_policy:           ScanPolicy::default(),
            seed:                  42,
            max_resample_attempts: 5,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> SimResult<()> {
        let tol = self.tolerance;
        if !(tol.time_secs.is_finite() && tol.time_secs >= 0.0) {
            return Err(SimError::Config(format!(
                "time tolerance must be finite and non-negative, got {}",
                tol.time_secs
            )));
        }
        if !(tol.distance_m.is_finite() && tol.distance_m >= 0.0) {
            return Err(SimError::Config(format!(
                "distance tolerance must be finite and non-negative, got {}",
                tol.distance_m
            )));
        }
        Ok(())
    }
}

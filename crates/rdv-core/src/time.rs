//! Simulation time model.
//!
//! # Design
//!
//! A [`Timestamp`] is a count of seconds since midnight of the scenario's
//! reference day.  Walkers leave at a clock time picked in the UI
//! (`from_hm(9, 5)` = 09:05) and arrival times are the departure plus
//! `edge_length / speed` summed along the path, so fractional seconds are
//! normal.  Values past 86 400 mean the walk crossed midnight; nothing wraps.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Seconds in one day.
pub const SECS_PER_DAY: f64 = 86_400.0;

/// A point in simulated time, seconds since the reference midnight.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const MIDNIGHT: Timestamp = Timestamp(0.0);

    /// Clock time `hour:minute` on the reference day.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u32, minute: u32) -> CoreResult<Timestamp> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::Config(format!(
                "invalid clock time {hour:02}:{minute:02}"
            )));
        }
        Ok(Timestamp((hour * 3_600 + minute * 60) as f64))
    }

    /// Parse `"HH:MM"` (as typed in a config file).
    pub fn parse_hm(s: &str) -> CoreResult<Timestamp> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| CoreError::Parse(format!("expected HH:MM, got {s:?}")))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| CoreError::Parse(format!("invalid hour in {s:?}")))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| CoreError::Parse(format!("invalid minute in {s:?}")))?;
        Self::from_hm(hour, minute)
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }

    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn plus_secs(self, secs: f64) -> Timestamp {
        Timestamp(self.0 + secs)
    }

    /// Signed seconds from `earlier` to `self`.
    #[inline]
    pub fn secs_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    /// Absolute separation in seconds.
    #[inline]
    pub fn abs_diff_secs(self, other: Timestamp) -> f64 {
        (self.0 - other.0).abs()
    }

    /// `(hours, minutes, seconds)` since the reference midnight, truncated
    /// to whole seconds.  Hours keep counting past 23.
    pub fn hms(self) -> (u64, u32, u32) {
        let total = self.0.max(0.0) as u64;
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl std::ops::Add<f64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: f64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

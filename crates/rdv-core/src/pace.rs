//! Walking paces and walker labels.

use crate::{CoreError, CoreResult};

/// Preset walking speeds offered in the scenario UI, plus a free value.
///
/// Presets are 1.0, 2.5 and 3.3 km/h.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WalkingPace {
    Stroll,
    #[default]
    Normal,
    Brisk,
    /// Any other speed, in metres per second.
    Custom(f64),
}

impl WalkingPace {
    /// Speed in metres per second.
    pub fn speed_mps(self) -> f64 {
        match self {
            WalkingPace::Stroll    => 1.0 / 3.6,
            WalkingPace::Normal    => 2.5 / 3.6,
            WalkingPace::Brisk     => 3.3 / 3.6,
            WalkingPace::Custom(v) => v,
        }
    }

    /// Label used in config files and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            WalkingPace::Stroll    => "stroll",
            WalkingPace::Normal    => "normal",
            WalkingPace::Brisk     => "brisk",
            WalkingPace::Custom(_) => "custom",
        }
    }

    /// Parse a preset name, or a bare number as a custom speed in m/s.
    pub fn parse(s: &str) -> CoreResult<WalkingPace> {
        match s.trim() {
            "stroll" => Ok(WalkingPace::Stroll),
            "normal" => Ok(WalkingPace::Normal),
            "brisk"  => Ok(WalkingPace::Brisk),
            other => other
                .parse::<f64>()
                .map(WalkingPace::Custom)
                .map_err(|_| {
                    CoreError::Parse(format!(
                        "invalid pace {other:?}: expected \"stroll\", \"normal\", \"brisk\" or m/s"
                    ))
                }),
        }
    }
}

impl std::fmt::Display for WalkingPace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkingPace::Custom(v) => write!(f, "custom ({v:.2} m/s)"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Which of the two walkers a value belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Walker {
    A,
    B,
}

impl Walker {
    pub const BOTH: [Walker; 2] = [Walker::A, Walker::B];

    pub fn as_str(self) -> &'static str {
        match self {
            Walker::A => "A",
            Walker::B => "B",
        }
    }
}

impl std::fmt::Display for Walker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

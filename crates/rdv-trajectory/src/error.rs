use rdv_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimingError {
    #[error("walking speed must be positive and finite, got {0} m/s")]
    InvalidSpeed(f64),

    #[error("cannot time an empty path")]
    EmptyPath,

    #[error("street lookup failed: {0}")]
    Spatial(#[from] SpatialError),
}

pub type TimingResult<T> = Result<T, TimingError>;

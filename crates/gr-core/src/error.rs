//! Coordinate error type.
//!
//! Sub-crates define their own error enums and wrap `GeoError` as one variant
//! where coordinates can enter from outside (e.g. catalog loading).

use thiserror::Error;

/// A coordinate rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {value} is outside [-90000000, 90000000] millionths of a degree")]
    LatitudeOutOfRange { value: i32 },

    #[error("longitude {value} is outside [-180000000, 180000000] millionths of a degree")]
    LongitudeOutOfRange { value: i32 },

    #[error("coordinate ({lat}, {lon}) is not a finite number of degrees")]
    NonFinite { lat: f64, lon: f64 },
}

/// Shorthand result type for coordinate construction.
pub type GeoResult<T> = Result<T, GeoError>;

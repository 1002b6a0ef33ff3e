//! Route-subsystem error type.

use thiserror::Error;

use gr_core::{GeoError, GeoPoint};

/// Errors produced by `gr-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("segment starts at {start} but the chain ends at {end}")]
    Disconnected { end: GeoPoint, start: GeoPoint },

    #[error("segment named {found:?} cannot extend feature {expected:?}")]
    NameMismatch { expected: String, found: String },

    #[error("cannot build from an empty segment sequence")]
    Empty,

    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("invalid catalog coordinate: {0}")]
    Geo(#[from] GeoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteError {
    /// `true` for caller-contract violations on append/build, as opposed to
    /// bad catalog input.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            RouteError::Disconnected { .. } | RouteError::NameMismatch { .. } | RouteError::Empty
        )
    }
}

pub type RouteResult<T> = Result<T, RouteError>;

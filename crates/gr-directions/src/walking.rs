//! Directions worded for a pedestrian: durations in whole minutes.

use gr_route::GeoFeature;

use crate::renderer::{turn_onto, DirectionsRenderer};

/// Assumed walking pace.
pub const MINUTES_PER_KM: f64 = 20.0;

/// `"<turn> onto <name> and walk for <n> minutes.\n"`, at
/// [`MINUTES_PER_KM`] and rounded to the nearest minute.
#[derive(Copy, Clone, Debug, Default)]
pub struct WalkingDirections;

impl WalkingDirections {
    pub fn minutes(length_km: f64) -> u64 {
        (length_km * MINUTES_PER_KM).round() as u64
    }
}

impl DirectionsRenderer for WalkingDirections {
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> String {
        format!(
            "{} onto {} and walk for {} minutes.\n",
            turn_onto(feature, orig_heading),
            feature.name(),
            Self::minutes(feature.length())
        )
    }
}

//! Directions worded for a driver: distances in kilometres.

use gr_route::GeoFeature;

use crate::renderer::{turn_onto, DirectionsRenderer};

/// `"<turn> onto <name> and go <km> kilometers.\n"`, with the distance
/// rounded to one decimal place.
#[derive(Copy, Clone, Debug, Default)]
pub struct DrivingDirections;

impl DirectionsRenderer for DrivingDirections {
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> String {
        format!(
            "{} onto {} and go {:.1} kilometers.\n",
            turn_onto(feature, orig_heading),
            feature.name(),
            feature.length()
        )
    }
}

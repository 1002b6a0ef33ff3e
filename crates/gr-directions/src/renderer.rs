//! The `DirectionsRenderer` trait — the extension point for wording.
//!
//! # Pluggability
//!
//! All renderers share one forward pass over a route's features and the turn
//! math in [`crate::turn`].  They differ only in how a single line is worded,
//! so implementors provide [`compute_line`](DirectionsRenderer::compute_line)
//! and inherit [`compute_directions`](DirectionsRenderer::compute_directions).
//!
//! # Degenerate segments
//!
//! A zero-length segment has no heading.  The helpers below skip over such
//! segments to the nearest one that has a heading; a feature made only of
//! degenerate segments gets `Continue` and leaves the running heading as it
//! was.

use tracing::debug;

use gr_core::normalize_heading;
use gr_route::{GeoFeature, Route};

use crate::turn::{compute_turn_instruction, Turn};

/// Pluggable wording for turn-by-turn directions.
///
/// # Example
///
/// ```
/// use gr_core::{GeoPoint, GeoSegment};
/// use gr_directions::{DirectionsRenderer, renderer::turn_onto};
/// use gr_route::{GeoFeature, Route};
///
/// struct Terse;
///
/// impl DirectionsRenderer for Terse {
///     fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> String {
///         format!("{}: {}\n", turn_onto(feature, orig_heading), feature.name())
///     }
/// }
///
/// let p = |lat, lon| GeoPoint::new(lat, lon).unwrap();
/// let route = Route::new(GeoSegment::new("Main St", p(0, 0), p(1_000, 0)))
///     .append(GeoSegment::new("Oak St", p(1_000, 0), p(1_000, 1_000)))
///     .unwrap();
/// assert_eq!(
///     Terse.compute_directions(&route, 0.0),
///     "Continue: Main St\nTurn right: Oak St\n"
/// );
/// ```
pub trait DirectionsRenderer: Send + Sync {
    /// One newline-terminated line describing how to traverse `feature` when
    /// arriving with compass heading `orig_heading`.
    fn compute_line(&self, feature: &GeoFeature, orig_heading: f64) -> String;

    /// Directions for the whole route, starting at its start point facing
    /// `initial_heading` (degrees; wrapped into `[0, 360)`).
    ///
    /// One line per feature, in order; after each feature the running heading
    /// becomes that feature's exit heading.
    fn compute_directions(&self, route: &Route, initial_heading: f64) -> String {
        let mut directions = String::new();
        let mut heading = normalize_heading(initial_heading);
        for feature in route.features() {
            directions.push_str(&self.compute_line(feature, heading));
            match exit_heading(feature) {
                Some(h) => heading = h,
                None => debug!(feature = %feature.name(), "feature has no heading; keeping {heading}"),
            }
        }
        directions
    }
}

/// Heading of the first non-degenerate segment of `feature`.
pub fn entry_heading(feature: &GeoFeature) -> Option<f64> {
    feature.segments().find_map(|s| s.heading())
}

/// Heading of the last non-degenerate segment of `feature`.
pub fn exit_heading(feature: &GeoFeature) -> Option<f64> {
    feature.segments().rev().find_map(|s| s.heading())
}

/// The turn needed to get onto `feature` from `orig_heading`.
pub fn turn_onto(feature: &GeoFeature, orig_heading: f64) -> Turn {
    match entry_heading(feature) {
        Some(h) => compute_turn_instruction(orig_heading, h),
        None => {
            debug!(feature = %feature.name(), "feature has no heading; no turn");
            Turn::Continue
        }
    }
}

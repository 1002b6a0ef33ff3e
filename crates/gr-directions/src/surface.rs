//! Entry points for an interactive front end.
//!
//! A UI that lets a user pick segments one at a time needs exactly three
//! things from the core: where the route currently ends, a way to grow it,
//! and the rendered directions.  Everything here is a thin
//! wrapper over `gr-route` and [`DirectionsRenderer`].

use gr_core::{GeoPoint, GeoSegment};
use gr_route::{Route, RouteResult};

use crate::{DirectionsRenderer, DrivingDirections};

/// The point a new segment must start at to be appended.
pub fn route_end_point(route: &Route) -> GeoPoint {
    route.end()
}

/// `true` when `segment` can be appended to `route`.
pub fn is_attachable(route: &Route, segment: &GeoSegment) -> bool {
    segment.p1() == route.end()
}

/// Append `segment`, producing a new route.
///
/// Fails with `RouteError::Disconnected` when the segment does not start at
/// the route's end; `route` is unaffected either way.
pub fn route_append_segment(route: &Route, segment: GeoSegment) -> RouteResult<Route> {
    route.append(segment)
}

/// Start a route from `segment` when there is none yet, otherwise append.
pub fn start_or_append(route: Option<&Route>, segment: GeoSegment) -> RouteResult<Route> {
    match route {
        None => Ok(Route::new(segment)),
        Some(r) => r.append(segment),
    }
}

/// Newline-terminated driving directions for `route`.
pub fn render_directions(route: &Route, initial_heading: f64) -> String {
    render_directions_with(&DrivingDirections, route, initial_heading)
}

/// Like [`render_directions`] with a caller-chosen renderer.
pub fn render_directions_with<R>(renderer: &R, route: &Route, initial_heading: f64) -> String
where
    R: DirectionsRenderer + ?Sized,
{
    renderer.compute_directions(route, initial_heading)
}

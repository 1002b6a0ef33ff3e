//! Routes: chains of features built by explicit appension.
//!
//! # Merge rule
//!
//! `Route::append(segment)` looks only at the last feature:
//!
//! | last feature's name      | result                                        |
//! |--------------------------|-----------------------------------------------|
//! | equals `segment.name()`  | last feature replaced by `last.append(segment)` |
//! | differs                  | new one-segment feature pushed                |
//!
//! so adjacent features of a route never share a name.  Routes are never
//! computed from a graph; callers choose every segment.

use std::fmt;
use std::slice;

use tracing::trace;

use gr_core::check::STRICT;
use gr_core::{GeoPoint, GeoSegment};

use crate::{GeoFeature, RouteError, RouteResult};

/// An immutable, non-empty chain of features.
///
/// Equality and hashing are structural over the feature sequence.
///
/// ```
/// use gr_core::{GeoPoint, GeoSegment};
/// use gr_route::Route;
///
/// let p = |lat, lon| GeoPoint::new(lat, lon).unwrap();
/// let (a, b, c, d) = (p(0, 0), p(1_000, 0), p(2_000, 0), p(2_000, 1_000));
///
/// let route = Route::new(GeoSegment::new("Main St", a, b))
///     .append(GeoSegment::new("Main St", b, c)).unwrap()
///     .append(GeoSegment::new("Oak St", c, d)).unwrap();
///
/// let names: Vec<_> = route.features().map(|f| f.name()).collect();
/// assert_eq!(names, ["Main St", "Oak St"]);
/// assert_eq!(route.end(), d);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<GeoSegment>", into = "Vec<GeoSegment>")
)]
pub struct Route {
    features: Vec<GeoFeature>,
}

impl Route {
    /// A one-feature route around `segment`.
    pub fn new(segment: GeoSegment) -> Self {
        let route = Self { features: vec![GeoFeature::new(segment)] };
        route.check_rep();
        route
    }

    /// Equivalent to `new(first)` followed by `append` for the rest.
    pub fn from_segments<I>(segments: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        let mut iter = segments.into_iter();
        let first = iter.next().ok_or(RouteError::Empty)?;
        iter.try_fold(Self::new(first), |route, segment| route.append(segment))
    }

    /// Return a new route extended by `segment`.
    ///
    /// Requires `segment.p1() == self.end()`; otherwise
    /// [`RouteError::Disconnected`] is returned and nothing is built.  The
    /// receiver is never modified.
    pub fn append(&self, segment: GeoSegment) -> RouteResult<Self> {
        let end = self.end();
        if segment.p1() != end {
            return Err(RouteError::Disconnected { end, start: segment.p1() });
        }

        let mut features = self.features.clone();
        let last = features.len() - 1;
        if features[last].name() == segment.name() {
            trace!(feature = %segment.name(), "route grows last feature");
            features[last] = features[last].append(segment)?;
        } else {
            trace!(feature = %segment.name(), count = features.len() + 1, "route starts new feature");
            features.push(GeoFeature::new(segment));
        }

        let route = Self { features };
        route.check_rep();
        Ok(route)
    }

    pub fn start(&self) -> GeoPoint {
        self.first().start()
    }

    pub fn end(&self) -> GeoPoint {
        self.last().end()
    }

    pub fn start_heading(&self) -> Option<f64> {
        self.first().start_heading()
    }

    pub fn end_heading(&self) -> Option<f64> {
        self.last().end_heading()
    }

    /// Total length in kilometres.
    pub fn length(&self) -> f64 {
        self.features.iter().map(GeoFeature::length).sum()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Features in order.  Borrowing and `Clone`, hence restartable.
    pub fn features(&self) -> slice::Iter<'_, GeoFeature> {
        self.features.iter()
    }

    /// Every segment of every feature, in the order they were appended.
    pub fn segments(&self) -> impl Iterator<Item = &GeoSegment> + Clone + '_ {
        self.features.iter().flat_map(GeoFeature::segments)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn first(&self) -> &GeoFeature {
        &self.features[0]
    }

    fn last(&self) -> &GeoFeature {
        &self.features[self.features.len() - 1]
    }

    fn check_rep(&self) {
        if !STRICT {
            return;
        }
        assert!(!self.features.is_empty(), "route has no features");
        for pair in self.features.windows(2) {
            assert_eq!(
                pair[0].end(),
                pair[1].start(),
                "features {} and {} are not chained",
                pair[0],
                pair[1]
            );
            assert_ne!(pair[0].name(), pair[1].name(), "adjacent features share a name");
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route from {} to {}", self.first(), self.last())
    }
}

impl TryFrom<Vec<GeoSegment>> for Route {
    type Error = RouteError;

    fn try_from(segments: Vec<GeoSegment>) -> RouteResult<Self> {
        Self::from_segments(segments)
    }
}

impl From<Route> for Vec<GeoSegment> {
    fn from(route: Route) -> Self {
        route.features.into_iter().flat_map(Vec::<GeoSegment>::from).collect()
    }
}

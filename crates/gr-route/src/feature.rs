//! Geographic features: maximal runs of same-named, chained segments.
//!
//! A road that bends is stored as several straight [`GeoSegment`]s sharing
//! one name.  `GeoFeature` groups them so directions can talk about "Main St"
//! as a single leg while still knowing the heading it starts and ends on.
//!
//! # Invariants
//!
//! - at least one segment;
//! - `segments[i].p2() == segments[i + 1].p1()` (chained);
//! - every segment carries the feature's name;
//! - the cached length equals the sum of segment lengths.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

use tracing::trace;

use gr_core::check::STRICT;
use gr_core::{GeoPoint, GeoSegment};

use crate::{RouteError, RouteResult};

/// An immutable, non-empty chain of same-named segments.
///
/// ```
/// use gr_core::{GeoPoint, GeoSegment};
/// use gr_route::GeoFeature;
///
/// let a = GeoPoint::new(0, 0).unwrap();
/// let b = GeoPoint::new(1_000, 0).unwrap();
/// let c = GeoPoint::new(2_000, 500).unwrap();
///
/// let one = GeoFeature::new(GeoSegment::new("Main St", a, b));
/// let two = one.append(GeoSegment::new("Main St", b, c)).unwrap();
/// assert_eq!(one.segment_count(), 1); // untouched
/// assert_eq!(two.end(), c);
/// assert!(two.append(GeoSegment::new("Oak St", c, a)).is_err());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<GeoSegment>", into = "Vec<GeoSegment>")
)]
pub struct GeoFeature {
    name: String,
    segments: Vec<GeoSegment>,
    /// Sum of segment lengths in kilometres, fixed at construction.
    length_km: f64,
}

impl GeoFeature {
    /// Wrap a single segment.
    pub fn new(segment: GeoSegment) -> Self {
        let feature = Self {
            name: segment.name().to_owned(),
            length_km: segment.length(),
            segments: vec![segment],
        };
        feature.check_rep();
        feature
    }

    /// Build a feature by appending each segment in order.
    ///
    /// Fails with [`RouteError::Empty`] for an empty iterator, or with the
    /// first precondition violation [`append`](Self::append) reports.
    pub fn from_segments<I>(segments: I) -> RouteResult<Self>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        let mut iter = segments.into_iter();
        let first = iter.next().ok_or(RouteError::Empty)?;
        let mut feature = Self::new(first);
        for segment in iter {
            feature.check_extends(&segment)?;
            feature.push_unchecked(segment);
        }
        feature.check_rep();
        Ok(feature)
    }

    /// Return a new feature with `segment` added at the end.
    ///
    /// Requires `segment.name() == self.name()` and
    /// `segment.p1() == self.end()`; the receiver is never modified.
    pub fn append(&self, segment: GeoSegment) -> RouteResult<Self> {
        self.check_extends(&segment)?;
        trace!(feature = %self.name, segments = self.segments.len() + 1, "extending feature");
        let mut grown = self.clone();
        grown.push_unchecked(segment);
        grown.check_rep();
        Ok(grown)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First endpoint of the first segment.
    pub fn start(&self) -> GeoPoint {
        self.first().p1()
    }

    /// Second endpoint of the last segment.
    pub fn end(&self) -> GeoPoint {
        self.last().p2()
    }

    /// Heading of the first segment; `None` if that segment is degenerate.
    pub fn start_heading(&self) -> Option<f64> {
        self.first().heading()
    }

    /// Heading of the last segment; `None` if that segment is degenerate.
    pub fn end_heading(&self) -> Option<f64> {
        self.last().heading()
    }

    /// Total length in kilometres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_km
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The constituent segments in order.
    ///
    /// The iterator borrows immutably and is `Clone`, so it can be restarted
    /// without touching the feature.
    pub fn segments(&self) -> slice::Iter<'_, GeoSegment> {
        self.segments.iter()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn first(&self) -> &GeoSegment {
        &self.segments[0]
    }

    fn last(&self) -> &GeoSegment {
        &self.segments[self.segments.len() - 1]
    }

    fn check_extends(&self, segment: &GeoSegment) -> RouteResult<()> {
        if segment.name() != self.name {
            return Err(RouteError::NameMismatch {
                expected: self.name.clone(),
                found:    segment.name().to_owned(),
            });
        }
        if segment.p1() != self.end() {
            return Err(RouteError::Disconnected { end: self.end(), start: segment.p1() });
        }
        Ok(())
    }

    fn push_unchecked(&mut self, segment: GeoSegment) {
        self.length_km += segment.length();
        self.segments.push(segment);
    }

    fn check_rep(&self) {
        if !STRICT {
            return;
        }
        assert!(!self.segments.is_empty(), "feature {:?} has no segments", self.name);
        for seg in &self.segments {
            assert_eq!(seg.name(), self.name, "segment name differs from feature name");
        }
        for pair in self.segments.windows(2) {
            assert_eq!(pair[0].p2(), pair[1].p1(), "feature {:?} is not chained", self.name);
        }
        let sum: f64 = self.segments.iter().map(GeoSegment::length).sum();
        assert!(
            (sum - self.length_km).abs() <= 1e-9 * sum.max(1.0),
            "cached length {} != segment sum {sum}",
            self.length_km
        );
    }
}

/// Structural: two features are equal when their segment sequences are.
impl PartialEq for GeoFeature {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for GeoFeature {}

impl Hash for GeoFeature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl fmt::Display for GeoFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<Vec<GeoSegment>> for GeoFeature {
    type Error = RouteError;

    fn try_from(segments: Vec<GeoSegment>) -> RouteResult<Self> {
        Self::from_segments(segments)
    }
}

impl From<GeoFeature> for Vec<GeoSegment> {
    fn from(feature: GeoFeature) -> Self {
        feature.segments
    }
}

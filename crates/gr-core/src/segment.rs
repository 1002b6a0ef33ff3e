//! Named, oriented straight-line segment between two points.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::check::STRICT;
use crate::GeoPoint;

/// A straight edge from `p1` to `p2` along a named geographic feature
/// (a road, a river, …).
///
/// Length and heading are computed once at construction.  Equality and
/// hashing cover only the name and the two endpoints.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGeoSegment", into = "RawGeoSegment"))]
pub struct GeoSegment {
    name: String,
    p1: GeoPoint,
    p2: GeoPoint,
    /// Flat-plane length in kilometres.
    length_km: f64,
    /// `None` for a degenerate segment (`p1 == p2`).
    heading: Option<f64>,
}

impl GeoSegment {
    pub fn new(name: impl Into<String>, p1: GeoPoint, p2: GeoPoint) -> Self {
        let seg = Self {
            name: name.into(),
            p1,
            p2,
            length_km: p1.distance_to(p2),
            heading: p1.heading_to(p2),
        };
        seg.check_rep();
        seg
    }

    /// Same name, endpoints swapped.  Length and heading are recomputed
    /// rather than derived, so a degenerate segment stays heading-less.
    pub fn reverse(&self) -> Self {
        Self::new(self.name.clone(), self.p2, self.p1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn p1(&self) -> GeoPoint {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> GeoPoint {
        self.p2
    }

    /// Length in kilometres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_km
    }

    /// Compass heading from `p1` to `p2` in `[0, 360)`, or `None` when the
    /// endpoints coincide.
    #[inline]
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    fn check_rep(&self) {
        if !STRICT {
            return;
        }
        assert!(self.length_km >= 0.0, "negative segment length {}", self.length_km);
        if let Some(h) = self.heading {
            assert!((0.0..360.0).contains(&h), "heading {h} outside [0, 360)");
        }
        assert_eq!(self.heading.is_none(), self.p1 == self.p2);
    }
}

impl PartialEq for GeoSegment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.p1 == other.p1 && self.p2 == other.p2
    }
}

impl Eq for GeoSegment {}

impl Hash for GeoSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.p1.hash(state);
        self.p2.hash(state);
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.name, self.p1, self.p2)
    }
}

// ── Serde shape ───────────────────────────────────────────────────────────────

/// Wire form: derived fields are recomputed on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGeoSegment {
    name: String,
    p1: GeoPoint,
    p2: GeoPoint,
}

#[cfg(feature = "serde")]
impl From<RawGeoSegment> for GeoSegment {
    fn from(raw: RawGeoSegment) -> Self {
        GeoSegment::new(raw.name, raw.p1, raw.p2)
    }
}

#[cfg(feature = "serde")]
impl From<GeoSegment> for RawGeoSegment {
    fn from(seg: GeoSegment) -> Self {
        RawGeoSegment { name: seg.name, p1: seg.p1, p2: seg.p2 }
    }
}

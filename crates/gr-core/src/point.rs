//! Geographic coordinate type and flat-plane spatial utilities.
//!
//! `GeoPoint` stores latitude/longitude as **millionths of a degree** in
//! `i32`.  Equality and hashing are exact over those integers; floating point
//! only appears in the derived distance and heading computations.
//!
//! Distances and headings use a local flat-plane approximation: each degree
//! delta is scaled by a fixed km-per-degree factor and the two axes are
//! combined as Euclidean components.  The constants fit points near 32.8° N
//! and are not derived from true geodesy.

use std::fmt;

use crate::check::STRICT;
use crate::{GeoError, GeoResult};

/// Fixed-point scale: one degree is this many stored units.
pub const MILLIONTHS_PER_DEGREE: i32 = 1_000_000;

pub const MIN_LATITUDE:  i32 =  -90 * MILLIONTHS_PER_DEGREE;
pub const MAX_LATITUDE:  i32 =   90 * MILLIONTHS_PER_DEGREE;
pub const MIN_LONGITUDE: i32 = -180 * MILLIONTHS_PER_DEGREE;
pub const MAX_LONGITUDE: i32 =  180 * MILLIONTHS_PER_DEGREE;

/// Kilometres per degree of latitude in the local approximation.
pub const KM_PER_DEGREE_LATITUDE:  f64 = 110.901;
/// Kilometres per degree of longitude in the local approximation.
pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

const DEGREES_IN_CIRCLE: f64 = 360.0;

/// A point on the earth, in millionths of a degree.
///
/// North latitudes and east longitudes are positive.
///
/// ```
/// use gr_core::GeoPoint;
///
/// let ziv = GeoPoint::new(32_783_098, 35_014_528).unwrap();
/// assert_eq!(ziv.latitude(), 32_783_098);
/// assert!(GeoPoint::new(91_000_000, 0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: i32,
    lon: i32,
}

impl GeoPoint {
    /// Construct from millionths of a degree, rejecting out-of-range values.
    pub fn new(latitude: i32, longitude: i32) -> GeoResult<Self> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange { value: latitude });
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange { value: longitude });
        }
        let p = Self { lat: latitude, lon: longitude };
        p.check_rep();
        Ok(p)
    }

    /// Construct from decimal degrees, rounding to the nearest millionth.
    pub fn from_degrees(lat: f64, lon: f64) -> GeoResult<Self> {
        let scaled_lat = (lat * MILLIONTHS_PER_DEGREE as f64).round();
        let scaled_lon = (lon * MILLIONTHS_PER_DEGREE as f64).round();
        if !scaled_lat.is_finite() || !scaled_lon.is_finite() {
            return Err(GeoError::NonFinite { lat, lon });
        }
        // Saturating casts push anything beyond i32 out of the valid range.
        Self::new(scaled_lat as i32, scaled_lon as i32)
    }

    #[inline]
    pub fn latitude(self) -> i32 {
        self.lat
    }

    #[inline]
    pub fn longitude(self) -> i32 {
        self.lon
    }

    pub fn latitude_degrees(self) -> f64 {
        self.lat as f64 / MILLIONTHS_PER_DEGREE as f64
    }

    pub fn longitude_degrees(self) -> f64 {
        self.lon as f64 / MILLIONTHS_PER_DEGREE as f64
    }

    /// Flat-plane distance in kilometres.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        let (x, y) = self.scaled_delta(other);
        x.hypot(y)
    }

    /// Compass heading towards `other`: degrees in `[0, 360)`, 0 = north,
    /// increasing clockwise.
    ///
    /// Returns `None` when `other == self`; there is no direction between
    /// coincident points and the sentinel must not be fed into turn math.
    pub fn heading_to(self, other: GeoPoint) -> Option<f64> {
        if self == other {
            return None;
        }
        let (x, y) = self.scaled_delta(other);
        // atan2 measures counter-clockwise from east; negating y flips it to
        // clockwise and the quarter turn moves zero to north.
        let math_angle = (-y).atan2(x).to_degrees();
        Some(normalize_heading(math_angle + DEGREES_IN_CIRCLE / 4.0))
    }

    /// `(east, north)` offset to `other` in kilometres.
    fn scaled_delta(self, other: GeoPoint) -> (f64, f64) {
        let d_lon = (other.lon as f64 - self.lon as f64) / MILLIONTHS_PER_DEGREE as f64;
        let d_lat = (other.lat as f64 - self.lat as f64) / MILLIONTHS_PER_DEGREE as f64;
        (d_lon * KM_PER_DEGREE_LONGITUDE, d_lat * KM_PER_DEGREE_LATITUDE)
    }

    fn check_rep(self) {
        if !STRICT {
            return;
        }
        assert!(self.lat <= MAX_LATITUDE, "latitude {} too large", self.lat);
        assert!(self.lat >= MIN_LATITUDE, "latitude {} too small", self.lat);
        assert!(self.lon <= MAX_LONGITUDE, "longitude {} too large", self.lon);
        assert!(self.lon >= MIN_LONGITUDE, "longitude {} too small", self.lon);
    }
}

/// Wrap any angle in degrees into `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(DEGREES_IN_CIRCLE);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if h >= DEGREES_IN_CIRCLE { 0.0 } else { h }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lat, self.lon)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    lat: i32,
    lon: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> GeoResult<Self> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

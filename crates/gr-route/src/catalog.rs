//! Segment catalogs: the fixed set of known segments a route is chosen from.
//!
//! An interactive front end shows the user a list of segments and only lets
//! them add one whose first endpoint is the current route end.  The catalog
//! answers that query with an exact-point hash index.
//!
//! # CSV format
//!
//! One row per segment; coordinates in millionths of a degree.
//!
//! ```csv
//! name,lat1,lon1,lat2,lon2
//! Trumpeldor Ave,32778480,35015270,32778630,35014080
//! Hagalil St,32778630,35014080,32780710,35012630
//! ```
//!
//! Out-of-range coordinates fail with [`RouteError::Geo`]; malformed rows
//! with [`RouteError::Parse`].

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::debug;

use gr_core::{GeoPoint, GeoSegment};

use crate::{RouteError, RouteResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    name: String,
    lat1: i32,
    lon1: i32,
    lat2: i32,
    lon2: i32,
}

impl SegmentRecord {
    fn into_segment(self) -> RouteResult<GeoSegment> {
        let p1 = GeoPoint::new(self.lat1, self.lon1)?;
        let p2 = GeoPoint::new(self.lat2, self.lon2)?;
        Ok(GeoSegment::new(self.name, p1, p2))
    }
}

// ── SegmentCatalog ────────────────────────────────────────────────────────────

/// An ordered list of segments indexed by first endpoint.
#[derive(Clone, Debug, Default)]
pub struct SegmentCatalog {
    segments: Vec<GeoSegment>,
    /// `p1` → positions in `segments`, ascending.
    by_start: FxHashMap<GeoPoint, Vec<usize>>,
}

impl SegmentCatalog {
    pub fn new(segments: Vec<GeoSegment>) -> Self {
        let mut by_start: FxHashMap<GeoPoint, Vec<usize>> = FxHashMap::default();
        for (i, seg) in segments.iter().enumerate() {
            by_start.entry(seg.p1()).or_default().push(i);
        }
        Self { segments, by_start }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GeoSegment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoSegment> {
        self.segments.iter()
    }

    /// Segments that may be appended to a chain ending at `point`, in
    /// catalog order.
    pub fn attachable_to(&self, point: GeoPoint) -> impl Iterator<Item = &GeoSegment> + '_ {
        self.by_start
            .get(&point)
            .into_iter()
            .flatten()
            .map(|&i| &self.segments[i])
    }

    /// This catalog plus the reverse of every non-degenerate segment, for
    /// networks where each listed road is two-way.
    pub fn with_reversed(&self) -> Self {
        let reversed = self
            .segments
            .iter()
            .filter(|s| !s.is_degenerate())
            .map(GeoSegment::reverse);
        Self::new(self.segments.iter().cloned().chain(reversed).collect())
    }
}

impl FromIterator<GeoSegment> for SegmentCatalog {
    fn from_iter<I: IntoIterator<Item = GeoSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SegmentCatalog {
    type Item = &'a GeoSegment;
    type IntoIter = std::slice::Iter<'a, GeoSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`SegmentCatalog`] from a CSV file.
pub fn load_catalog_csv(path: &Path) -> RouteResult<SegmentCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded in
/// the binary.
pub fn load_catalog_reader<R: Read>(reader: R) -> RouteResult<SegmentCatalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let segments = csv_reader
        .deserialize::<SegmentRecord>()
        .map(|row| {
            row.map_err(|e| RouteError::Parse(e.to_string()))?
                .into_segment()
        })
        .collect::<RouteResult<Vec<_>>>()?;

    debug!(segments = segments.len(), "loaded segment catalog");
    Ok(SegmentCatalog::new(segments))
}

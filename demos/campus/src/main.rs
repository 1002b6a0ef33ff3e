//! campus — end-to-end demo for the georoute crates.
//!
//! Loads a small embedded catalog of streets around the Technion campus,
//! grows a route the way an interactive front end would (always taking the
//! first attachable segment not used yet), then prints driving and walking
//! directions for it.
//!
//! Set `RUST_LOG=trace` to watch every append decide between growing the last
//! feature and starting a new one.

use std::collections::HashSet;
use std::io::Cursor;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gr_core::GeoSegment;
use gr_directions::{
    render_directions, render_directions_with, route_end_point, start_or_append,
    WalkingDirections,
};
use gr_route::{load_catalog_reader, Route, SegmentCatalog};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Facing north at the start.
const INITIAL_HEADING: f64 = 0.0;

// Millionths of a degree.  Yaffe Nof shares its start with the second
// Hagalil segment but comes later in the list, so the walk never takes it.
const CATALOG_CSV: &str = "\
name,lat1,lon1,lat2,lon2\n\
Trumpeldor Ave,32778480,35015270,32778630,35014080\n\
Trumpeldor Ave,32778630,35014080,32779200,35013000\n\
Hagalil St,32779200,35013000,32780710,35012630\n\
Hagalil St,32780710,35012630,32781800,35013900\n\
Yaffe Nof,32780710,35012630,32779000,35011000\n\
Einstein St,32781800,35013900,32783098,35014528\n\
Einstein St,32783098,35014528,32784200,35016800\n\
Moriah Ave,32784200,35016800,32782500,35019900\n\
";

// ── Route building ────────────────────────────────────────────────────────────

/// Greedy walk through `catalog` starting from its first segment.
fn walk_catalog(catalog: &SegmentCatalog) -> Result<Route> {
    let mut used: HashSet<&GeoSegment> = HashSet::new();
    let mut route: Option<Route> = None;
    let mut next = catalog.get(0);

    while let Some(segment) = next {
        used.insert(segment);
        let grown = start_or_append(route.as_ref(), segment.clone())
            .with_context(|| format!("appending {segment}"))?;
        let end = route_end_point(&grown);
        route = Some(grown);
        next = catalog.attachable_to(end).find(|s| !used.contains(s));
    }

    route.context("catalog is empty")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== campus — georoute directions demo ===");

    let catalog = load_catalog_reader(Cursor::new(CATALOG_CSV)).context("loading catalog")?;
    info!(segments = catalog.len(), "catalog loaded");

    let route = walk_catalog(&catalog)?;
    info!(
        features = route.feature_count(),
        segments = route.segments().count(),
        "route built"
    );

    println!("{route}");
    println!("Start {}  End {}  Length {:.3} km", route.start(), route.end(), route.length());
    println!();

    println!("Driving:");
    print!("{}", render_directions(&route, INITIAL_HEADING));
    println!();

    println!("Walking:");
    print!("{}", render_directions_with(&WalkingDirections, &route, INITIAL_HEADING));

    Ok(())
}

//! Unit tests for gr-route.
//!
//! All tests use hand-placed points a few hundred metres apart.

#[cfg(test)]
mod helpers {
    use gr_core::{GeoPoint, GeoSegment};

    pub const EPS: f64 = 1e-9;

    pub fn pt(lat: i32, lon: i32) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    /// Points (millionths):
    ///
    /// ```text
    ///   c ── d      a→b→c runs north, c→d east
    ///   |
    ///   b
    ///   |
    ///   a
    /// ```
    pub fn abcd() -> [GeoPoint; 4] {
        [pt(0, 0), pt(1_000, 0), pt(2_000, 0), pt(2_000, 1_000)]
    }

    pub fn seg(name: &str, p1: GeoPoint, p2: GeoPoint) -> GeoSegment {
        GeoSegment::new(name, p1, p2)
    }
}

// ── GeoFeature ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod feature {
    use super::helpers::{abcd, seg, EPS};
    use crate::{GeoFeature, RouteError};

    #[test]
    fn single_segment_feature() {
        let [a, b, ..] = abcd();
        let s = seg("Main St", a, b);
        let f = GeoFeature::new(s.clone());
        assert_eq!(f.name(), "Main St");
        assert_eq!(f.start(), a);
        assert_eq!(f.end(), b);
        assert_eq!(f.start_heading(), s.heading());
        assert_eq!(f.end_heading(), s.heading());
        assert_eq!(f.segment_count(), 1);
        assert!((f.length() - s.length()).abs() < EPS);
    }

    #[test]
    fn append_extends_end_only() {
        let [a, b, c, d] = abcd();
        let f = GeoFeature::new(seg("Main St", a, b))
            .append(seg("Main St", b, c))
            .unwrap()
            .append(seg("Main St", c, d))
            .unwrap();
        assert_eq!(f.start(), a);
        assert_eq!(f.end(), d);
        assert!(f.start_heading().unwrap().abs() < EPS); // north
        assert!((f.end_heading().unwrap() - 90.0).abs() < EPS); // east
        assert_eq!(f.segment_count(), 3);
    }

    #[test]
    fn append_leaves_receiver_untouched() {
        let [a, b, c, _] = abcd();
        let one = GeoFeature::new(seg("Main St", a, b));
        let two = one.append(seg("Main St", b, c)).unwrap();
        assert_eq!(one.segment_count(), 1);
        assert_eq!(one.end(), b);
        assert_eq!(two.segment_count(), 2);
        assert_ne!(one, two);
    }

    #[test]
    fn append_rejects_other_name() {
        let [a, b, c, _] = abcd();
        let f = GeoFeature::new(seg("Main St", a, b));
        let err = f.append(seg("Oak St", b, c)).unwrap_err();
        assert!(matches!(err, RouteError::NameMismatch { .. }));
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn append_rejects_gap() {
        let [a, b, c, d] = abcd();
        let f = GeoFeature::new(seg("Main St", a, b));
        let err = f.append(seg("Main St", c, d)).unwrap_err();
        match err {
            RouteError::Disconnected { end, start } => {
                assert_eq!(end, b);
                assert_eq!(start, c);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn length_is_sum_of_segments() {
        let [a, b, c, d] = abcd();
        let segs = [seg("Main St", a, b), seg("Main St", b, c), seg("Main St", c, d)];
        let expected: f64 = segs.iter().map(|s| s.length()).sum();
        let f = GeoFeature::from_segments(segs).unwrap();
        assert!((f.length() - expected).abs() < EPS);
    }

    #[test]
    fn from_segments_matches_appends() {
        let [a, b, c, _] = abcd();
        let built = GeoFeature::from_segments([seg("X", a, b), seg("X", b, c)]).unwrap();
        let appended = GeoFeature::new(seg("X", a, b)).append(seg("X", b, c)).unwrap();
        assert_eq!(built, appended);
        assert_eq!(built.length(), appended.length());
    }

    #[test]
    fn from_segments_empty() {
        let err = GeoFeature::from_segments(Vec::new()).unwrap_err();
        assert!(matches!(err, RouteError::Empty));
    }

    #[test]
    fn segments_iterator_restartable() {
        let [a, b, c, _] = abcd();
        let f = GeoFeature::from_segments([seg("X", a, b), seg("X", b, c)]).unwrap();
        let it = f.segments();
        let first_pass: Vec<_> = it.clone().collect();
        let second_pass: Vec<_> = it.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 2);
        assert_eq!(first_pass[1].p2(), c);
    }

    #[test]
    fn degenerate_segment_has_no_heading() {
        let [a, ..] = abcd();
        let f = GeoFeature::new(seg("Loop", a, a));
        assert_eq!(f.start_heading(), None);
        assert_eq!(f.length(), 0.0);
    }

    #[test]
    fn display_is_name() {
        let [a, b, ..] = abcd();
        assert_eq!(GeoFeature::new(seg("Main St", a, b)).to_string(), "Main St");
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use std::collections::HashSet;

    use super::helpers::{abcd, pt, seg, EPS};
    use crate::{Route, RouteError};

    fn main_then_oak() -> Route {
        let [a, b, c, d] = abcd();
        Route::new(seg("Main St", a, b))
            .append(seg("Main St", b, c))
            .unwrap()
            .append(seg("Oak St", c, d))
            .unwrap()
    }

    #[test]
    fn same_names_merge_into_two_features() {
        let [a, _, c, d] = abcd();
        let route = main_then_oak();
        assert_eq!(route.feature_count(), 2);

        let features: Vec<_> = route.features().collect();
        assert_eq!(features[0].name(), "Main St");
        assert_eq!(features[0].start(), a);
        assert_eq!(features[0].end(), c);
        assert_eq!(features[1].name(), "Oak St");
        assert_eq!(features[1].start(), c);
        assert_eq!(features[1].end(), d);
    }

    #[test]
    fn feature_count_follows_merge_rule() {
        let [a, b, c, d] = abcd();
        let r1 = Route::new(seg("Main St", a, b));
        let same = r1.append(seg("Main St", b, c)).unwrap();
        assert_eq!(same.feature_count(), r1.feature_count());
        let other = same.append(seg("Oak St", c, d)).unwrap();
        assert_eq!(other.feature_count(), same.feature_count() + 1);
    }

    #[test]
    fn name_can_return_after_a_different_feature() {
        let [a, b, c, d] = abcd();
        let route = Route::from_segments([
            seg("Main St", a, b),
            seg("Oak St", b, c),
            seg("Main St", c, d),
        ])
        .unwrap();
        let names: Vec<_> = route.features().map(|f| f.name()).collect();
        assert_eq!(names, ["Main St", "Oak St", "Main St"]);
    }

    #[test]
    fn append_never_mutates_receiver() {
        let [a, b, c, _] = abcd();
        let r1 = Route::new(seg("Main St", a, b));
        let before: Vec<_> = r1.segments().cloned().collect();

        let r2 = r1.append(seg("Main St", b, c)).unwrap();

        assert_eq!(r1.end(), b);
        assert_eq!(r1.segments().cloned().collect::<Vec<_>>(), before);
        assert_eq!(r2.end(), c);
        assert_eq!(r2.segments().count(), 2);
    }

    #[test]
    fn branching_from_one_route() {
        let [a, b, c, d] = abcd();
        let base = Route::new(seg("Main St", a, b));
        let left = base.append(seg("Main St", b, c)).unwrap();
        let right = base.append(seg("Elm St", b, d)).unwrap();
        assert_eq!(left.feature_count(), 1);
        assert_eq!(right.feature_count(), 2);
        assert_eq!(base.segments().count(), 1);
    }

    #[test]
    fn disconnected_append_rejected() {
        let [a, b, c, d] = abcd();
        let r = Route::new(seg("Main St", a, b));
        let err = r.append(seg("Oak St", c, d)).unwrap_err();
        assert!(matches!(err, RouteError::Disconnected { .. }));
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn segments_flatten_in_append_order() {
        let [a, b, c, d] = abcd();
        let expected = vec![seg("Main St", a, b), seg("Main St", b, c), seg("Oak St", c, d)];
        let route = Route::from_segments(expected.clone()).unwrap();
        let got: Vec<_> = route.segments().cloned().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn derived_values() {
        let [a, _, _, d] = abcd();
        let route = main_then_oak();
        assert_eq!(route.start(), a);
        assert_eq!(route.end(), d);
        assert!(route.start_heading().unwrap().abs() < EPS);
        assert!((route.end_heading().unwrap() - 90.0).abs() < EPS);

        let seg_sum: f64 = route.segments().map(|s| s.length()).sum();
        assert!((route.length() - seg_sum).abs() < EPS);
    }

    #[test]
    fn structural_equality_and_hash() {
        let r1 = main_then_oak();
        let r2 = main_then_oak();
        assert_eq!(r1, r2);

        let [a, b, ..] = abcd();
        let short = Route::new(seg("Main St", a, b));
        assert_ne!(r1, short);

        let set: HashSet<_> = [r1, r2, short].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn same_points_different_grouping_differ() {
        let [a, b, c, _] = abcd();
        let merged = Route::from_segments([seg("X", a, b), seg("X", b, c)]).unwrap();
        let split = Route::from_segments([seg("X", a, b), seg("Y", b, c)]).unwrap();
        assert_ne!(merged, split);
    }

    #[test]
    fn from_segments_empty() {
        assert!(matches!(Route::from_segments(Vec::new()), Err(RouteError::Empty)));
    }

    #[test]
    fn display() {
        assert_eq!(main_then_oak().to_string(), "Route from Main St to Oak St");
    }

    #[test]
    fn zero_length_leg() {
        let p = pt(10, 10);
        let route = Route::new(seg("Here", p, p));
        assert_eq!(route.length(), 0.0);
        assert_eq!(route.start_heading(), None);
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use std::io::Cursor;

    use super::helpers::{abcd, pt, seg};
    use crate::{load_catalog_reader, RouteError, SegmentCatalog};

    const CSV: &str = "\
name,lat1,lon1,lat2,lon2
Main St,0,0,1000,0
Main St,1000,0,2000,0
Oak St,2000,0,2000,1000
Elm St, 1000, 0, 1000, 1000
";

    #[test]
    fn loads_rows_in_order() {
        let cat = load_catalog_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(cat.len(), 4);
        let [a, b, ..] = abcd();
        assert_eq!(cat.get(0), Some(&seg("Main St", a, b)));
        assert_eq!(cat.get(3).unwrap().name(), "Elm St");
    }

    #[test]
    fn attachable_in_catalog_order() {
        let cat = load_catalog_reader(Cursor::new(CSV)).unwrap();
        let [_, b, c, _] = abcd();
        let names: Vec<_> = cat.attachable_to(b).map(|s| s.name()).collect();
        assert_eq!(names, ["Main St", "Elm St"]);
        assert_eq!(cat.attachable_to(c).count(), 1);
        assert_eq!(cat.attachable_to(pt(-5, -5)).count(), 0);
    }

    #[test]
    fn out_of_range_coordinate() {
        let csv = "name,lat1,lon1,lat2,lon2\nBad,95000000,0,0,0\n";
        let err = load_catalog_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RouteError::Geo(_)));
        assert!(!err.is_precondition_violation());
    }

    #[test]
    fn malformed_row() {
        let csv = "name,lat1,lon1,lat2,lon2\nBad,north,0,0,0\n";
        assert!(matches!(load_catalog_reader(Cursor::new(csv)), Err(RouteError::Parse(_))));
    }

    #[test]
    fn with_reversed_adds_two_way_segments() {
        let [a, b, ..] = abcd();
        let p = pt(7, 7);
        let cat: SegmentCatalog = [seg("Main St", a, b), seg("Dot", p, p)].into_iter().collect();
        let both = cat.with_reversed();
        assert_eq!(both.len(), 3); // degenerate segment not duplicated
        let back: Vec<_> = both.attachable_to(b).collect();
        assert_eq!(back, [&seg("Main St", b, a)]);
    }

    #[test]
    fn empty_catalog() {
        let cat = load_catalog_reader(Cursor::new("name,lat1,lon1,lat2,lon2\n")).unwrap();
        assert!(cat.is_empty());
        assert_eq!((&cat).into_iter().count(), 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use gr_core::{GeoPoint, GeoSegment};

    use crate::Route;

    const NAMES: [&str; 3] = ["Main St", "Oak St", "Elm St"];

    /// Chained walk of 1..12 segments with names drawn from a small pool so
    /// runs of equal names are common.
    fn arb_walk() -> impl Strategy<Value = Vec<GeoSegment>> {
        prop::collection::vec((0..NAMES.len(), -5_000i32..5_000, -5_000i32..5_000), 1..12)
            .prop_map(|steps| {
                let mut at = GeoPoint::new(32_000_000, 35_000_000).unwrap();
                steps
                    .into_iter()
                    .map(|(name, dlat, dlon)| {
                        let next =
                            GeoPoint::new(at.latitude() + dlat, at.longitude() + dlon).unwrap();
                        let s = GeoSegment::new(NAMES[name], at, next);
                        at = next;
                        s
                    })
                    .collect()
            })
    }

    fn name_runs(segs: &[GeoSegment]) -> usize {
        1 + segs.windows(2).filter(|w| w[0].name() != w[1].name()).count()
    }

    proptest! {
        #[test]
        fn features_are_name_runs(walk in arb_walk()) {
            let route = Route::from_segments(walk.clone()).unwrap();
            prop_assert_eq!(route.feature_count(), name_runs(&walk));
            let names: Vec<_> = route.features().map(|f| f.name()).collect();
            prop_assert!(names.windows(2).all(|w| w[0] != w[1]));
        }

        #[test]
        fn segments_round_trip(walk in arb_walk()) {
            let route = Route::from_segments(walk.clone()).unwrap();
            let back: Vec<GeoSegment> = route.segments().cloned().collect();
            prop_assert_eq!(back, walk);
        }

        #[test]
        fn feature_lengths_sum_segments(walk in arb_walk()) {
            let route = Route::from_segments(walk).unwrap();
            for f in route.features() {
                let sum: f64 = f.segments().map(GeoSegment::length).sum();
                prop_assert!((f.length() - sum).abs() < 1e-9);
            }
        }

        #[test]
        fn append_preserves_prefix(walk in arb_walk()) {
            let mut prefixes: Vec<Route> = Vec::new();
            let mut iter = walk.iter().cloned();
            let mut route = Route::new(iter.next().unwrap());
            for s in iter {
                let next = route.append(s).unwrap();
                prefixes.push(route);
                route = next;
            }
            for (i, p) in prefixes.iter().enumerate() {
                prop_assert_eq!(p.segments().count(), i + 1);
                prop_assert_eq!(p.end(), walk[i].p2());
            }
        }
    }
}

// ── Serde (feature = "serde") ────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serde {
    use gr_core::{GeoPoint, GeoSegment};

    use super::helpers::{abcd, pt, seg};
    use crate::{GeoFeature, Route};

    /// `[Main St a→b, Oak St c→d]`: the second segment does not start at `b`.
    fn gapped_json() -> String {
        let [a, b, c, d] = abcd();
        serde_json::to_string(&vec![seg("Main St", a, b), seg("Oak St", c, d)]).unwrap()
    }

    #[test]
    fn out_of_range_point_rejected() {
        let err = serde_json::from_str::<GeoPoint>(r#"{"lat":91000000,"lon":0}"#).unwrap_err();
        assert!(err.to_string().contains("latitude 91000000"), "{err}");
        let ok: GeoPoint = serde_json::from_str(r#"{"lat":1000,"lon":-2000}"#).unwrap();
        assert_eq!(ok, pt(1_000, -2_000));
    }

    #[test]
    fn segment_recomputes_derived_fields() {
        let [a, b, ..] = abcd();
        let original = seg("Main St", a, b);
        let back: GeoSegment =
            serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
        assert_eq!(back, original);
        assert_eq!(back.length(), original.length());
        assert_eq!(back.heading(), original.heading());
    }

    #[test]
    fn disconnected_list_rejected() {
        let json = gapped_json();
        let route_err = serde_json::from_str::<Route>(&json).unwrap_err();
        assert!(route_err.to_string().contains("chain ends at"), "{route_err}");

        let [a, b, c, d] = abcd();
        let same_name =
            serde_json::to_string(&vec![seg("Main St", a, b), seg("Main St", c, d)]).unwrap();
        let feature_err = serde_json::from_str::<GeoFeature>(&same_name).unwrap_err();
        assert!(feature_err.to_string().contains("chain ends at"), "{feature_err}");
    }

    #[test]
    fn route_round_trips() {
        let [a, b, c, d] = abcd();
        let route = Route::from_segments([
            seg("Main St", a, b),
            seg("Main St", b, c),
            seg("Oak St", c, d),
        ])
        .unwrap();
        let back: Route = serde_json::from_str(&serde_json::to_string(&route).unwrap()).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn flat_list_merges_same_named_neighbours() {
        let [a, b, c, d] = abcd();
        let json = serde_json::to_string(&vec![
            seg("Main St", a, b),
            seg("Main St", b, c),
            seg("Oak St", c, d),
        ])
        .unwrap();
        let route: Route = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = route.features().map(|f| f.name()).collect();
        assert_eq!(names, ["Main St", "Oak St"]);
        assert_eq!(route.features().next().unwrap().segment_count(), 2);
    }
}

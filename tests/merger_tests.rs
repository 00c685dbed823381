use std::collections::HashMap;

use pathscope::as_path::{ASPath, ASN};
use pathscope::route_merger::MergedRouteSet;
use pathscope::route_sources::{ASNInfo, Route, SourceFetch};

fn route(asns: Vec<ASN>) -> Route {
    Route {
        prefix: "10.0.0.0/24".to_string(),
        path: ASPath::new(asns),
        neighbor_ip: String::new(),
        origin: "IGP".to_string(),
        asn_info: HashMap::new(),
    }
}

fn route_with_descr(asns: Vec<ASN>, asn: ASN, descr: &str) -> Route {
    let mut r = route(asns);
    r.asn_info.insert(
        asn,
        ASNInfo {
            country: String::new(),
            descr: descr.to_string(),
            org: None,
        },
    );
    r
}

fn fetch(source: &str, routes: Vec<Route>) -> SourceFetch {
    SourceFetch {
        source: source.to_string(),
        reported_count: routes.len(),
        routes,
    }
}

#[test]
fn identical_path_across_sources_kept_once() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", vec![route(vec![3356, 65000])]));
    merged.absorb_secondary(fetch("looking glass", vec![route(vec![3356, 65000])]));

    assert_eq!(merged.total_paths(), 1);
    // Per-source raw counts are unaffected by dedup
    assert_eq!(
        merged.source_counts,
        vec![
            ("route API".to_string(), Some(1)),
            ("looking glass".to_string(), Some(1)),
        ]
    );
}

#[test]
fn secondary_repeating_all_primary_is_idempotent() {
    let a_routes = vec![route(vec![3356, 65000]), route(vec![174, 65000])];
    let b_routes = vec![route(vec![3356, 65000]), route(vec![174, 65000])];

    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", a_routes));
    merged.absorb_secondary(fetch("looking glass", b_routes));

    assert_eq!(merged.total_paths(), 2);
}

#[test]
fn distinct_secondary_routes_are_appended() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", vec![route(vec![3356, 65000])]));
    merged.absorb_secondary(fetch(
        "looking glass",
        vec![route(vec![174, 65000]), route(vec![1299, 65000])],
    ));

    assert_eq!(merged.total_paths(), 3);
}

#[test]
fn identity_is_the_raw_undeduplicated_sequence() {
    // A prepended variant of the same cleaned path is still a distinct key
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", vec![route(vec![100, 100, 65000])]));
    merged.absorb_secondary(fetch("looking glass", vec![route(vec![100, 65000])]));

    assert_eq!(merged.total_paths(), 2);
}

#[test]
fn primary_routes_are_appended_unconditionally() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch(
        "route API",
        vec![route(vec![3356, 65000]), route(vec![3356, 65000])],
    ));

    assert_eq!(merged.total_paths(), 2);
}

#[test]
fn secondary_internal_duplicates_are_dropped() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", vec![]));
    merged.absorb_secondary(fetch(
        "looking glass",
        vec![route(vec![174, 65000]), route(vec![174, 65000])],
    ));

    assert_eq!(merged.total_paths(), 1);
}

#[test]
fn metadata_is_last_write_wins_across_accepted_routes() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch(
        "route API",
        vec![route_with_descr(vec![3356, 65000], 65000, "First")],
    ));
    merged.absorb_secondary(fetch(
        "looking glass",
        vec![route_with_descr(vec![174, 65000], 65000, "Second")],
    ));

    assert_eq!(merged.asn_info.get(&65000).unwrap().descr, "Second");
}

#[test]
fn discarded_route_contributes_no_metadata() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch(
        "route API",
        vec![route_with_descr(vec![3356, 65000], 65000, "First")],
    ));
    // Same raw key: the route and its metadata are both discarded
    merged.absorb_secondary(fetch(
        "looking glass",
        vec![route_with_descr(vec![3356, 65000], 65000, "Second")],
    ));

    assert_eq!(merged.total_paths(), 1);
    assert_eq!(merged.asn_info.get(&65000).unwrap().descr, "First");
}

#[test]
fn unavailable_source_recorded_without_count() {
    let mut merged = MergedRouteSet::new();
    merged.record_unavailable("route API");
    merged.absorb_secondary(fetch("looking glass", vec![route(vec![174, 65000])]));

    assert_eq!(merged.total_paths(), 1);
    assert_eq!(merged.source_counts[0], ("route API".to_string(), None));
    assert_eq!(
        merged.source_counts[1],
        ("looking glass".to_string(), Some(1))
    );
}

#[test]
fn both_sources_empty_yields_empty_set() {
    let mut merged = MergedRouteSet::new();
    merged.absorb_primary(fetch("route API", vec![]));
    merged.absorb_secondary(fetch("looking glass", vec![]));

    assert!(merged.is_empty());
    assert_eq!(merged.total_paths(), 0);
}

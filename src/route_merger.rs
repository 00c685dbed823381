use std::collections::{HashMap, HashSet};

use crate::as_path::ASN;
use crate::route_sources::{ASNInfo, Route, SourceFetch};

/// Deduplicated union of the routes observed by all sources.
///
/// Route identity is the raw comma-joined ASN sequence, exactly as
/// received. The metadata map is the union across accepted routes, later
/// entries overwriting earlier ones on collision.
#[derive(Debug, Clone, Default)]
pub struct MergedRouteSet {
    pub routes: Vec<Route>,
    pub asn_info: HashMap<ASN, ASNInfo>,
    /// Per-source reported route counts, in processing order. `None`
    /// records a source that was unavailable.
    pub source_counts: Vec<(String, Option<usize>)>,
}

impl MergedRouteSet {
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of unique merged paths; the percentage denominator.
    pub fn total_paths(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Absorb the primary source: every route is appended as received.
    pub fn absorb_primary(&mut self, fetch: SourceFetch) {
        self.source_counts
            .push((fetch.source, Some(fetch.reported_count)));
        for route in fetch.routes {
            self.absorb_metadata(&route);
            self.routes.push(route);
        }
    }

    /// Absorb a further source: a route is appended only when no route in
    /// the set already carries its raw-sequence key. Discarded routes
    /// contribute no metadata.
    pub fn absorb_secondary(&mut self, fetch: SourceFetch) {
        self.source_counts
            .push((fetch.source, Some(fetch.reported_count)));

        let mut seen: HashSet<String> = self.routes.iter().map(|r| r.path.key()).collect();
        for route in fetch.routes {
            let key = route.path.key();
            if seen.contains(&key) {
                continue;
            }
            seen.insert(key);
            self.absorb_metadata(&route);
            self.routes.push(route);
        }
    }

    /// Record a source that produced nothing (failed or timed out).
    pub fn record_unavailable(&mut self, source: &str) {
        self.source_counts.push((source.to_string(), None));
    }

    fn absorb_metadata(&mut self, route: &Route) {
        for (&asn, info) in &route.asn_info {
            self.asn_info.insert(asn, info.clone());
        }
    }
}

use std::thread;

use crate::as_path::normalize;
use crate::classifier::TierTallies;
use crate::report::{build_report, no_data_report};
use crate::route_merger::MergedRouteSet;
use crate::route_sources::{LookingGlassSource, RouteApiSource, RouteSource, SourceFetch};
use crate::shared::SourceError;

/// Runs one query end to end: fetch both sources concurrently, merge the
/// results, classify every path, rank the tallies, render the report.
pub struct QueryEngine {
    primary: Box<dyn RouteSource>,
    secondary: Box<dyn RouteSource>,
}

impl QueryEngine {
    pub fn new() -> Self {
        QueryEngine {
            primary: Box::new(RouteApiSource::new()),
            secondary: Box::new(LookingGlassSource::new()),
        }
    }

    pub fn with_sources(primary: Box<dyn RouteSource>, secondary: Box<dyn RouteSource>) -> Self {
        QueryEngine { primary, secondary }
    }

    /// Fetch both sources in parallel, capturing each outcome separately.
    /// A failure or panic in one task never cancels the other.
    fn fetch_both(
        &self,
        prefix: &str,
    ) -> (
        Result<SourceFetch, SourceError>,
        Result<SourceFetch, SourceError>,
    ) {
        thread::scope(|scope| {
            let primary_task = scope.spawn(|| self.primary.fetch(prefix));
            let secondary_task = scope.spawn(|| self.secondary.fetch(prefix));

            let primary = primary_task.join().unwrap_or_else(|_| {
                Err(SourceError::new(self.primary.name(), "fetch task panicked"))
            });
            let secondary = secondary_task.join().unwrap_or_else(|_| {
                Err(SourceError::new(self.secondary.name(), "fetch task panicked"))
            });
            (primary, secondary)
        })
    }

    /// Collect and merge the route sets for a prefix. Per-source failures
    /// are reported and recorded, never propagated.
    pub fn collect(&self, prefix: &str) -> MergedRouteSet {
        let (primary, secondary) = self.fetch_both(prefix);
        let mut merged = MergedRouteSet::new();

        match primary {
            Ok(fetch) => merged.absorb_primary(fetch),
            Err(err) => {
                eprintln!("{}", err);
                merged.record_unavailable(self.primary.name());
            }
        }
        match secondary {
            Ok(fetch) => merged.absorb_secondary(fetch),
            Err(err) => {
                eprintln!("{}", err);
                merged.record_unavailable(self.secondary.name());
            }
        }

        merged
    }

    /// Run one full query and return the report text.
    pub fn run(&self, prefix: &str) -> String {
        let merged = self.collect(prefix);
        if merged.is_empty() {
            return no_data_report(prefix);
        }

        let mut tallies = TierTallies::new();
        for route in &merged.routes {
            let normalized = normalize(&route.path, &merged.asn_info);
            tallies.classify(&normalized);
        }

        build_report(prefix, &merged, &tallies)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

use crate::classifier::{Bucket, TierTallies};
use crate::route_merger::MergedRouteSet;
use crate::shared::Tier;

/// Most entries kept per tier.
pub const MAX_TIER_ENTRIES: usize = 5;

/// Most entries kept in the whole report. Lower than four full tiers, so
/// later tiers can be dropped even when under their own cap.
pub const MAX_REPORT_ENTRIES: usize = 15;

/// One ranked entry of the final report.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
    pub tier: Tier,
}

/// Turn one bucket's tallies into ranked entries: percentage of all merged
/// paths, stable-sorted descending, truncated to `MAX_TIER_ENTRIES`.
pub fn rank_bucket(bucket: &Bucket, tier: Tier, total_paths: usize) -> Vec<PathInfo> {
    let mut ranked: Vec<PathInfo> = bucket
        .entries()
        .iter()
        .map(|(label, count)| PathInfo {
            label: label.clone(),
            count: *count,
            percentage: percentage(*count, total_paths),
            tier,
        })
        .collect();

    // Stable sort: ties keep first-seen order
    ranked.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(MAX_TIER_ENTRIES);
    ranked
}

fn percentage(count: u32, total_paths: usize) -> f64 {
    if total_paths == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total_paths as f64
}

/// Rank every tier and concatenate in fixed order, truncating the combined
/// list to `MAX_REPORT_ENTRIES`.
pub fn ranked_entries(tallies: &TierTallies, total_paths: usize) -> Vec<PathInfo> {
    let mut entries = Vec::new();
    entries.extend(rank_bucket(&tallies.direct, Tier::Direct, total_paths));
    entries.extend(rank_bucket(&tallies.tier1, Tier::Tier1, total_paths));
    entries.extend(rank_bucket(&tallies.tier2, Tier::Tier2, total_paths));
    entries.extend(rank_bucket(&tallies.tier3, Tier::Tier3, total_paths));
    entries.truncate(MAX_REPORT_ENTRIES);
    entries
}

/// Render the final multi-line report.
pub fn build_report(prefix: &str, merged: &MergedRouteSet, tallies: &TierTallies) -> String {
    let total = merged.total_paths();

    let counts = merged
        .source_counts
        .iter()
        .map(|(source, count)| match count {
            Some(n) => format!("{}: {}", source, n),
            None => format!("{}: unavailable", source),
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = Vec::new();
    lines.push(format!("AS path summary for {}", prefix));
    lines.push(format!("Unique paths: {} ({})", total, counts));
    lines.push(String::new());

    for entry in ranked_entries(tallies, total) {
        lines.push(format!(
            "[{}] {} - {} paths ({:.1}%)",
            entry.tier, entry.label, entry.count, entry.percentage
        ));
    }

    lines.join("\n")
}

/// Report body for a query that found no usable route data.
pub fn no_data_report(prefix: &str) -> String {
    format!("No routes found for {}", prefix)
}

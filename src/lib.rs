// Re-export all public modules
pub mod shared;
pub mod operators;
pub mod as_path;
pub mod classifier;
pub mod route_sources;
pub mod route_merger;
pub mod report;
pub mod prefix_resolver;
pub mod engine;

// Re-export commonly used types at the crate root
pub use as_path::{normalize, ASPath, NormalizedPath, ASN};
pub use classifier::{Bucket, TierTallies};
pub use engine::QueryEngine;
pub use report::{build_report, rank_bucket, PathInfo};
pub use route_merger::MergedRouteSet;
pub use route_sources::{ASNInfo, Route, RouteSource, SourceFetch};
pub use shared::{SourceError, Tier, PATH_END_MARKER};

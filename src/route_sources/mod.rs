pub mod looking_glass;
pub mod route_api;

use std::collections::HashMap;

use crate::as_path::{ASN, ASPath};
use crate::shared::SourceError;

pub use looking_glass::LookingGlassSource;
pub use route_api::RouteApiSource;

/// Provider-supplied metadata for one ASN.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ASNInfo {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub descr: String,
    #[serde(default)]
    pub org: Option<String>,
}

/// One observed route: a single AS path plus the metadata fragment the
/// provider attached to it.
#[derive(Debug, Clone)]
pub struct Route {
    pub prefix: String,
    pub path: ASPath,
    pub neighbor_ip: String,
    pub origin: String,
    pub asn_info: HashMap<ASN, ASNInfo>,
}

/// What one provider answered for a query: the route count it reported for
/// itself plus the parsed routes.
#[derive(Debug, Clone)]
pub struct SourceFetch {
    pub source: String,
    pub reported_count: usize,
    pub routes: Vec<Route>,
}

/// A provider of observed routes for a prefix.
///
/// Implementations reconcile whatever shape the provider answers in into
/// `Route` records, so the merger and classifier stay provider-agnostic.
pub trait RouteSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch(&self, prefix: &str) -> Result<SourceFetch, SourceError>;
}

use std::collections::HashMap;

use crate::operators::resolve_name;
use crate::route_sources::ASNInfo;
use crate::shared::PATH_END_MARKER;

pub type ASN = u32;

/// One observed AS path from a vantage point to the originating network.
/// Immutable once parsed; the last element is the destination network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ASPath {
    pub asns: Vec<ASN>,
    pub path_type: String,
}

impl ASPath {
    pub fn new(asns: Vec<ASN>) -> Self {
        ASPath {
            asns,
            path_type: "AS_SEQUENCE".to_string(),
        }
    }

    /// Identity key used by the merger: the raw sequence, comma-joined,
    /// without any deduplication.
    pub fn key(&self) -> String {
        self.asns
            .iter()
            .map(|asn| asn.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A path with adjacent repeats collapsed, alongside the display name of
/// every remaining hop.
#[derive(Debug, Clone)]
pub struct NormalizedPath {
    pub asns: Vec<ASN>,
    pub names: Vec<String>,
}

impl NormalizedPath {
    pub fn len(&self) -> usize {
        self.asns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asns.is_empty()
    }
}

/// Collapse runs of consecutive identical ASNs, resolve each remaining hop
/// to a display name, and overwrite the final name with the END marker.
///
/// Only adjacent repeats are removed (prepend inflation by one network);
/// an ASN that reappears later in the path is kept.
pub fn normalize(path: &ASPath, asn_info: &HashMap<ASN, ASNInfo>) -> NormalizedPath {
    let mut deduped: Vec<ASN> = Vec::with_capacity(path.asns.len());
    for (i, &asn) in path.asns.iter().enumerate() {
        if path.asns.get(i + 1) == Some(&asn) {
            continue;
        }
        deduped.push(asn);
    }

    let mut names: Vec<String> = deduped
        .iter()
        .map(|&asn| resolve_name(asn, asn_info))
        .collect();
    if let Some(last) = names.last_mut() {
        *last = PATH_END_MARKER.to_string();
    }

    NormalizedPath {
        asns: deduped,
        names,
    }
}

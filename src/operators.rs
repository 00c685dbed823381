use std::collections::HashMap;

use crate::as_path::ASN;
use crate::route_sources::ASNInfo;

lazy_static::lazy_static! {
    /// Curated table of well-known transit, cloud, and hosting operators.
    /// Read-only after initialization; it outranks provider-supplied text
    /// so display names stay stable across queries.
    pub static ref OPERATOR_NAMES: HashMap<ASN, &'static str> = {
        let mut m = HashMap::new();
        // Global transit carriers
        m.insert(174, "Cogent");
        m.insert(209, "CenturyLink");
        m.insert(286, "KPN");
        m.insert(701, "Verizon");
        m.insert(1239, "Sprint");
        m.insert(1273, "Vodafone");
        m.insert(1299, "Arelion");
        m.insert(2914, "NTT");
        m.insert(3257, "GTT");
        m.insert(3320, "Deutsche Telekom");
        m.insert(3356, "Lumen");
        m.insert(3491, "PCCW");
        m.insert(4637, "Telstra");
        m.insert(5511, "Orange");
        m.insert(6453, "Tata");
        m.insert(6461, "Zayo");
        m.insert(6762, "Sparkle");
        m.insert(6830, "Liberty Global");
        m.insert(6939, "Hurricane Electric");
        m.insert(7018, "AT&T");
        m.insert(7922, "Comcast");
        m.insert(9002, "RETN");
        m.insert(12956, "Telefonica");
        // Cloud and content platforms
        m.insert(2906, "Netflix");
        m.insert(8075, "Microsoft");
        m.insert(13335, "Cloudflare");
        m.insert(14618, "Amazon");
        m.insert(15169, "Google");
        m.insert(16509, "Amazon");
        m.insert(20940, "Akamai");
        m.insert(32934, "Meta");
        m.insert(54113, "Fastly");
        // Hosting providers
        m.insert(14061, "DigitalOcean");
        m.insert(16276, "OVH");
        m.insert(20473, "Vultr");
        m.insert(24940, "Hetzner");
        m.insert(63949, "Linode");
        m
    };
}

/// Corporate suffix tokens stripped from the end of derived names.
const CORPORATE_SUFFIXES: [&str; 9] = [
    "AS", "Ltd", "Ltd.", "Inc", "Inc.", "Corp", "Corp.", "Limited", "Corporation",
];

/// True when the ASN appears in the curated operator table.
pub fn is_known_operator(asn: ASN) -> bool {
    OPERATOR_NAMES.contains_key(&asn)
}

/// Resolve an ASN to a display name.
///
/// Priority order:
/// 1. the curated operator table,
/// 2. a non-empty provider-supplied organization name, verbatim,
/// 3. a name derived from the provider's free-text description,
/// 4. the ASN itself as a decimal string.
pub fn resolve_name(asn: ASN, asn_info: &HashMap<ASN, ASNInfo>) -> String {
    if let Some(name) = OPERATOR_NAMES.get(&asn) {
        return (*name).to_string();
    }

    if let Some(info) = asn_info.get(&asn) {
        if let Some(org) = &info.org {
            if !org.is_empty() {
                return org.clone();
            }
        }
        if !info.descr.is_empty() {
            return name_from_descr(&info.descr);
        }
    }

    asn.to_string()
}

/// Derive a display name from a registry description: keep what precedes
/// the first comma, then what precedes the first hyphen, then drop a
/// trailing corporate suffix token.
fn name_from_descr(descr: &str) -> String {
    let base = descr.split(',').next().unwrap_or("");
    let base = base.split('-').next().unwrap_or("");

    let mut tokens: Vec<&str> = base.split_whitespace().collect();
    if let Some(last) = tokens.last() {
        if CORPORATE_SUFFIXES
            .iter()
            .any(|suffix| suffix.eq_ignore_ascii_case(last))
        {
            tokens.pop();
        }
    }
    tokens.join(" ")
}

// External crate for lazy static initialization
extern crate lazy_static;

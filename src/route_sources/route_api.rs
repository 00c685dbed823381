use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::as_path::{ASN, ASPath};
use crate::shared::SourceError;

use super::{ASNInfo, Route, RouteSource, SourceFetch};

const DEFAULT_API_URL: &str = "https://api.routeviews.org/v1/prefix";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Adapter for the JSON route-collector API.
///
/// The API answers `{count, response: [route]}` where each route carries
/// its own AS path and a per-route `asninfo` object keyed by ASN string.
pub struct RouteApiSource {
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    count: usize,
    #[serde(default)]
    response: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    prefix: String,
    aspath: Option<ApiPath>,
    #[serde(default)]
    neighborip: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    asninfo: HashMap<String, ASNInfo>,
}

#[derive(Debug, Deserialize)]
struct ApiPath {
    #[serde(rename = "type", default)]
    path_type: String,
    #[serde(default)]
    asns: Vec<ASN>,
}

impl RouteApiSource {
    pub fn new() -> Self {
        RouteApiSource {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    fn fetch_body(&self, prefix: &str) -> Result<String, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SourceError::new(self.name(), e.to_string()))?;

        let url = format!("{}/{}", self.api_url, prefix);
        let response = client
            .get(&url)
            .send()
            .map_err(|e| SourceError::new(self.name(), e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::new(
                self.name(),
                format!("HTTP {} from {}", response.status(), url),
            ));
        }

        response
            .text()
            .map_err(|e| SourceError::new(self.name(), e.to_string()))
    }

    fn parse_response(&self, body: &str) -> Result<SourceFetch, SourceError> {
        let api: ApiResponse = serde_json::from_str(body)
            .map_err(|e| SourceError::new(self.name(), format!("bad JSON payload: {}", e)))?;

        let mut routes = Vec::with_capacity(api.response.len());
        for raw in api.response {
            // A route without a usable AS path carries no signal
            let aspath = match raw.aspath {
                Some(path) => path,
                None => continue,
            };

            let mut asn_info = HashMap::new();
            for (asn_str, info) in raw.asninfo {
                if let Ok(asn) = asn_str.parse::<ASN>() {
                    asn_info.insert(asn, info);
                }
            }

            routes.push(Route {
                prefix: raw.prefix,
                path: ASPath {
                    asns: aspath.asns,
                    path_type: aspath.path_type,
                },
                neighbor_ip: raw.neighborip,
                origin: raw.origin,
                asn_info,
            });
        }

        Ok(SourceFetch {
            source: self.name().to_string(),
            reported_count: api.count,
            routes,
        })
    }
}

impl RouteSource for RouteApiSource {
    fn name(&self) -> &'static str {
        "route API"
    }

    fn fetch(&self, prefix: &str) -> Result<SourceFetch, SourceError> {
        let body = self.fetch_body(prefix)?;
        self.parse_response(&body)
    }
}

impl Default for RouteApiSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "count": 3,
        "response": [
            {
                "prefix": "10.1.0.0/16",
                "aspath": {"type": "AS_SEQUENCE", "asns": [3356, 3356, 65000]},
                "neighborip": "192.0.2.1",
                "origin": "IGP",
                "asninfo": {
                    "3356": {"country": "US", "descr": "LEVEL3 - Level 3 Parent, LLC", "org": "Lumen Technologies"},
                    "65000": {"country": "", "descr": "EXAMPLE-AS"}
                }
            },
            {
                "prefix": "10.1.0.0/16",
                "aspath": {"type": "AS_SEQUENCE", "asns": [174, 65000]},
                "neighborip": "192.0.2.9",
                "origin": "IGP",
                "asninfo": {}
            },
            {
                "prefix": "10.1.0.0/16",
                "neighborip": "192.0.2.20",
                "origin": "IGP",
                "asninfo": {}
            }
        ]
    }"#;

    #[test]
    fn parses_routes_and_metadata() {
        let source = RouteApiSource::new();
        let fetch = source.parse_response(FIXTURE).unwrap();

        assert_eq!(fetch.reported_count, 3);
        // The pathless third route is dropped
        assert_eq!(fetch.routes.len(), 2);

        let first = &fetch.routes[0];
        assert_eq!(first.path.asns, vec![3356, 3356, 65000]);
        assert_eq!(first.path.path_type, "AS_SEQUENCE");
        assert_eq!(first.neighbor_ip, "192.0.2.1");
        assert_eq!(first.origin, "IGP");

        let info = first.asn_info.get(&3356).unwrap();
        assert_eq!(info.org.as_deref(), Some("Lumen Technologies"));
        assert_eq!(info.country, "US");
        assert!(first.asn_info.get(&65000).unwrap().org.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let source = RouteApiSource::new();
        assert!(source.parse_response("not json").is_err());
    }

    #[test]
    fn tolerates_missing_fields() {
        let source = RouteApiSource::new();
        let fetch = source.parse_response(r#"{"count": 0, "response": []}"#).unwrap();
        assert_eq!(fetch.reported_count, 0);
        assert!(fetch.routes.is_empty());
    }
}

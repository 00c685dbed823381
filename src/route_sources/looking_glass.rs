use std::collections::HashMap;
use std::time::Duration;

use scraper::{Html, Selector};

use crate::as_path::{ASN, ASPath};
use crate::shared::SourceError;

use super::{ASNInfo, Route, RouteSource, SourceFetch};

const DEFAULT_BASE_URL: &str = "https://glass.routeviews.org/net";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Adapter for the HTML looking glass.
///
/// Each observed path is one `div.path-entry`; its hops are `a.asn`
/// anchors whose text is `AS<number>` and whose title attribute holds the
/// registry description. Hops are taken in document order.
pub struct LookingGlassSource {
    base_url: String,
}

impl LookingGlassSource {
    pub fn new() -> Self {
        LookingGlassSource {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    fn fetch_body(&self, prefix: &str) -> Result<String, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SourceError::new(self.name(), e.to_string()))?;

        let url = format!("{}/{}", self.base_url, prefix);
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

    fn parse_document(&self, prefix: &str, body: &str) -> SourceFetch {
        let document = Html::parse_document(body);
        let path_selector = Selector::parse("div.path-entry").unwrap();
        let asn_selector = Selector::parse("a.asn").unwrap();

        let mut routes = Vec::new();
        for entry in document.select(&path_selector) {
            let mut asns: Vec<ASN> = Vec::new();
            let mut asn_info: HashMap<ASN, ASNInfo> = HashMap::new();

            for anchor in entry.select(&asn_selector) {
                let text = anchor.text().collect::<String>();
                let asn = match text.trim().trim_start_matches("AS").parse::<ASN>() {
                    Ok(asn) => asn,
                    Err(_) => continue,
                };
                let descr = anchor.value().attr("title").unwrap_or("").to_string();

                asns.push(asn);
                asn_info.insert(
                    asn,
                    ASNInfo {
                        country: String::new(),
                        descr,
                        org: None,
                    },
                );
            }

            if asns.is_empty() {
                continue;
            }
            routes.push(Route {
                prefix: prefix.to_string(),
                path: ASPath::new(asns),
                neighbor_ip: String::new(),
                origin: String::new(),
                asn_info,
            });
        }

        SourceFetch {
            source: self.name().to_string(),
            reported_count: routes.len(),
            routes,
        }
    }
}

impl RouteSource for LookingGlassSource {
    fn name(&self) -> &'static str {
        "looking glass"
    }

    fn fetch(&self, prefix: &str) -> Result<SourceFetch, SourceError> {
        let body = self.fetch_body(prefix)?;
        Ok(self.parse_document(prefix, &body))
    }
}

impl Default for LookingGlassSource {
    fn default() -> Self {
        Self::new()
    }
}

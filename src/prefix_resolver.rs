use std::str::FromStr;
use std::time::Duration;

use ipnetwork::IpNetwork;

use crate::shared::PrefixError;

const LOOKUP_URL: &str = "https://glass.routeviews.org/ip";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Turn free-form user input into a canonical address-block string.
///
/// Input that already carries a prefix length is validated directly as
/// CIDR; anything else is resolved through the lookup service, which
/// answers with the covering announced prefix in a redirect.
pub fn normalize_target(input: &str) -> Result<String, PrefixError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PrefixError::new(input, "empty input"));
    }

    if trimmed.contains('/') {
        return parse_cidr(trimmed);
    }
    resolve_via_lookup(trimmed)
}

fn parse_cidr(text: &str) -> Result<String, PrefixError> {
    match IpNetwork::from_str(text) {
        Ok(network) => Ok(network.to_string()),
        Err(err) => Err(PrefixError::new(text, err.to_string())),
    }
}

/// Ask the lookup service which announced prefix covers the input. The
/// service redirects to a path ending in `/net/<prefix>`.
fn resolve_via_lookup(text: &str) -> Result<String, PrefixError> {
    let client = reqwest::blocking::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| PrefixError::new(text, e.to_string()))?;

    let url = format!("{}/{}", LOOKUP_URL, text);
    let response = client
        .get(&url)
        .send()
        .map_err(|e| PrefixError::new(text, e.to_string()))?;

    if !response.status().is_redirection() {
        return Err(PrefixError::new(
            text,
            "lookup service did not resolve the input",
        ));
    }

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| PrefixError::new(text, "lookup redirect carried no Location"))?;

    let prefix = location
        .split("/net/")
        .nth(1)
        .ok_or_else(|| PrefixError::new(text, "unexpected redirect target"))?;

    parse_cidr(prefix)
}

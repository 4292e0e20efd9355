//! Fetch entry point and request executor
//!
//! One blocking GET per call: expand the URL template, apply headers, drain
//! the full body, then sniff and parse it into a [`Response`]. Hard failures
//! (templating, transport, error status) abort before any response exists;
//! parse failures do not.

use crate::error::ProbeError;
use crate::template;
use crate::types::{Response, TemplateRequest};
use crate::DEFAULT_USER_AGENT;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use std::collections::HashMap;
use url::Url;

/// Fetch a templated URL and classify the response body.
///
/// Substitutes every `[name]` placeholder, sends a single GET with the
/// default User-Agent plus any caller headers, and reads the body to the
/// end before returning. No retries; the first failure is surfaced
/// immediately.
pub fn fetch(request: TemplateRequest) -> Result<Response, ProbeError> {
    let url = template::expand(&request.url, &request.parameters)?;
    let url = Url::parse(&url)?;

    let body = execute(&url, &request.headers)?;
    Ok(Response::from_body(body).with_url(url.as_str()))
}

/// Perform the GET and drain the body as text.
fn execute(url: &Url, headers: &HashMap<String, String>) -> Result<String, ProbeError> {
    let mut header_map = HeaderMap::new();
    header_map.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

    // Caller headers land after the default, so a caller-supplied
    // User-Agent replaces it.
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| ProbeError::InvalidHeader {
                name: name.clone(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ProbeError::InvalidHeader {
                name: name.clone(),
            })?;
        header_map.insert(header_name, header_value);
    }

    let client = Client::builder()
        .default_headers(header_map)
        .build()
        .map_err(ProbeError::ClientBuild)?;

    tracing::debug!(url = %url, "sending GET request");

    let response = client
        .get(url.clone())
        .send()
        .map_err(ProbeError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Http {
            status: status.as_u16(),
        });
    }

    response.text().map_err(ProbeError::Transport)
}

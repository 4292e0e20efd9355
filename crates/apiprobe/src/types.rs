//! Core types for apiprobe

use crate::document::{self, ParsedDocument};
use crate::error::ParseError;
use crate::sniff;
use crate::walk::Traversal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Detected document type of a response body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// XML markup
    Xml,
    /// HTML markup (accepted but never structurally parsed)
    Html,
    /// JSON object or array
    Json,
    /// Anything the sniffer could not classify
    #[default]
    Unknown,
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(DocumentType::Xml),
            "html" => Ok(DocumentType::Html),
            "json" => Ok(DocumentType::Json),
            "unknown" => Ok(DocumentType::Unknown),
            _ => Err(format!("invalid document type: {s}")),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Xml => write!(f, "xml"),
            DocumentType::Html => write!(f, "html"),
            DocumentType::Json => write!(f, "json"),
            DocumentType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A templated GET request
///
/// Holds the URL template plus the parameter and header maps. Parameters
/// substitute `[name]` placeholders in the template; headers are applied to
/// the outbound request on top of the default User-Agent. Consumed once by
/// [`fetch`](crate::fetch).
#[derive(Debug, Clone, Default)]
pub struct TemplateRequest {
    /// URL template, e.g. `http://api.example.com/weather?zip=[zip]`
    pub url: String,
    /// Placeholder name -> substitution value
    pub parameters: HashMap<String, String>,
    /// Header name -> header value
    pub headers: HashMap<String, String>,
}

impl TemplateRequest {
    /// Create a new request for the given URL template
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a placeholder substitution
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Add all placeholder substitutions from a map
    pub fn params(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Add a request header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add all request headers from a map
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// One completed GET result: raw body, detected type, parse outcome
///
/// Immutable once constructed. Detection and parsing run exactly once,
/// inside [`from_body`](Response::from_body); a failed parse still yields a
/// response so the body and detected type stay inspectable.
#[derive(Debug)]
pub struct Response {
    url: Option<String>,
    body: String,
    document_type: DocumentType,
    document: ParsedDocument,
    parse_error: Option<ParseError>,
}

impl Response {
    /// Sniff and parse a raw body into a response.
    pub fn from_body(body: String) -> Self {
        let document_type = sniff::detect(&body);
        let (document, parse_error) = document::parse(document_type, &body);
        tracing::debug!(%document_type, parsed = parse_error.is_none(), "classified response body");
        Self {
            url: None,
            body,
            document_type,
            document,
            parse_error,
        }
    }

    /// Record the expanded URL this body was fetched from.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The expanded URL the body was fetched from, when known
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The raw response body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The sniffed document type
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// True when the body parsed structurally (xml, json) or was accepted
    /// as-is (html); false for unknown bodies and failed parses.
    pub fn is_parsed(&self) -> bool {
        self.document.is_parsed()
    }

    /// The parse failure, when structural parsing was attempted and failed
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.parse_error.as_ref()
    }

    /// The parsed document
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }

    /// Walk the parsed tree depth-first; see [`walk`](crate::walk).
    pub fn walk(&self) -> Traversal<'_> {
        crate::walk::walk(self)
    }
}

//! Structural parsing of response bodies
//!
//! Parsing runs exactly once, eagerly, when the response is constructed.
//! A parse failure is stored as a [`ParseError`] next to the response instead
//! of aborting construction, so the raw body and detected type survive.

use crate::error::ParseError;
use crate::types::DocumentType;

/// The structured tree derived from a response body
///
/// At most one variant is ever populated for a given response:
/// - `Xml`: root element with ordered children, from [`xmltree`];
/// - `Json`: root value, from [`serde_json`] - usually an object, but a body
///   leading with `[` parses to an array root;
/// - `Opaque`: HTML, accepted but intentionally left unparsed;
/// - `None`: unsniffable body or a failed parse.
#[derive(Debug)]
pub enum ParsedDocument {
    Xml(xmltree::Element),
    Json(serde_json::Value),
    Opaque,
    None,
}

impl ParsedDocument {
    /// True when a structural parse succeeded or was intentionally skipped
    /// (html), false for unknown bodies and failed parses.
    pub fn is_parsed(&self) -> bool {
        !matches!(self, ParsedDocument::None)
    }
}

/// Route a body to the parser matching its detected type.
///
/// xml and json run their structural parsers; html is accepted as-is; an
/// unknown body parses to nothing. On parser failure the document is `None`
/// and the error is handed back for the response to store.
pub fn parse(doc_type: DocumentType, body: &str) -> (ParsedDocument, Option<ParseError>) {
    match doc_type {
        DocumentType::Xml => match xmltree::Element::parse(body.as_bytes()) {
            Ok(root) => (ParsedDocument::Xml(root), None),
            Err(err) => (ParsedDocument::None, Some(ParseError::Xml(err))),
        },
        DocumentType::Json => match serde_json::from_str(body) {
            Ok(value) => (ParsedDocument::Json(value), None),
            Err(err) => (ParsedDocument::None, Some(ParseError::Json(err))),
        },
        DocumentType::Html => (ParsedDocument::Opaque, None),
        DocumentType::Unknown => (ParsedDocument::None, None),
    }
}

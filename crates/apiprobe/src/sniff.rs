//! Document type sniffing
//!
//! Cheap prefix-based classification of a response body into
//! {xml, html, json, unknown}. Only the first two whitespace-delimited
//! tokens are inspected; no parser runs here. Pure function, no I/O.

use crate::types::DocumentType;

/// Classify raw response text from its leading tokens.
///
/// Rules, in order:
/// 1. empty text is `Unknown`;
/// 2. a first token starting with `<` that contains `xml` (case-sensitive)
///    is `Xml` - this must run before the html rule since both lead with `<`;
/// 3. a first token starting with `<` whose first or second token contains
///    `html` (lower-cased) is `Html`;
/// 4. a first token starting with `{` or `[` is `Json`;
/// 5. anything else is `Unknown`.
///
/// A body with fewer than two tokens (e.g. a lone `<`) falls through to
/// `Unknown` rather than faulting.
pub fn detect(text: &str) -> DocumentType {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return DocumentType::Unknown;
    };
    let second = tokens.next();

    if first.starts_with('<') && first.contains("xml") {
        DocumentType::Xml
    } else if first.starts_with('<') && contains_html(first, second) {
        DocumentType::Html
    } else if first.starts_with('{') || first.starts_with('[') {
        DocumentType::Json
    } else {
        DocumentType::Unknown
    }
}

/// The html marker may sit in the second token (`<!DOCTYPE html>`) or, when
/// the markup carries no whitespace at all, in the first.
fn contains_html(first: &str, second: Option<&str>) -> bool {
    first.to_lowercase().contains("html")
        || second.is_some_and(|t| t.to_lowercase().contains("html"))
}

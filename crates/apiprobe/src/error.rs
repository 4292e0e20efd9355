//! Error types for apiprobe

use thiserror::Error;

/// Hard errors that abort construction of a [`Response`](crate::Response)
///
/// Any of these means no response was obtained at all, as opposed to
/// [`ParseError`], which leaves a usable response behind.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A parameter has no `[name]` placeholder left in the URL template
    #[error("parameter [{name}] is not defined in the URL template")]
    MissingPlaceholder { name: String },

    /// The expanded URL is not a valid absolute URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A caller-supplied header has an invalid name or value
    #[error("invalid header: {name}")]
    InvalidHeader { name: String },

    /// Failed to build the HTTP client
    #[error("failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Connection or body-read failure
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error status: {status}")]
    Http { status: u16 },
}

/// Soft errors from the structural parse step
///
/// Stored on the response rather than propagated; the raw body and detected
/// type stay available to the caller.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body was detected as XML but is malformed markup
    #[error("malformed XML body")]
    Xml(#[source] xmltree::ParseError),

    /// Body was detected as JSON but is malformed
    #[error("malformed JSON body")]
    Json(#[source] serde_json::Error),
}

//! apiprobe - format-sniffing web API inspection library
//!
//! This crate fetches a templated URL with a single blocking GET, sniffs
//! whether the body is XML, HTML, or JSON from its leading tokens, parses it
//! into a structured tree where possible, and exposes one depth-first walk
//! over either tree shape.
//!
//! ## Flow
//!
//! 1. [`TemplateRequest`] carries a URL template plus parameter and header
//!    maps; `[name]` placeholders are substituted before the request is sent.
//! 2. [`fetch`] performs the GET and returns a [`Response`] holding the raw
//!    body, the sniffed [`DocumentType`], and the parse outcome.
//! 3. [`walk`] yields every node name of the parsed tree depth-first, whether
//!    the body was XML or JSON.
//!
//! Parse failures are soft: the [`Response`] is still returned with
//! [`Response::is_parsed`] == false so the raw body and detected type remain
//! inspectable. Templating and transport failures are hard and yield no
//! response at all.
//!
//! ```no_run
//! use apiprobe::{fetch, walk, TemplateRequest};
//!
//! let req = TemplateRequest::new("http://api.example.com/data?zip=[zip]")
//!     .param("zip", "90210")
//!     .header("X-Api-Key", "secret");
//! let response = fetch(req)?;
//! println!("type: {}", response.document_type());
//! for name in walk(&response) {
//!     println!("{name}");
//! }
//! # Ok::<(), apiprobe::ProbeError>(())
//! ```

pub mod client;
mod document;
mod error;
mod sniff;
mod template;
mod types;
mod walk;

pub use client::fetch;
pub use document::ParsedDocument;
pub use error::{ParseError, ProbeError};
pub use sniff::detect;
pub use types::{DocumentType, Response, TemplateRequest};
pub use walk::{walk, NodeNames, Traversal};

/// Default User-Agent string, attached to every request unless the caller
/// supplies their own `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = "apiprobe (a web API inspection tool)";

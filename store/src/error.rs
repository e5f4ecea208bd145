//! Error taxonomy of the consumer layer.
//!
//! Three failure families exist: the permanent URL could not be retrieved
//! ([`FetchError`]), the retrieved document was not well-formed
//! ([`ParseError`]), or a lookup found nothing ([`NotFound`]). Structural
//! validation findings are not errors; they are reported by
//! `hpvco-conformance` as a non-fatal list.

use crate::format::Format;

/// The permanent URL was unreachable or did not yield a usable document.
///
/// Surfaced to the caller as-is; retry policy is the caller's decision.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection, TLS, or timeout.
    #[error("failed to retrieve ontology document: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status code.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code received.
        status: u16,
    },
    /// The response body could not be decoded as text.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// The document is not syntactically valid per its declared serialization.
///
/// Fatal for the load attempt. The message is the parser's diagnostic and
/// names the offending location when the parser reports one.
#[derive(Debug, thiserror::Error)]
#[error("{format} parse error: {message}")]
pub struct ParseError {
    /// The serialization the document was declared to use.
    pub format: Format,
    /// The parser's diagnostic message.
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(format: Format, message: impl std::fmt::Display) -> Self {
        Self {
            format,
            message: message.to_string(),
        }
    }
}

/// Union of the failure modes of a fetch-then-load operation.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The document was retrieved but is not well-formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// No entity in the loaded graph matches the requested identifier.
#[derive(Debug, thiserror::Error)]
#[error("no entity matches identifier {identifier:?}")]
pub struct NotFound {
    /// The identifier that was looked up (IRI, fragment, or label).
    pub identifier: String,
}

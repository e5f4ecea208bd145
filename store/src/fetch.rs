//! Retrieval of the published ontology document.

use crate::error::FetchError;

/// Permanent URL of the published HPVCO document.
pub const DOCUMENT_URL: &str = "https://purl.org/uth/ontology/hpvco.rdf";

/// Fetches a serialized ontology document over HTTP(S).
///
/// A plain blocking GET; redirects follow the HTTP client's default
/// policy (purl.org resolution relies on them). Failed requests are not
/// retried here — retry policy belongs to the caller.
///
/// # Errors
///
/// Returns [`FetchError`] when the URL is unreachable, the server answers
/// with a non-success status, or the body cannot be decoded as text.
/// A fetch failure is never reported as a parse failure.
pub fn fetch_document(url: &str) -> Result<String, FetchError> {
    let response = reqwest::blocking::get(url).map_err(FetchError::Transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    response.text().map_err(FetchError::Body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_url_is_a_fetch_error() {
        // Nothing listens on this port; the connection is refused without
        // any parsing taking place.
        let err = fetch_document("http://127.0.0.1:1/hpvco.rdf").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn document_url_is_the_permanent_purl() {
        assert_eq!(DOCUMENT_URL, "https://purl.org/uth/ontology/hpvco.rdf");
    }
}

//! Serialization formats of the published artifact.

/// Serialization format of an ontology document.
///
/// The published HPVCO document uses RDF/XML (the `.rdf` extension);
/// Turtle and N-Triples are supported for tooling interchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RDF/XML (`.rdf`, `.owl`, `.xml`).
    RdfXml,
    /// Turtle (`.ttl`).
    Turtle,
    /// N-Triples (`.nt`).
    NTriples,
}

impl Format {
    /// Infers the format from the extension of a path or URL.
    ///
    /// Returns `None` when the extension is missing or unrecognized.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Format> {
        let ext = path.rsplit('.').next()?;
        match ext.to_ascii_lowercase().as_str() {
            "rdf" | "owl" | "xml" => Some(Format::RdfXml),
            "ttl" | "turtle" => Some(Format::Turtle),
            "nt" | "ntriples" => Some(Format::NTriples),
            _ => None,
        }
    }

    /// Infers the format from an HTTP media type.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Format> {
        // Parameters such as "; charset=utf-8" are irrelevant here.
        let essence = media_type.split(';').next().unwrap_or("").trim();
        match essence {
            "application/rdf+xml" => Some(Format::RdfXml),
            "text/turtle" => Some(Format::Turtle),
            "application/n-triples" => Some(Format::NTriples),
            _ => None,
        }
    }

    /// Returns the conventional human-readable name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::RdfXml => "RDF/XML",
            Format::Turtle => "Turtle",
            Format::NTriples => "N-Triples",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rdf_extension_implies_rdf_xml() {
        assert_eq!(
            Format::from_path("https://purl.org/uth/ontology/hpvco.rdf"),
            Some(Format::RdfXml)
        );
        assert_eq!(Format::from_path("hpvco.ttl"), Some(Format::Turtle));
        assert_eq!(Format::from_path("hpvco.nt"), Some(Format::NTriples));
        assert_eq!(Format::from_path("hpvco.json"), None);
    }

    #[test]
    fn media_type_detection_ignores_parameters() {
        assert_eq!(
            Format::from_media_type("application/rdf+xml; charset=utf-8"),
            Some(Format::RdfXml)
        );
        assert_eq!(Format::from_media_type("text/html"), None);
    }
}

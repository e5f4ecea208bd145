//! Triple-store loader.
//!
//! Parses a serialized ontology document into an in-memory graph of
//! triples. Parsing is a single blocking operation; documents of HPVCO's
//! size do not warrant streaming or concurrent parsing.

use sophia_api::prelude::*;
use sophia_inmem::graph::FastGraph;

use crate::error::ParseError;
use crate::format::Format;

/// Parses a serialized document into an in-memory graph.
///
/// The graph is returned by value; callers that need shared read access
/// wrap it in [`crate::OntologyStore`]. No side effects occur beyond the
/// returned graph.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is not syntactically valid per
/// the declared serialization. The error message carries the parser's
/// diagnostic, including the offending location when available.
pub fn load_graph(source: &str, format: Format) -> Result<FastGraph, ParseError> {
    match format {
        Format::RdfXml => sophia_xml::parser::parse_str(source)
            .collect_triples::<FastGraph>()
            .map_err(|e| ParseError::new(format, e)),
        Format::Turtle => sophia_turtle::parser::turtle::parse_str(source)
            .collect_triples::<FastGraph>()
            .map_err(|e| ParseError::new(format, e)),
        Format::NTriples => sophia_turtle::parser::nt::parse_str(source)
            .collect_triples::<FastGraph>()
            .map_err(|e| ParseError::new(format, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sophia_api::graph::Graph;

    const EMPTY_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>
"#;

    #[test]
    fn empty_document_yields_empty_graph() {
        let graph = load_graph(EMPTY_RDF_XML, Format::RdfXml).unwrap();
        assert_eq!(graph.triples().count(), 0);
    }

    #[test]
    fn malformed_rdf_xml_is_a_parse_error() {
        let err = load_graph("<rdf:RDF", Format::RdfXml).unwrap_err();
        assert_eq!(err.format, Format::RdfXml);
    }

    #[test]
    fn malformed_turtle_is_a_parse_error() {
        let err = load_graph("<http://example.org/a> <b> .", Format::Turtle).unwrap_err();
        assert_eq!(err.format, Format::Turtle);
    }

    #[test]
    fn simple_turtle_parses() {
        let ttl = r#"
@prefix ex: <http://example.org/> .
ex:a ex:knows ex:b .
"#;
        let graph = load_graph(ttl, Format::Turtle).unwrap();
        assert_eq!(graph.triples().count(), 1);
    }
}

//! Vocabulary constants and term helpers shared by the graph validators.

use sophia_api::prelude::*;

pub use hpvco_ontology::model::iris::{
    HAS_DB_XREF, HAS_SYNONYM, HPVCO, IAO_DEFINITION, OBO, OBO_IN_OWL, OWL, RDF, RDFS, XSD,
};

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:domain`.
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `owl:disjointWith`.
pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
/// `owl:equivalentClass`.
pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
/// `owl:annotatedSource`.
pub const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
/// `owl:annotatedProperty`.
pub const OWL_ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";

/// Namespaces whose terms may be referenced without a local declaration:
/// the RDF core vocabularies plus the external terminologies HPVCO links
/// to (oboInOwl annotation vocabulary, OBO Foundry terms, Dublin Core).
pub const EXTERNAL_NAMESPACES: &[&str] = &[
    OWL,
    RDF,
    RDFS,
    XSD,
    OBO_IN_OWL,
    OBO,
    "http://purl.org/dc/terms/",
    "http://purl.org/dc/elements/1.1/",
];

/// Returns true when `iri` falls in a recognized external namespace.
#[must_use]
pub fn is_external(iri: &str) -> bool {
    EXTERNAL_NAMESPACES.iter().any(|ns| iri.starts_with(ns))
}

/// Extracts the IRI of a term, if it is an IRI term.
pub fn term_iri<T: Term>(term: T) -> Option<String> {
    term.iri().map(|iri| iri.as_str().to_owned())
}

/// Extracts the lexical form of a term, if it is a literal.
pub fn term_lexical<T: Term>(term: T) -> Option<String> {
    term.lexical_form().map(|text| String::from(&*text))
}

/// Extracts the blank-node label of a term, if it is a blank node.
pub fn term_bnode<T: Term>(term: T) -> Option<String> {
    term.bnode_id().map(|node| node.as_str().to_owned())
}

//! Graph-validator scenarios from the consumer contract.

use hpvco_conformance::{run_all, validators};
use hpvco_store::{Format, OntologyStore};

const EMPTY_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>
"#;

#[test]
fn empty_document_has_zero_triples_and_zero_violations() {
    let store = OntologyStore::load_str(EMPTY_RDF_XML, Format::RdfXml).unwrap();
    assert_eq!(store.triple_count(), 0);
    let report = run_all(&store);
    assert_eq!(report.failure_count(), 0);
}

#[test]
fn undeclared_class_reference_yields_exactly_one_violation() {
    let ttl = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:Declared a owl:Class ;
  rdfs:subClassOf <http://example.org/vocab#Missing> .
"#;
    let store = OntologyStore::load_str(ttl, Format::Turtle).unwrap();
    let report = validators::declarations::validate(&store);
    assert_eq!(report.failure_count(), 1);
    let violation = report.failures().next().unwrap();
    assert!(
        violation.message.contains("http://example.org/vocab#Missing"),
        "violation does not name the undeclared IRI: {}",
        violation.message
    );
}

#[test]
fn external_namespace_references_are_not_violations() {
    let ttl = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:Declared a owl:Class ;
  rdfs:subClassOf owl:Thing .
"#;
    let store = OntologyStore::load_str(ttl, Format::Turtle).unwrap();
    let report = validators::declarations::validate(&store);
    assert_eq!(report.failure_count(), 0);
}

#[test]
fn constructs_outside_the_profile_are_flagged() {
    let ttl = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:Odd a owl:Class ;
  owl:complementOf hpvco:Odd .
"#;
    let store = OntologyStore::load_str(ttl, Format::Turtle).unwrap();
    let report = validators::profile::validate(&store);
    assert_eq!(report.failure_count(), 1);
    assert!(report
        .failures()
        .next()
        .unwrap()
        .message
        .contains("complementOf"));
}

#[test]
fn malformed_xref_is_a_warning_not_a_violation() {
    let ttl = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix oboInOwl: <http://www.geneontology.org/formats/oboInOwl#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:Odd a owl:Class ;
  oboInOwl:hasDbXref "UMLS:C0007847" .
"#;
    let store = OntologyStore::load_str(ttl, Format::Turtle).unwrap();
    let report = validators::xrefs::validate(&store);
    assert_eq!(report.failure_count(), 0);
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn full_serialized_ontology_passes_every_graph_validator() {
    let ttl = hpvco_ontology::serializer::turtle::to_turtle(hpvco_ontology::Ontology::full());
    let store = OntologyStore::load_str(&ttl, Format::Turtle).unwrap();
    let report = run_all(&store);
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "violations: {failures:#?}");
    assert_eq!(report.warning_count(), 0);
}

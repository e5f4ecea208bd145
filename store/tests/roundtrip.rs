//! Serialize-then-load round-trips between the typed ontology and the
//! consumer layer.

use hpvco_ontology::serializer::{ntriples, rdfxml, turtle};
use hpvco_ontology::Ontology;
use hpvco_store::{EntityKind, Format, OntologyStore};

fn loaded(format: Format) -> OntologyStore {
    let ontology = Ontology::full();
    let source = match format {
        Format::RdfXml => rdfxml::to_rdf_xml(ontology),
        Format::Turtle => turtle::to_turtle(ontology),
        Format::NTriples => ntriples::to_ntriples(ontology),
    };
    OntologyStore::load_str(&source, format)
        .unwrap_or_else(|e| panic!("{format} serialization failed to load: {e}"))
}

#[test]
fn ntriples_line_count_matches_loaded_triple_count() {
    let nt = ntriples::to_ntriples(Ontology::full());
    let lines = nt
        .lines()
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .count();
    assert_eq!(loaded(Format::NTriples).triple_count(), lines);
}

#[test]
fn all_formats_agree_on_triple_count() {
    let from_xml = loaded(Format::RdfXml).triple_count();
    let from_ttl = loaded(Format::Turtle).triple_count();
    let from_nt = loaded(Format::NTriples).triple_count();
    assert_eq!(from_xml, from_ttl);
    assert_eq!(from_ttl, from_nt);
    assert!(from_xml > 0);
}

#[test]
fn every_declared_class_is_queryable() {
    let store = loaded(Format::RdfXml);
    for module in &Ontology::full().topics {
        for class in &module.classes {
            let entity = store
                .entity(class.id)
                .unwrap_or_else(|| panic!("{} not found after load", class.id));
            assert!(entity.kinds.contains(&EntityKind::Class), "{}", class.id);
            assert!(entity.labels.contains(&class.label.to_owned()), "{}", class.id);
        }
    }
}

#[test]
fn reified_xrefs_surface_through_the_facade() {
    let store = loaded(Format::RdfXml);
    let entity = store
        .resolve("CervicalCancer")
        .expect("cervical cancer must resolve");
    assert!(entity.xrefs.contains(&"NCIT:C4910".to_owned()));
    assert!(entity
        .superclasses
        .contains(&"https://purl.org/uth/ontology/hpvco#HPVRelatedCancer".to_owned()));
}

#[test]
fn lookup_results_are_stable_across_formats() {
    let from_xml = loaded(Format::RdfXml);
    let from_ttl = loaded(Format::Turtle);
    let a = from_xml.resolve("Gardasil 9").expect("resolve via RDF/XML");
    let b = from_ttl.resolve("Gardasil 9").expect("resolve via Turtle");
    assert_eq!(a.iri, b.iri);
    assert_eq!(a.statements.len(), b.statements.len());
}

#[test]
fn empty_rdf_xml_document_loads_to_zero_triples() {
    let empty = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>
"#;
    let store = OntologyStore::load_str(empty, Format::RdfXml).expect("well-formed empty document");
    assert_eq!(store.triple_count(), 0);
}

//! HPV Cancer Ontology encoded as typed Rust data.
//!
//! The `hpvco-ontology` crate provides the complete HPV Cancer Ontology
//! (HPVCO) — eight topic sections covering HPV-related cancers, risk
//! factors, prevention, symptoms, diagnosis, treatment, and psychosocial
//! impact — as static Rust data structures, along with serializers that
//! produce RDF/XML, Turtle, N-Triples, and JSON-LD output.
//!
//! The published artifact lives at the permanent URL
//! `https://purl.org/uth/ontology/hpvco.rdf`; the RDF/XML serializer in
//! this crate reproduces that document.
//!
//! # Entry Point
//!
//! ```
//! let ontology = hpvco_ontology::Ontology::full();
//! assert_eq!(ontology.topics.len(), 8);
//! ```
//!
//! # Serialization
//!
//! ```
//! let ontology = hpvco_ontology::Ontology::full();
//! let rdf_xml = hpvco_ontology::serializer::rdfxml::to_rdf_xml(ontology);
//! let turtle  = hpvco_ontology::serializer::turtle::to_turtle(ontology);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod serializer;
pub mod topics;

pub use model::{
    AnnotationProperty, Class, Individual, IndividualValue, Ontology, Property, PropertyKind,
    Topic, TopicModule,
};

impl Ontology {
    /// Returns the complete HPV Cancer Ontology with all eight topic
    /// sections.
    ///
    /// Topics are assembled in curation order, foundation first:
    /// `core → cancer → risk → prevention → symptom → diagnosis →
    ///  treatment → psychosocial`.
    #[must_use]
    pub fn full() -> &'static Ontology {
        static ONTOLOGY: std::sync::OnceLock<Ontology> = std::sync::OnceLock::new();
        ONTOLOGY.get_or_init(|| Ontology {
            version: "2.0.0",
            ontology_iri: model::iris::HPVCO_ONTOLOGY,
            base_iri: model::iris::HPVCO,
            document_url: model::iris::HPVCO_DOCUMENT,
            topics: vec![
                topics::core::module(),
                topics::cancer::module(),
                topics::risk::module(),
                topics::prevention::module(),
                topics::symptom::module(),
                topics::diagnosis::module(),
                topics::treatment::module(),
                topics::psychosocial::module(),
            ],
            annotation_properties: model::annotation_properties(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_count() {
        assert_eq!(Ontology::full().topics.len(), 8);
    }

    #[test]
    fn class_count() {
        // 66 classes across 8 topics in the current release.
        assert_eq!(Ontology::full().class_count(), 66);
    }

    #[test]
    fn property_count() {
        // 30 = 26 topic-level properties + 4 root annotation properties
        // (definition, synonym, cross-reference, competency question).
        assert_eq!(Ontology::full().property_count(), 30);
    }

    #[test]
    fn individual_count() {
        // 7 individuals: four genotypes and three licensed vaccines.
        assert_eq!(Ontology::full().individual_count(), 7);
    }

    #[test]
    fn all_class_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::full().topics {
            for class in &module.classes {
                assert!(iris.insert(class.id), "Duplicate class IRI: {}", class.id);
            }
        }
    }

    #[test]
    fn all_property_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::full().topics {
            for prop in &module.properties {
                assert!(iris.insert(prop.id), "Duplicate property IRI: {}", prop.id);
            }
        }
    }

    #[test]
    fn all_individual_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::full().topics {
            for ind in &module.individuals {
                assert!(iris.insert(ind.id), "Duplicate individual IRI: {}", ind.id);
            }
        }
    }

    #[test]
    fn every_class_has_definition() {
        for module in &Ontology::full().topics {
            for class in &module.classes {
                assert!(
                    !class.definition.trim().is_empty(),
                    "Class {} has an empty definition",
                    class.id
                );
            }
        }
    }

    #[test]
    fn ncit_codes_are_well_formed() {
        for module in &Ontology::full().topics {
            for class in &module.classes {
                if let Some(code) = class.ncit {
                    assert!(
                        code.starts_with("NCIT:C")
                            && code["NCIT:C".len()..].chars().all(|c| c.is_ascii_digit()),
                        "Class {} has malformed NCIT code {}",
                        class.id,
                        code
                    );
                }
            }
        }
    }

    #[test]
    fn find_class_by_ncit_resolves() {
        let ontology = Ontology::full();
        let class = ontology.find_class_by_ncit("NCIT:C4910");
        assert_eq!(
            class.map(|c| c.id),
            Some("https://purl.org/uth/ontology/hpvco#CervicalCancer")
        );
        assert!(ontology.find_class_by_ncit("NCIT:C0").is_none());
    }

    #[test]
    fn vaccine_coverage_references_declared_genotypes() {
        let ontology = Ontology::full();
        for module in &ontology.topics {
            for ind in &module.individuals {
                for (prop, value) in ind.properties {
                    if let IndividualValue::IriRef(target) = value {
                        assert!(
                            ontology.find_individual(target).is_some(),
                            "{} asserts {} -> {}, which is not a declared individual",
                            ind.id,
                            prop,
                            target
                        );
                    }
                }
            }
        }
    }
}

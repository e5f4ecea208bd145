//! Core ontology model types.
//!
//! These types represent the HPV Cancer Ontology vocabulary as typed Rust
//! data. All instances are built as owned `Vec`s and referenced via borrows.
//! The top-level entry point is [`Ontology::full()`](crate::Ontology::full).

/// One thematic section of the ontology.
///
/// HPVCO is published under a single namespace
/// (`https://purl.org/uth/ontology/hpvco#`); topics group the vocabulary
/// by subject area for curation and review. Each topic carries the
/// competency questions it was designed to answer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Topic {
    /// Short section key (e.g., `"cancer"`).
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the topic's coverage.
    pub comment: &'static str,
    /// Natural-language questions the topic's vocabulary must answer.
    pub competency_questions: &'static [&'static str],
}

/// An OWL class definition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Class {
    /// Full IRI (e.g., `"https://purl.org/uth/ontology/hpvco#CervicalCancer"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Textual definition, published as `IAO:0000115`.
    pub definition: &'static str,
    /// Preferred synonym, published as `oboInOwl:hasSynonym`.
    pub synonym: Option<&'static str>,
    /// NCI Thesaurus cross-reference (`"NCIT:C…"`), published as an
    /// `oboInOwl:hasDbXref` on reified definition/synonym axioms.
    /// Opaque to this crate; resolved by external terminology services.
    pub ncit: Option<&'static str>,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Full IRIs of mutually exclusive classes (`owl:disjointWith`).
    pub disjoint_with: &'static [&'static str],
}

/// Whether a property is a datatype, object, or annotation property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PropertyKind {
    /// `owl:DatatypeProperty` — relates a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty` — relates two resources.
    Object,
    /// `owl:AnnotationProperty` — used for documentation; not for reasoning.
    Annotation,
}

/// An OWL property definition.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Datatype, object, or annotation property.
    pub kind: PropertyKind,
    /// Whether this is also an `owl:FunctionalProperty`.
    pub functional: bool,
    /// Full IRI of the domain class, or `None` if unspecified.
    pub domain: Option<&'static str>,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
}

/// A value in a named individual's property assertion.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum IndividualValue {
    /// A plain string literal.
    Str(&'static str),
    /// An integer literal.
    Int(i64),
    /// A boolean literal.
    Bool(bool),
    /// An IRI reference to another resource.
    IriRef(&'static str),
}

/// A named individual (`owl:NamedIndividual`).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Individual {
    /// Full IRI.
    pub id: &'static str,
    /// Full IRI of the class this individual is an instance of.
    pub type_: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// NCI Thesaurus cross-reference, if one exists for this individual.
    pub ncit: Option<&'static str>,
    /// Property assertions: pairs of (property IRI, value).
    pub properties: &'static [(&'static str, IndividualValue)],
}

/// A complete topic module: topic metadata + classes + properties + individuals.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TopicModule {
    /// Topic metadata.
    pub topic: Topic,
    /// All OWL classes defined in this topic.
    pub classes: Vec<Class>,
    /// All OWL properties defined in this topic.
    pub properties: Vec<Property>,
    /// All named individuals declared in this topic.
    pub individuals: Vec<Individual>,
}

/// An annotation property declared at the ontology root level.
///
/// HPVCO declares the external annotation vocabulary it uses
/// (IAO definition, oboInOwl synonym and cross-reference) alongside its
/// own `competencyQuestion` property.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnotationProperty {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRI of the range (typically `xsd:string`).
    pub range: &'static str,
}

/// The complete HPV Cancer Ontology.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ontology {
    /// Ontology version (e.g., `"2.0.0"`).
    pub version: &'static str,
    /// IRI of the ontology itself.
    pub ontology_iri: &'static str,
    /// Base namespace for all HPVCO entities.
    pub base_iri: &'static str,
    /// Permanent URL of the published RDF/XML document.
    pub document_url: &'static str,
    /// All topic modules in curation order.
    pub topics: Vec<TopicModule>,
    /// Annotation vocabulary declared by the document.
    pub annotation_properties: Vec<AnnotationProperty>,
}

impl Ontology {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.topics
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.topics
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Looks up a named individual by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_individual(&self, iri: &str) -> Option<&Individual> {
        self.topics
            .iter()
            .flat_map(|m| m.individuals.iter())
            .find(|i| i.id == iri)
    }

    /// Looks up a class by its NCI Thesaurus cross-reference
    /// (e.g., `"NCIT:C4910"`). Returns `None` if no class carries the code.
    #[must_use]
    pub fn find_class_by_ncit(&self, code: &str) -> Option<&Class> {
        self.topics
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.ncit == Some(code))
    }

    /// Returns the total number of classes across all topics.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.topics.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all topics.
    ///
    /// Includes the root-level annotation properties, which are declared
    /// outside any specific topic module.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.topics
            .iter()
            .map(|m| m.properties.len())
            .sum::<usize>()
            + self.annotation_properties.len()
    }

    /// Returns the total number of named individuals across all topics.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.topics.iter().map(|m| m.individuals.len()).sum()
    }
}

/// Returns the annotation vocabulary declared by the HPVCO document.
///
/// The first three are the external properties the NCIT enrichment pass
/// writes (definition, synonym, database cross-reference); the last is
/// HPVCO's own competency-question annotation.
#[must_use]
pub fn annotation_properties() -> Vec<AnnotationProperty> {
    vec![
        AnnotationProperty {
            id: iris::IAO_DEFINITION,
            label: "definition",
            comment: "The official textual definition of an entity, \
                      sourced from the NCI Thesaurus where a cross-reference exists.",
            range: iris::XSD_STRING,
        },
        AnnotationProperty {
            id: iris::HAS_SYNONYM,
            label: "has synonym",
            comment: "An alternative name for an entity, typically the \
                      shorter clinical or colloquial form.",
            range: iris::XSD_STRING,
        },
        AnnotationProperty {
            id: iris::HAS_DB_XREF,
            label: "has database cross-reference",
            comment: "An identifier in an external terminology. HPVCO uses \
                      NCI Thesaurus concept codes of the form 'NCIT:C…'.",
            range: iris::XSD_STRING,
        },
        AnnotationProperty {
            id: iris::COMPETENCY_QUESTION,
            label: "competency question",
            comment: "A natural-language question elicited from patients and \
                      domain experts that the ontology must be able to answer.",
            range: iris::XSD_STRING,
        },
    ]
}

/// `rdfs:label` of the ontology header node.
pub const ONTOLOGY_LABEL: &str = "HPV Cancer Ontology";

/// `rdfs:comment` of the ontology header node.
pub const ONTOLOGY_COMMENT: &str =
    "An ontology of HPV-related cancers, risk factors, prevention, symptoms, \
     diagnosis, treatment, and psychosocial impact, designed for \
     patient-centric education and decision support.";

/// Standard IRI constants used across all topic modules.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// oboInOwl annotation vocabulary namespace.
    pub const OBO_IN_OWL: &str = "http://www.geneontology.org/formats/oboInOwl#";
    /// OBO Foundry term namespace (IAO, NCIT).
    pub const OBO: &str = "http://purl.obolibrary.org/obo/";

    /// HPVCO entity namespace.
    pub const HPVCO: &str = "https://purl.org/uth/ontology/hpvco#";
    /// IRI of the HPVCO ontology itself.
    pub const HPVCO_ONTOLOGY: &str = "https://purl.org/uth/ontology/hpvco";
    /// Permanent URL of the published RDF/XML document.
    pub const HPVCO_DOCUMENT: &str = "https://purl.org/uth/ontology/hpvco.rdf";

    /// IAO textual-definition annotation property.
    pub const IAO_DEFINITION: &str = "http://purl.obolibrary.org/obo/IAO_0000115";
    /// `oboInOwl:hasSynonym`.
    pub const HAS_SYNONYM: &str = "http://www.geneontology.org/formats/oboInOwl#hasSynonym";
    /// `oboInOwl:hasDbXref`.
    pub const HAS_DB_XREF: &str = "http://www.geneontology.org/formats/oboInOwl#hasDbXref";
    /// HPVCO competency-question annotation property.
    pub const COMPETENCY_QUESTION: &str = "https://purl.org/uth/ontology/hpvco#competencyQuestion";

    // XSD datatypes
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:positiveInteger`.
    pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
}

//! Read-only lookup facade over a loaded ontology graph.
//!
//! The graph is immutable once loaded and shared by reference: any number
//! of concurrent readers may query an [`OntologyStore`] without
//! synchronization, reflecting the published document's
//! never-mutated-in-place lifecycle.

use std::collections::BTreeSet;
use std::sync::Arc;

use sophia_api::prelude::*;
use sophia_inmem::graph::FastGraph;

use crate::error::{LoadError, NotFound, ParseError};
use crate::fetch::{fetch_document, DOCUMENT_URL};
use crate::format::Format;
use crate::loader::load_graph;

/// Vocabulary IRIs the facade and validators interpret.
pub(crate) mod vocab {
    pub use hpvco_ontology::model::iris::{HAS_DB_XREF, HAS_SYNONYM, HPVCO, IAO_DEFINITION};

    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const OWL_AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
}

/// The declared kind of a looked-up entity, taken from its `rdf:type`
/// assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntityKind {
    /// `owl:Class`.
    Class,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DatatypeProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:NamedIndividual`.
    NamedIndividual,
    /// `owl:Ontology` (the document header node).
    Ontology,
    /// `owl:Axiom` (a reified annotation axiom).
    Axiom,
}

impl EntityKind {
    fn from_type_iri(iri: &str) -> Option<EntityKind> {
        match iri {
            vocab::OWL_CLASS => Some(EntityKind::Class),
            vocab::OWL_OBJECT_PROPERTY => Some(EntityKind::ObjectProperty),
            vocab::OWL_DATATYPE_PROPERTY => Some(EntityKind::DatatypeProperty),
            vocab::OWL_ANNOTATION_PROPERTY => Some(EntityKind::AnnotationProperty),
            vocab::OWL_NAMED_INDIVIDUAL => Some(EntityKind::NamedIndividual),
            vocab::OWL_ONTOLOGY => Some(EntityKind::Ontology),
            vocab::OWL_AXIOM => Some(EntityKind::Axiom),
            _ => None,
        }
    }

    /// Returns the conventional short name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::ObjectProperty => "object property",
            EntityKind::DatatypeProperty => "datatype property",
            EntityKind::AnnotationProperty => "annotation property",
            EntityKind::NamedIndividual => "named individual",
            EntityKind::Ontology => "ontology",
            EntityKind::Axiom => "axiom",
        }
    }
}

/// The object position of a statement, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ObjectValue {
    /// An IRI reference.
    Iri(String),
    /// The lexical form of a literal.
    Literal(String),
    /// A blank node label.
    Blank(String),
}

impl std::fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectValue::Iri(iri) => write!(f, "<{iri}>"),
            ObjectValue::Literal(text) => write!(f, "{text:?}"),
            ObjectValue::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

/// One asserted statement about a looked-up subject.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Statement {
    /// Predicate IRI.
    pub predicate: String,
    /// Object of the statement.
    pub object: ObjectValue,
}

/// Everything the graph asserts about one entity.
///
/// Repeated queries for the same identifier return identical `Entity`
/// values: every collection is sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// The entity's IRI.
    pub iri: String,
    /// Declared kinds, from `rdf:type`.
    pub kinds: Vec<EntityKind>,
    /// `rdfs:label` values.
    pub labels: Vec<String>,
    /// `IAO:0000115` definition values.
    pub definitions: Vec<String>,
    /// `oboInOwl:hasSynonym` values.
    pub synonyms: Vec<String>,
    /// `oboInOwl:hasDbXref` values, both asserted directly and carried on
    /// reified annotation axioms about this entity.
    pub xrefs: Vec<String>,
    /// `rdfs:subClassOf` targets.
    pub superclasses: Vec<String>,
    /// Every asserted statement with this entity as subject.
    pub statements: Vec<Statement>,
}

/// An immutable, shared-by-reference triple store over one loaded
/// ontology document.
#[derive(Debug, Clone)]
pub struct OntologyStore {
    graph: Arc<FastGraph>,
}

impl OntologyStore {
    /// Wraps an already-loaded graph.
    #[must_use]
    pub fn from_graph(graph: FastGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Parses a serialized document into a store.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the document is not well-formed per the
    /// declared serialization.
    pub fn load_str(source: &str, format: Format) -> Result<Self, ParseError> {
        Ok(Self::from_graph(load_graph(source, format)?))
    }

    /// Fetches and loads the published HPVCO document from its permanent
    /// URL.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Fetch`] when the URL cannot be retrieved and
    /// [`LoadError::Parse`] when the retrieved document is malformed.
    pub fn fetch() -> Result<Self, LoadError> {
        Self::fetch_from(DOCUMENT_URL)
    }

    /// Fetches and loads an ontology document from an arbitrary URL.
    ///
    /// The serialization is inferred from the URL's extension; URLs
    /// without a recognized extension are treated as RDF/XML, the
    /// publication format.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Fetch`] when the URL cannot be retrieved and
    /// [`LoadError::Parse`] when the retrieved document is malformed.
    pub fn fetch_from(url: &str) -> Result<Self, LoadError> {
        let format = Format::from_path(url).unwrap_or(Format::RdfXml);
        let body = fetch_document(url)?;
        Ok(Self::load_str(&body, format)?)
    }

    /// Borrows the underlying graph, for validators and other read-only
    /// consumers.
    #[must_use]
    pub fn graph(&self) -> &FastGraph {
        &self.graph
    }

    /// Returns the number of triples in the loaded graph.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.graph.triples().count()
    }

    /// Collects everything the graph asserts about the entity named by
    /// `iri`. Returns `None` when no triple has that subject.
    #[must_use]
    pub fn entity(&self, iri: &str) -> Option<Entity> {
        let mut kinds = Vec::new();
        let mut labels = Vec::new();
        let mut definitions = Vec::new();
        let mut synonyms = Vec::new();
        let mut xrefs = Vec::new();
        let mut superclasses = Vec::new();
        let mut statements = Vec::new();
        let mut axiom_nodes: BTreeSet<String> = BTreeSet::new();

        for t in self.graph.triples().filter_map(Result::ok) {
            let Some(predicate) = term_iri(t.p()) else {
                continue;
            };
            if term_is_iri(t.s(), iri) {
                let object = render_object(t.o());
                match (predicate.as_str(), &object) {
                    (vocab::RDF_TYPE, ObjectValue::Iri(type_iri)) => {
                        if let Some(kind) = EntityKind::from_type_iri(type_iri) {
                            kinds.push(kind);
                        }
                    }
                    (vocab::RDFS_LABEL, ObjectValue::Literal(text)) => {
                        labels.push(text.clone());
                    }
                    (vocab::IAO_DEFINITION, ObjectValue::Literal(text)) => {
                        definitions.push(text.clone());
                    }
                    (vocab::HAS_SYNONYM, ObjectValue::Literal(text)) => {
                        synonyms.push(text.clone());
                    }
                    (vocab::HAS_DB_XREF, ObjectValue::Literal(text)) => {
                        xrefs.push(text.clone());
                    }
                    (vocab::RDFS_SUBCLASS_OF, ObjectValue::Iri(parent)) => {
                        superclasses.push(parent.clone());
                    }
                    _ => {}
                }
                statements.push(Statement { predicate, object });
            } else if predicate == vocab::OWL_ANNOTATED_SOURCE && term_is_iri(t.o(), iri) {
                if let Some(node) = term_bnode(t.s()) {
                    axiom_nodes.insert(node);
                }
            }
        }

        if statements.is_empty() {
            return None;
        }

        if !axiom_nodes.is_empty() {
            for t in self.graph.triples().filter_map(Result::ok) {
                let on_axiom = term_bnode(t.s()).is_some_and(|n| axiom_nodes.contains(&n));
                if on_axiom && term_is_iri(t.p(), vocab::HAS_DB_XREF) {
                    if let Some(text) = term_lexical(t.o()) {
                        xrefs.push(text);
                    }
                }
            }
        }

        kinds.sort_unstable();
        kinds.dedup();
        for list in [
            &mut labels,
            &mut definitions,
            &mut synonyms,
            &mut xrefs,
            &mut superclasses,
        ] {
            list.sort_unstable();
            list.dedup();
        }
        statements.sort();
        statements.dedup();

        Some(Entity {
            iri: iri.to_owned(),
            kinds,
            labels,
            definitions,
            synonyms,
            xrefs,
            superclasses,
            statements,
        })
    }

    /// Returns the IRIs of all entities whose `rdfs:label` or
    /// `oboInOwl:hasSynonym` equals `label`, compared case-insensitively.
    /// The result is sorted, so repeated queries agree.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut hits: BTreeSet<String> = BTreeSet::new();
        for t in self.graph.triples().filter_map(Result::ok) {
            let Some(predicate) = term_iri(t.p()) else {
                continue;
            };
            if predicate != vocab::RDFS_LABEL && predicate != vocab::HAS_SYNONYM {
                continue;
            }
            let matches = term_lexical(t.o()).is_some_and(|text| text.to_lowercase() == needle);
            if matches {
                if let Some(subject) = term_iri(t.s()) {
                    hits.insert(subject);
                }
            }
        }
        hits.into_iter().collect()
    }

    /// Resolves an identifier — a full IRI, a fragment within the HPVCO
    /// namespace, or a label/synonym — to the entity it names.
    ///
    /// Resolution is deterministic: a label matching several entities
    /// yields the lexicographically first IRI.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] when nothing in the loaded graph matches.
    pub fn resolve(&self, identifier: &str) -> Result<Entity, NotFound> {
        if let Some(entity) = self.entity(identifier) {
            return Ok(entity);
        }
        if !identifier.contains(':') {
            let qualified = format!("{}{identifier}", vocab::HPVCO);
            if let Some(entity) = self.entity(&qualified) {
                return Ok(entity);
            }
        }
        if let Some(iri) = self.find_by_label(identifier).into_iter().next() {
            if let Some(entity) = self.entity(&iri) {
                return Ok(entity);
            }
        }
        Err(NotFound {
            identifier: identifier.to_owned(),
        })
    }
}

fn term_iri<T: Term>(term: T) -> Option<String> {
    term.iri().map(|iri| iri.as_str().to_owned())
}

fn term_is_iri<T: Term>(term: T, expected: &str) -> bool {
    term.iri().is_some_and(|iri| iri.as_str() == expected)
}

fn term_lexical<T: Term>(term: T) -> Option<String> {
    term.lexical_form().map(|text| String::from(&*text))
}

fn term_bnode<T: Term>(term: T) -> Option<String> {
    term.bnode_id().map(|node| node.as_str().to_owned())
}

fn render_object<T: Term>(term: T) -> ObjectValue {
    if let Some(iri) = term.iri() {
        ObjectValue::Iri(iri.as_str().to_owned())
    } else if let Some(node) = term.bnode_id() {
        ObjectValue::Blank(node.as_str().to_owned())
    } else if let Some(text) = term.lexical_form() {
        ObjectValue::Literal(String::from(&*text))
    } else {
        ObjectValue::Literal(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_TTL: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix oboInOwl: <http://www.geneontology.org/formats/oboInOwl#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:CervicalCancer a owl:Class ;
  rdfs:label "cervical cancer" ;
  oboInOwl:hasSynonym "cervical carcinoma" ;
  rdfs:subClassOf hpvco:HPVRelatedCancer .

hpvco:HPVRelatedCancer a owl:Class ;
  rdfs:label "HPV-related cancer" .

[] a owl:Axiom ;
  owl:annotatedSource hpvco:CervicalCancer ;
  owl:annotatedProperty <http://purl.obolibrary.org/obo/IAO_0000115> ;
  owl:annotatedTarget "A malignant neoplasm of the uterine cervix." ;
  oboInOwl:hasDbXref "NCIT:C4910" .
"#;

    fn store() -> OntologyStore {
        OntologyStore::load_str(SMALL_TTL, Format::Turtle).unwrap()
    }

    #[test]
    fn entity_collects_types_labels_and_superclasses() {
        let entity = store()
            .entity("https://purl.org/uth/ontology/hpvco#CervicalCancer")
            .unwrap();
        assert_eq!(entity.kinds, vec![EntityKind::Class]);
        assert_eq!(entity.labels, vec!["cervical cancer"]);
        assert_eq!(entity.synonyms, vec!["cervical carcinoma"]);
        assert_eq!(
            entity.superclasses,
            vec!["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"]
        );
    }

    #[test]
    fn entity_collects_xrefs_from_reified_axioms() {
        let entity = store()
            .entity("https://purl.org/uth/ontology/hpvco#CervicalCancer")
            .unwrap();
        assert_eq!(entity.xrefs, vec!["NCIT:C4910"]);
    }

    #[test]
    fn resolve_accepts_fragment_and_label() {
        let s = store();
        let by_fragment = s.resolve("CervicalCancer").unwrap();
        let by_label = s.resolve("cervical cancer").unwrap();
        let by_synonym = s.resolve("Cervical Carcinoma").unwrap();
        assert_eq!(by_fragment, by_label);
        assert_eq!(by_fragment, by_synonym);
    }

    #[test]
    fn resolve_of_absent_identifier_is_not_found() {
        let err = store().resolve("NoSuchTerm").unwrap_err();
        assert_eq!(err.identifier, "NoSuchTerm");
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let s = store();
        assert_eq!(s.resolve("CervicalCancer").ok(), s.resolve("CervicalCancer").ok());
        assert_eq!(s.find_by_label("cervical cancer"), s.find_by_label("cervical cancer"));
    }

    #[test]
    fn concurrent_readers_share_one_graph() {
        let s = store();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = s.clone();
                std::thread::spawn(move || reader.triple_count())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), s.triple_count());
        }
    }
}

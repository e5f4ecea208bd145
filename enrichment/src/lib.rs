//! NCIT definition extraction for the HPV Cancer Ontology.
//!
//! Early HPVCO drafts carried their terminology linkage informally: an
//! NCIT identifier in `rdfs:seeAlso` and two `rdfs:comment` literals per
//! class — the shorter one the preferred synonym, the longer one the
//! definition. The published document uses the curated form instead:
//! `IAO:0000115` definitions, `oboInOwl:hasSynonym` names, and one
//! reified `owl:Axiom` per assertion carrying the normalized
//! `oboInOwl:hasDbXref` code.
//!
//! This crate performs that migration. The input graph is never mutated —
//! published documents get new versions, not in-place edits — so the
//! result is a new graph:
//!
//! ```
//! use hpvco_enrichment::enrich_graph;
//! # use sophia_inmem::graph::FastGraph;
//! # let graph = FastGraph::new();
//! let (enriched, stats) = enrich_graph(&graph)?;
//! # let _ = (enriched, stats);
//! # Ok::<(), hpvco_enrichment::EnrichError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeMap;

use sophia_api::graph::MutableGraph;
use sophia_api::prelude::*;
use sophia_api::term::{BnodeId, IriRef, SimpleTerm};
use sophia_api::MownStr;
use sophia_inmem::graph::FastGraph;

use hpvco_ontology::model::iris::{HAS_DB_XREF, HAS_SYNONYM, IAO_DEFINITION, XSD_STRING};

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
const OWL_AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
const OWL_ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
const OWL_ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

/// A failure while building or serializing the enriched graph.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    /// Inserting a triple into the output graph failed.
    #[error("graph mutation failed: {0}")]
    Graph(String),
    /// The enriched graph could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Counters reported by a migration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Classes whose annotations were migrated.
    pub classes_enriched: usize,
    /// Subjects carrying `rdfs:seeAlso` that were skipped for lack of
    /// both a name and a definition comment.
    pub skipped: usize,
}

/// One class scheduled for migration.
struct Candidate {
    xref: String,
    name: String,
    definition: String,
    consumed_see_also: String,
}

/// Migrates legacy `rdfs:seeAlso`/`rdfs:comment` annotations into the
/// curated form, returning a new graph and the migration counters.
///
/// Subjects qualify when they carry a literal `rdfs:seeAlso` identifier
/// and at least two `rdfs:comment` literals; the shorter comment becomes
/// the synonym and the longer the definition. Identifiers are normalized
/// to the `NCIT:` prefix. Under-annotated subjects are skipped, never
/// failed. Triples not involved in the migration are carried over
/// unchanged.
///
/// # Errors
///
/// Returns [`EnrichError::Graph`] when a triple cannot be inserted into
/// the output graph.
pub fn enrich_graph(graph: &FastGraph) -> Result<(FastGraph, EnrichmentStats), EnrichError> {
    let mut stats = EnrichmentStats::default();

    // Gather the legacy annotations per subject IRI.
    let mut see_also: BTreeMap<String, String> = BTreeMap::new();
    let mut comments: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for t in graph.triples().filter_map(Result::ok) {
        let (Some(subject), Some(predicate)) = (term_iri(t.s()), term_iri(t.p())) else {
            continue;
        };
        match predicate.as_str() {
            RDFS_SEE_ALSO => {
                if let Some(raw) = term_lexical(t.o()) {
                    see_also.entry(subject).or_insert(raw);
                }
            }
            RDFS_COMMENT => {
                if let Some(text) = term_lexical(t.o()) {
                    comments.entry(subject).or_default().push(text);
                }
            }
            _ => {}
        }
    }

    let mut candidates: BTreeMap<String, Candidate> = BTreeMap::new();
    for (subject, raw) in see_also {
        let mut texts = comments.remove(&subject).unwrap_or_default();
        if texts.len() < 2 {
            // Nothing to split into name and definition.
            stats.skipped += 1;
            continue;
        }
        // The definition is longer than the name; ties break lexically so
        // repeated runs agree.
        texts.sort_by(|a, b| Ord::cmp(&a.len(), &b.len()).then_with(|| a.cmp(b)));
        let name = texts.first().cloned().unwrap_or_default();
        let definition = texts.last().cloned().unwrap_or_default();
        let xref = if raw.starts_with("NCIT:") {
            raw.clone()
        } else {
            format!("NCIT:{raw}")
        };
        candidates.insert(
            subject,
            Candidate {
                xref,
                name,
                definition,
                consumed_see_also: raw,
            },
        );
    }

    // Rebuild: carry over everything except the consumed legacy triples.
    let mut out = FastGraph::new();
    for t in graph.triples().filter_map(Result::ok) {
        let consumed = term_iri(t.s()).is_some_and(|subject| {
            candidates.get(&subject).is_some_and(|c| {
                let predicate = term_iri(t.p());
                let text = term_lexical(t.o());
                match predicate.as_deref() {
                    Some(RDFS_COMMENT) => {
                        text.as_deref() == Some(&c.name) || text.as_deref() == Some(&c.definition)
                    }
                    Some(RDFS_SEE_ALSO) => text.as_deref() == Some(&c.consumed_see_also),
                    _ => false,
                }
            })
        });
        if !consumed {
            insert(&mut out, t.s(), t.p(), t.o())?;
        }
    }

    // Graft the curated annotations and their reified provenance.
    let mut axiom_counter = 0usize;
    for (subject, candidate) in &candidates {
        graft(
            &mut out,
            subject,
            IAO_DEFINITION,
            &candidate.definition,
            &candidate.xref,
            &mut axiom_counter,
        )?;
        graft(
            &mut out,
            subject,
            HAS_SYNONYM,
            &candidate.name,
            &candidate.xref,
            &mut axiom_counter,
        )?;
        stats.classes_enriched += 1;
    }

    Ok((out, stats))
}

/// Serializes an enriched graph to RDF/XML, the publication format.
///
/// # Errors
///
/// Returns [`EnrichError::Serialize`] when the serializer fails.
pub fn to_rdf_xml(graph: &FastGraph) -> Result<String, EnrichError> {
    use sophia_api::serializer::{Stringifier, TripleSerializer};
    let mut serializer = sophia_xml::serializer::RdfXmlSerializer::new_stringifier();
    let xml = serializer
        .serialize_graph(graph)
        .map_err(|e| EnrichError::Serialize(e.to_string()))?
        .to_string();
    Ok(xml)
}

/// Adds `subject property target` plus the reified axiom carrying the
/// cross-reference:
///
/// ```text
/// [ a owl:Axiom ;
///   owl:annotatedSource   subject ;
///   owl:annotatedProperty property ;
///   owl:annotatedTarget   target ;
///   oboInOwl:hasDbXref    xref ] .
/// ```
fn graft(
    out: &mut FastGraph,
    subject: &str,
    property: &str,
    target: &str,
    xref: &str,
    axiom_counter: &mut usize,
) -> Result<(), EnrichError> {
    insert(out, &iri_term(subject), &iri_term(property), &literal_term(target))?;

    let label = format!("enrich{}", *axiom_counter);
    *axiom_counter += 1;
    let node = bnode_term(&label);
    insert(out, &node, &iri_term(RDF_TYPE), &iri_term(OWL_AXIOM))?;
    insert(out, &node, &iri_term(OWL_ANNOTATED_SOURCE), &iri_term(subject))?;
    insert(out, &node, &iri_term(OWL_ANNOTATED_PROPERTY), &iri_term(property))?;
    insert(out, &node, &iri_term(OWL_ANNOTATED_TARGET), &literal_term(target))?;
    insert(out, &node, &iri_term(HAS_DB_XREF), &literal_term(xref))?;
    Ok(())
}

fn insert<TS, TP, TO>(out: &mut FastGraph, s: TS, p: TP, o: TO) -> Result<(), EnrichError>
where
    TS: Term,
    TP: Term,
    TO: Term,
{
    out.insert(s, p, o)
        .map(|_| ())
        .map_err(|e| EnrichError::Graph(e.to_string()))
}

fn iri_term(iri: &str) -> SimpleTerm<'_> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(iri)))
}

fn literal_term(text: &str) -> SimpleTerm<'_> {
    SimpleTerm::LiteralDatatype(
        MownStr::from(text),
        IriRef::new_unchecked(MownStr::from(XSD_STRING)),
    )
}

fn bnode_term(label: &str) -> SimpleTerm<'_> {
    SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(label)))
}

fn term_iri<T: Term>(term: T) -> Option<String> {
    term.iri().map(|iri| iri.as_str().to_owned())
}

fn term_lexical<T: Term>(term: T) -> Option<String> {
    term.lexical_form().map(|text| String::from(&*text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpvco_store::{Format, OntologyStore};

    const LEGACY: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:CervicalCancer a owl:Class ;
  rdfs:label "cervical cancer" ;
  rdfs:comment "cervical carcinoma" ;
  rdfs:comment "A malignant neoplasm of the uterine cervix caused by persistent high-risk HPV infection." ;
  rdfs:seeAlso "C4910" .

hpvco:UnderAnnotated a owl:Class ;
  rdfs:comment "only one comment" ;
  rdfs:seeAlso "NCIT:C9999" .
"#;

    fn legacy_graph() -> FastGraph {
        hpvco_store::load_graph(LEGACY, Format::Turtle).unwrap()
    }

    #[test]
    fn migrates_comments_into_definition_and_synonym() {
        let (enriched, stats) = enrich_graph(&legacy_graph()).unwrap();
        assert_eq!(stats.classes_enriched, 1);
        assert_eq!(stats.skipped, 1);

        let store = OntologyStore::from_graph(enriched);
        let entity = store
            .entity("https://purl.org/uth/ontology/hpvco#CervicalCancer")
            .unwrap();
        assert_eq!(entity.synonyms, vec!["cervical carcinoma"]);
        assert_eq!(
            entity.definitions,
            vec!["A malignant neoplasm of the uterine cervix caused by persistent high-risk HPV infection."]
        );
        assert_eq!(entity.xrefs, vec!["NCIT:C4910"]);
    }

    #[test]
    fn consumed_legacy_triples_are_gone() {
        let (enriched, _) = enrich_graph(&legacy_graph()).unwrap();
        let store = OntologyStore::from_graph(enriched);
        let entity = store
            .entity("https://purl.org/uth/ontology/hpvco#CervicalCancer")
            .unwrap();
        assert!(!entity
            .statements
            .iter()
            .any(|s| s.predicate == RDFS_COMMENT || s.predicate == RDFS_SEE_ALSO));
    }

    #[test]
    fn under_annotated_subjects_are_left_untouched() {
        let (enriched, _) = enrich_graph(&legacy_graph()).unwrap();
        let store = OntologyStore::from_graph(enriched);
        let entity = store
            .entity("https://purl.org/uth/ontology/hpvco#UnderAnnotated")
            .unwrap();
        assert!(entity.definitions.is_empty());
        assert!(entity
            .statements
            .iter()
            .any(|s| s.predicate == RDFS_SEE_ALSO));
    }

    #[test]
    fn identifier_normalization_adds_the_ncit_prefix_once() {
        let ttl = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix hpvco: <https://purl.org/uth/ontology/hpvco#> .

hpvco:A a owl:Class ;
  rdfs:comment "short" ;
  rdfs:comment "a considerably longer definition text" ;
  rdfs:seeAlso "NCIT:C1111" .
"#;
        let graph = hpvco_store::load_graph(ttl, Format::Turtle).unwrap();
        let (enriched, _) = enrich_graph(&graph).unwrap();
        let store = OntologyStore::from_graph(enriched);
        let entity = store
            .entity("https://purl.org/uth/ontology/hpvco#A")
            .unwrap();
        assert_eq!(entity.xrefs, vec!["NCIT:C1111"]);
    }

    #[test]
    fn migration_adds_exactly_nine_triples_per_class() {
        let graph = legacy_graph();
        let before = graph.triples().count();
        let (enriched, _) = enrich_graph(&graph).unwrap();
        let after = enriched.triples().count();
        // -3 legacy triples, +2 assertions, +10 reified axiom triples.
        assert_eq!(after, before + 9);
    }

    #[test]
    fn enriched_graph_serializes_to_rdf_xml() {
        let (enriched, _) = enrich_graph(&legacy_graph()).unwrap();
        let xml = to_rdf_xml(&enriched).unwrap();
        assert!(xml.contains("rdf:RDF"));
    }
}

//! Declaration-resolution validator.
//!
//! Every IRI referenced in an axiom position must resolve to an entity
//! declared in the graph (a subject of some `rdf:type` assertion) or fall
//! in a recognized external namespace. One violation is reported per
//! undeclared IRI, in deterministic order. Blank nodes used as objects
//! must be described somewhere in the graph.

use std::collections::BTreeSet;

use sophia_api::prelude::*;

use crate::report::{Finding, ValidationReport};
use crate::vocab;
use hpvco_store::OntologyStore;

const CHECK: &str = "graph/declarations";

/// Predicates whose IRI objects participate in axioms and therefore must
/// resolve.
const AXIOM_PREDICATES: &[&str] = &[
    vocab::RDF_TYPE,
    vocab::RDFS_SUBCLASS_OF,
    vocab::RDFS_DOMAIN,
    vocab::RDFS_RANGE,
    vocab::OWL_DISJOINT_WITH,
    vocab::OWL_EQUIVALENT_CLASS,
    vocab::OWL_ANNOTATED_SOURCE,
    vocab::OWL_ANNOTATED_PROPERTY,
];

/// Validates that every referenced IRI is declared or external.
#[must_use]
pub fn validate(store: &OntologyStore) -> ValidationReport {
    let mut report = ValidationReport::new();
    let graph = store.graph();

    // Pass 1: everything that is declared, and every blank node that is
    // described (appears as a subject).
    let mut declared: BTreeSet<String> = BTreeSet::new();
    let mut described_bnodes: BTreeSet<String> = BTreeSet::new();
    for t in graph.triples().filter_map(Result::ok) {
        if vocab::term_iri(t.p()).as_deref() == Some(vocab::RDF_TYPE) {
            if let Some(subject) = vocab::term_iri(t.s()) {
                declared.insert(subject);
            }
        }
        if let Some(node) = vocab::term_bnode(t.s()) {
            described_bnodes.insert(node);
        }
    }

    // Pass 2: everything that is referenced.
    let mut undeclared: BTreeSet<String> = BTreeSet::new();
    let mut dangling_bnodes: BTreeSet<String> = BTreeSet::new();
    for t in graph.triples().filter_map(Result::ok) {
        let Some(predicate) = vocab::term_iri(t.p()) else {
            continue;
        };
        if !declared.contains(&predicate) && !vocab::is_external(&predicate) {
            undeclared.insert(predicate.clone());
        }
        if AXIOM_PREDICATES.contains(&predicate.as_str()) {
            if let Some(object) = vocab::term_iri(t.o()) {
                if !declared.contains(&object) && !vocab::is_external(&object) {
                    undeclared.insert(object);
                }
            }
        }
        if let Some(node) = vocab::term_bnode(t.o()) {
            if !described_bnodes.contains(&node) {
                dangling_bnodes.insert(node);
            }
        }
    }

    if undeclared.is_empty() {
        report.push(Finding::pass(
            CHECK,
            format!(
                "all referenced IRIs resolve ({} declared entities)",
                declared.len()
            ),
        ));
    } else {
        for iri in undeclared {
            report.push(Finding::fail(
                CHECK,
                format!("undeclared IRI referenced in axiom: {iri}"),
            ));
        }
    }

    if dangling_bnodes.is_empty() {
        report.push(Finding::pass(CHECK, "no dangling blank nodes"));
    } else {
        report.push(Finding::fail_with_details(
            CHECK,
            "blank nodes used as objects but never described",
            dangling_bnodes.into_iter().map(|n| format!("_:{n}")).collect(),
        ));
    }

    report
}

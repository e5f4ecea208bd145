//! Profile-construct validator.
//!
//! HPVCO declares a lightweight OWL subset: class and property
//! declarations, subclass, equivalence, disjointness, domain/range,
//! named individuals, annotations, and reified annotation axioms.
//! Any other `owl:` vocabulary found in the graph is outside the declared
//! profile and is reported. Description-logic consistency is not checked
//! here; that is the business of external reasoners.

use std::collections::BTreeSet;

use sophia_api::prelude::*;

use crate::report::{Finding, ValidationReport};
use crate::vocab;
use hpvco_store::OntologyStore;

const CHECK: &str = "graph/profile";

/// The `owl:` vocabulary admitted by the declared profile.
const SUPPORTED_OWL_TERMS: &[&str] = &[
    "http://www.w3.org/2002/07/owl#Ontology",
    "http://www.w3.org/2002/07/owl#Class",
    "http://www.w3.org/2002/07/owl#Thing",
    "http://www.w3.org/2002/07/owl#ObjectProperty",
    "http://www.w3.org/2002/07/owl#DatatypeProperty",
    "http://www.w3.org/2002/07/owl#AnnotationProperty",
    "http://www.w3.org/2002/07/owl#FunctionalProperty",
    "http://www.w3.org/2002/07/owl#NamedIndividual",
    "http://www.w3.org/2002/07/owl#Axiom",
    "http://www.w3.org/2002/07/owl#disjointWith",
    "http://www.w3.org/2002/07/owl#equivalentClass",
    "http://www.w3.org/2002/07/owl#sameAs",
    "http://www.w3.org/2002/07/owl#differentFrom",
    "http://www.w3.org/2002/07/owl#imports",
    "http://www.w3.org/2002/07/owl#versionInfo",
    "http://www.w3.org/2002/07/owl#versionIRI",
    "http://www.w3.org/2002/07/owl#deprecated",
    "http://www.w3.org/2002/07/owl#annotatedSource",
    "http://www.w3.org/2002/07/owl#annotatedProperty",
    "http://www.w3.org/2002/07/owl#annotatedTarget",
];

/// Validates that axioms use only the logical constructs of the declared
/// profile.
#[must_use]
pub fn validate(store: &OntologyStore) -> ValidationReport {
    let mut report = ValidationReport::new();

    let mut unsupported: BTreeSet<String> = BTreeSet::new();
    for t in store.graph().triples().filter_map(Result::ok) {
        for iri in [
            vocab::term_iri(t.s()),
            vocab::term_iri(t.p()),
            vocab::term_iri(t.o()),
        ]
        .into_iter()
        .flatten()
        {
            if iri.starts_with(vocab::OWL) && !SUPPORTED_OWL_TERMS.contains(&iri.as_str()) {
                unsupported.insert(iri);
            }
        }
    }

    if unsupported.is_empty() {
        report.push(Finding::pass(
            CHECK,
            "all axioms use supported constructs for the declared profile",
        ));
    } else {
        for iri in unsupported {
            report.push(Finding::fail(
                CHECK,
                format!("construct outside the declared profile: {iri}"),
            ));
        }
    }

    report
}

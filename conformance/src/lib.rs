//! Schema validation for the HPV Cancer Ontology.
//!
//! The published artifact is static data; it cannot fail on its own. What
//! can go wrong is structural: a reference to an entity nobody declared, a
//! construct outside the declared OWL subset, a cross-reference that is
//! not an NCIT code. This crate detects those conditions and reports them
//! as a non-fatal list of findings — an empty failure set means valid.
//! Description-logic consistency checking is explicitly out of scope and
//! delegated to external reasoners.
//!
//! # Entry Points
//!
//! ```
//! use hpvco_store::{Format, OntologyStore};
//!
//! let rdf = hpvco_ontology::serializer::rdfxml::to_rdf_xml(hpvco_ontology::Ontology::full());
//! let store = OntologyStore::load_str(&rdf, Format::RdfXml)?;
//! let report = hpvco_conformance::run_all(&store);
//! assert!(report.all_passed());
//! # Ok::<(), hpvco_store::ParseError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;
pub mod vocab;

pub use report::{Finding, Severity, ValidationReport};

use hpvco_store::OntologyStore;

/// Runs all graph validators over a loaded store and returns the
/// aggregated report.
///
/// Validators run in this order:
/// 1. declaration resolution (undeclared IRIs, dangling blank nodes)
/// 2. profile constructs (vocabulary outside the declared OWL subset)
/// 3. cross-reference lexical form (NCIT codes)
#[must_use]
pub fn run_all(store: &OntologyStore) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.extend(validators::declarations::validate(store));
    report.extend(validators::profile::validate(store));
    report.extend(validators::xrefs::validate(store));
    report
}

/// Runs the curated-data validator over the live typed ontology.
#[must_use]
pub fn run_curated() -> ValidationReport {
    validators::curated::validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpvco_store::Format;

    #[test]
    fn curated_data_passes() {
        assert!(run_curated().all_passed());
    }

    #[test]
    fn published_serialization_passes_all_graph_validators() {
        let rdf =
            hpvco_ontology::serializer::rdfxml::to_rdf_xml(hpvco_ontology::Ontology::full());
        let store = OntologyStore::load_str(&rdf, Format::RdfXml).unwrap();
        let report = run_all(&store);
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "violations: {failures:#?}");
    }
}

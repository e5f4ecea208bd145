//! Structural validator for the curated typed ontology.
//!
//! Runs against the live `hpvco_ontology::Ontology::full()` data, before
//! any serialization:
//! - subclass, disjoint-with, domain, and range targets must be known
//!   classes or recognized external terms
//! - individual type assertions must reference known classes
//! - individual property assertions must use declared properties, and IRI
//!   values must name declared entities
//! - IRIs must be unique across classes, properties, and individuals
//! - NCIT cross-references must be lexically well-formed

use std::collections::HashSet;

use crate::report::{Finding, ValidationReport};
use crate::validators::xrefs::ncit_pattern;
use crate::vocab;

const CHECK: &str = "curated/structure";

/// Validates the curated ontology data.
#[must_use]
pub fn validate() -> ValidationReport {
    let mut report = ValidationReport::new();
    let ontology = hpvco_ontology::Ontology::full();

    let mut known_classes: HashSet<&'static str> = HashSet::new();
    let mut known_properties: HashSet<&'static str> = HashSet::new();
    let mut known_individuals: HashSet<&'static str> = HashSet::new();
    for module in &ontology.topics {
        for class in &module.classes {
            known_classes.insert(class.id);
        }
        for prop in &module.properties {
            known_properties.insert(prop.id);
        }
        for ind in &module.individuals {
            known_individuals.insert(ind.id);
        }
    }

    let mut violations: Vec<String> = Vec::new();

    // Subclass and disjoint-with targets
    for module in &ontology.topics {
        for class in &module.classes {
            for parent in class.subclass_of {
                if !known_classes.contains(parent) && !vocab::is_external(parent) {
                    violations.push(format!(
                        "Class {} has unknown subClassOf target: {}",
                        class.id, parent
                    ));
                }
            }
            for other in class.disjoint_with {
                if !known_classes.contains(other) {
                    violations.push(format!(
                        "Class {} has unknown disjointWith target: {}",
                        class.id, other
                    ));
                }
            }
        }
    }

    // Property domain and range targets
    for module in &ontology.topics {
        for prop in &module.properties {
            if let Some(domain) = prop.domain {
                if !known_classes.contains(domain) && !vocab::is_external(domain) {
                    violations.push(format!(
                        "Property {} has unknown domain: {}",
                        prop.id, domain
                    ));
                }
            }
            if !known_classes.contains(prop.range) && !vocab::is_external(prop.range) {
                violations.push(format!(
                    "Property {} has unknown range: {}",
                    prop.id, prop.range
                ));
            }
        }
    }

    // Individual type and property assertions
    for module in &ontology.topics {
        for ind in &module.individuals {
            if !known_classes.contains(ind.type_) {
                violations.push(format!(
                    "Individual {} has unknown type: {}",
                    ind.id, ind.type_
                ));
            }
            for (prop, value) in ind.properties {
                if !known_properties.contains(prop) {
                    violations.push(format!(
                        "Individual {} asserts undeclared property: {}",
                        ind.id, prop
                    ));
                }
                if let hpvco_ontology::IndividualValue::IriRef(target) = value {
                    if !known_individuals.contains(target) && !known_classes.contains(target) {
                        violations.push(format!(
                            "Individual {} references unknown entity: {}",
                            ind.id, target
                        ));
                    }
                }
            }
        }
    }

    // IRI uniqueness across all entity kinds
    let mut seen: HashSet<&'static str> = HashSet::new();
    for module in &ontology.topics {
        let ids = module
            .classes
            .iter()
            .map(|c| c.id)
            .chain(module.properties.iter().map(|p| p.id))
            .chain(module.individuals.iter().map(|i| i.id));
        for id in ids {
            if !seen.insert(id) {
                violations.push(format!("Duplicate IRI: {id}"));
            }
        }
    }

    if violations.is_empty() {
        report.push(Finding::pass(
            CHECK,
            "all curated targets resolve and all IRIs are unique",
        ));
    } else {
        report.push(Finding::fail_with_details(
            CHECK,
            "curated ontology has structural violations",
            violations,
        ));
    }

    // NCIT cross-reference lexical form
    if let Some(pattern) = ncit_pattern() {
        let mut malformed: Vec<String> = Vec::new();
        for module in &ontology.topics {
            let codes = module
                .classes
                .iter()
                .filter_map(|c| c.ncit)
                .chain(module.individuals.iter().filter_map(|i| i.ncit));
            for code in codes {
                if !pattern.is_match(code) {
                    malformed.push(code.to_owned());
                }
            }
        }
        if malformed.is_empty() {
            report.push(Finding::pass(CHECK, "all NCIT codes are well-formed"));
        } else {
            for code in malformed {
                report.push(Finding::warn(
                    CHECK,
                    format!("cross-reference is not a well-formed NCIT code: {code}"),
                ));
            }
        }
    } else {
        report.push(Finding::fail(CHECK, "cross-reference pattern failed to compile"));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_ontology_is_structurally_valid() {
        let report = validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "curated violations: {failures:#?}");
    }
}

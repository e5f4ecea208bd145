//! Cross-reference lexical validator.
//!
//! HPVCO cross-references are NCI Thesaurus concept codes of the form
//! `NCIT:C…`. The codes themselves are opaque and resolved by external
//! services, so a malformed value is reported as a warning, not a
//! violation.

use std::sync::OnceLock;

use regex::Regex;
use sophia_api::prelude::*;

use crate::report::{Finding, ValidationReport};
use crate::vocab;
use hpvco_store::OntologyStore;

const CHECK: &str = "graph/xrefs";

pub(crate) fn ncit_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^NCIT:C[0-9]+$").ok())
        .as_ref()
}

/// Validates the lexical form of every `oboInOwl:hasDbXref` value.
#[must_use]
pub fn validate(store: &OntologyStore) -> ValidationReport {
    let mut report = ValidationReport::new();
    let Some(pattern) = ncit_pattern() else {
        report.push(Finding::fail(CHECK, "cross-reference pattern failed to compile"));
        return report;
    };

    let mut checked = 0usize;
    let mut malformed: Vec<String> = Vec::new();
    for t in store.graph().triples().filter_map(Result::ok) {
        if vocab::term_iri(t.p()).as_deref() != Some(vocab::HAS_DB_XREF) {
            continue;
        }
        checked += 1;
        match vocab::term_lexical(t.o()) {
            Some(code) if pattern.is_match(&code) => {}
            Some(code) => malformed.push(code),
            None => malformed.push("<non-literal cross-reference>".to_owned()),
        }
    }

    if malformed.is_empty() {
        report.push(Finding::pass(
            CHECK,
            format!("{checked} cross-references are well-formed NCIT codes"),
        ));
    } else {
        malformed.sort();
        malformed.dedup();
        for code in malformed {
            report.push(Finding::warn(
                CHECK,
                format!("cross-reference is not a well-formed NCIT code: {code}"),
            ));
        }
    }

    report
}

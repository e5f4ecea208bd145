//! Exported-artifact validator.
//!
//! Checks the serialized files an `hpvco export` run leaves on disk:
//! - `hpvco.rdf` is an XML document with an `rdf:RDF` root
//! - `hpvco.ttl` has prefix declarations and triple statements
//! - `hpvco.nt` has every non-comment line terminated with " ."
//! - `hpvco.json` parses and carries `@context` and `@graph`
//!
//! Missing files are reported, not treated as I/O errors, so a partial
//! export still yields a complete report.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::report::{Finding, ValidationReport};

const CHECK: &str = "artifacts";

/// Validates all exported artifacts in `dir`.
///
/// # Errors
///
/// Returns an error only when a file exists but cannot be read.
pub fn validate(dir: &Path) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    validate_rdfxml(dir, &mut report)?;
    validate_turtle(dir, &mut report)?;
    validate_ntriples(dir, &mut report)?;
    validate_jsonld(dir, &mut report)?;
    Ok(report)
}

fn read(dir: &Path, name: &str, report: &mut ValidationReport) -> Result<Option<String>> {
    let path = dir.join(name);
    if !path.exists() {
        report.push(Finding::fail(
            CHECK,
            format!("{name} not found in artifacts directory"),
        ));
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

fn validate_rdfxml(dir: &Path, report: &mut ValidationReport) -> Result<()> {
    let Some(content) = read(dir, "hpvco.rdf", report)? else {
        return Ok(());
    };
    let has_prolog = content.trim_start().starts_with("<?xml");
    let has_root = content.contains("<rdf:RDF") && content.contains("</rdf:RDF>");
    let has_ontology = content.contains("owl:Ontology");
    if has_prolog && has_root && has_ontology {
        report.push(Finding::pass(
            CHECK,
            format!("hpvco.rdf has expected RDF/XML structure ({} bytes)", content.len()),
        ));
    } else {
        let mut issues = Vec::new();
        if !has_prolog {
            issues.push("Missing XML prolog".to_owned());
        }
        if !has_root {
            issues.push("Missing rdf:RDF root element".to_owned());
        }
        if !has_ontology {
            issues.push("No owl:Ontology header found".to_owned());
        }
        report.push(Finding::fail_with_details(
            CHECK,
            "hpvco.rdf has structural issues",
            issues,
        ));
    }
    Ok(())
}

fn validate_turtle(dir: &Path, report: &mut ValidationReport) -> Result<()> {
    let Some(content) = read(dir, "hpvco.ttl", report)? else {
        return Ok(());
    };
    let prefix_count = content
        .lines()
        .filter(|l| l.trim_start().starts_with("@prefix"))
        .count();
    let has_triples = content.contains(" a ") || content.contains("rdf:type");
    if prefix_count >= 7 && has_triples {
        report.push(Finding::pass(
            CHECK,
            format!("hpvco.ttl has {prefix_count} @prefix declarations and triple statements"),
        ));
    } else {
        report.push(Finding::fail(
            CHECK,
            format!(
                "hpvco.ttl looks malformed ({prefix_count} @prefix declarations, triples: {has_triples})"
            ),
        ));
    }
    Ok(())
}

fn validate_ntriples(dir: &Path, report: &mut ValidationReport) -> Result<()> {
    let Some(content) = read(dir, "hpvco.nt", report)? else {
        return Ok(());
    };
    let mut malformed: Vec<String> = Vec::new();
    let mut triple_count = 0usize;
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.ends_with(" .") {
            triple_count += 1;
        } else {
            malformed.push(format!("line {}: does not end with \" .\"", i + 1));
        }
    }
    if malformed.is_empty() {
        report.push(Finding::pass(
            CHECK,
            format!("hpvco.nt is valid N-Triples ({triple_count} triples)"),
        ));
    } else {
        malformed.truncate(10); // limit output
        report.push(Finding::fail_with_details(
            CHECK,
            "hpvco.nt has malformed lines",
            malformed,
        ));
    }
    Ok(())
}

fn validate_jsonld(dir: &Path, report: &mut ValidationReport) -> Result<()> {
    let Some(content) = read(dir, "hpvco.json", report)? else {
        return Ok(());
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(value) if value.get("@context").is_some() && value.get("@graph").is_some() => {
            report.push(Finding::pass(CHECK, "hpvco.json is a JSON-LD document"));
        }
        Ok(_) => {
            report.push(Finding::fail(
                CHECK,
                "hpvco.json parses but lacks @context or @graph",
            ));
        }
        Err(e) => {
            report.push(Finding::fail(CHECK, format!("hpvco.json is not valid JSON: {e}")));
        }
    }
    Ok(())
}

//! N-Triples serializer for the HPV Cancer Ontology.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs,
//! labeled blank nodes for the reified NCIT provenance axioms). N-Triples
//! is suitable for streaming, bulk loading, and diff-friendly storage.

use crate::model::iris::*;
use crate::model::{Class, Individual, IndividualValue, Ontology, Property, PropertyKind};

const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
const OWL_AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
const OWL_ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
const OWL_ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Serializes the complete HPV Cancer Ontology to an N-Triples string.
#[must_use]
pub fn to_ntriples(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(256 * 1024);
    let mut axiom_counter = 0usize;

    // Ontology header
    triple(&mut out, ontology.ontology_iri, RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(
        &mut out,
        ontology.ontology_iri,
        RDFS_LABEL,
        &lit(crate::model::ONTOLOGY_LABEL),
    );
    triple(
        &mut out,
        ontology.ontology_iri,
        RDFS_COMMENT,
        &lit(crate::model::ONTOLOGY_COMMENT),
    );
    triple(
        &mut out,
        ontology.ontology_iri,
        OWL_VERSION_INFO,
        &lit(ontology.version),
    );
    for module in &ontology.topics {
        for question in module.topic.competency_questions {
            triple(
                &mut out,
                ontology.ontology_iri,
                COMPETENCY_QUESTION,
                &lit(question),
            );
        }
    }

    // Annotation properties
    for ap in &ontology.annotation_properties {
        triple(&mut out, ap.id, RDF_TYPE, &iri(OWL_ANNOTATION_PROPERTY));
        triple(&mut out, ap.id, RDFS_LABEL, &lit(ap.label));
        triple(&mut out, ap.id, RDFS_COMMENT, &lit(ap.comment));
        triple(&mut out, ap.id, RDFS_RANGE, &iri(ap.range));
    }

    for module in &ontology.topics {
        for class in &module.classes {
            write_class(&mut out, class, &mut axiom_counter);
        }
        for prop in &module.properties {
            write_property(&mut out, prop);
        }
        for ind in &module.individuals {
            write_individual(&mut out, ind);
        }
    }

    out
}

fn write_class(out: &mut String, class: &Class, axiom_counter: &mut usize) {
    triple(out, class.id, RDF_TYPE, &iri(OWL_CLASS));
    triple(out, class.id, RDFS_LABEL, &lit(class.label));
    triple(out, class.id, IAO_DEFINITION, &lit(class.definition));
    if let Some(synonym) = class.synonym {
        triple(out, class.id, HAS_SYNONYM, &lit(synonym));
    }
    for parent in class.subclass_of {
        triple(out, class.id, RDFS_SUBCLASS_OF, &iri(parent));
    }
    for other in class.disjoint_with {
        triple(out, class.id, OWL_DISJOINT_WITH, &iri(other));
    }
    if let Some(ncit) = class.ncit {
        write_axiom(out, class.id, IAO_DEFINITION, class.definition, ncit, axiom_counter);
        if let Some(synonym) = class.synonym {
            write_axiom(out, class.id, HAS_SYNONYM, synonym, ncit, axiom_counter);
        }
    }
}

fn write_axiom(
    out: &mut String,
    source: &str,
    property: &str,
    target: &str,
    xref: &str,
    axiom_counter: &mut usize,
) {
    let node = format!("_:axiom{}", *axiom_counter);
    *axiom_counter += 1;
    bnode_triple(out, &node, RDF_TYPE, &iri(OWL_AXIOM));
    bnode_triple(out, &node, OWL_ANNOTATED_SOURCE, &iri(source));
    bnode_triple(out, &node, OWL_ANNOTATED_PROPERTY, &iri(property));
    bnode_triple(out, &node, OWL_ANNOTATED_TARGET, &lit(target));
    bnode_triple(out, &node, HAS_DB_XREF, &lit(xref));
}

fn write_property(out: &mut String, prop: &Property) {
    let type_iri = match prop.kind {
        PropertyKind::Datatype => OWL_DATATYPE_PROPERTY,
        PropertyKind::Object => OWL_OBJECT_PROPERTY,
        PropertyKind::Annotation => OWL_ANNOTATION_PROPERTY,
    };
    triple(out, prop.id, RDF_TYPE, &iri(type_iri));
    if prop.functional {
        triple(out, prop.id, RDF_TYPE, &iri(OWL_FUNCTIONAL_PROPERTY));
    }
    triple(out, prop.id, RDFS_LABEL, &lit(prop.label));
    triple(out, prop.id, RDFS_COMMENT, &lit(prop.comment));
    if let Some(domain) = prop.domain {
        triple(out, prop.id, RDFS_DOMAIN, &iri(domain));
    }
    triple(out, prop.id, RDFS_RANGE, &iri(prop.range));
}

fn write_individual(out: &mut String, ind: &Individual) {
    triple(out, ind.id, RDF_TYPE, &iri(OWL_NAMED_INDIVIDUAL));
    triple(out, ind.id, RDF_TYPE, &iri(ind.type_));
    triple(out, ind.id, RDFS_LABEL, &lit(ind.label));
    triple(out, ind.id, RDFS_COMMENT, &lit(ind.comment));
    if let Some(ncit) = ind.ncit {
        triple(out, ind.id, HAS_DB_XREF, &lit(ncit));
    }
    for (prop_iri, value) in ind.properties {
        let obj = individual_value_to_object(value);
        triple(out, ind.id, prop_iri, &obj);
    }
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn bnode_triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push_str(subj);
    out.push_str(" <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{s}>")
}

fn lit(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

fn individual_value_to_object(value: &IndividualValue) -> String {
    match value {
        IndividualValue::Str(s) => lit(s),
        IndividualValue::Int(i) => format!("\"{i}\"^^<{XSD_INTEGER}>"),
        IndividualValue::Bool(b) => format!("\"{b}\"^^<{XSD_BOOLEAN}>"),
        IndividualValue::IriRef(iri_ref) => iri(iri_ref),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn produces_non_empty_ntriples() {
        let nt = to_ntriples(Ontology::full());
        assert!(!nt.is_empty());
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(Ontology::full());
        for line in nt.lines() {
            if !line.is_empty() {
                assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
            }
        }
    }

    #[test]
    fn contains_owl_class_declarations() {
        let nt = to_ntriples(Ontology::full());
        assert!(nt.contains(&format!("<{OWL_CLASS}>")));
    }

    #[test]
    fn axiom_blank_nodes_are_distinct() {
        let nt = to_ntriples(Ontology::full());
        let axioms = nt
            .lines()
            .filter(|l| l.contains(&format!("<{OWL_AXIOM}>")))
            .count();
        let distinct: std::collections::HashSet<&str> = nt
            .lines()
            .filter(|l| l.starts_with("_:"))
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(axioms, distinct.len());
    }
}

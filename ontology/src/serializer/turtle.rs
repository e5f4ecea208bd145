//! Turtle 1.1 serializer for the HPV Cancer Ontology.
//!
//! Produces a valid Turtle document with the same triple content as the
//! canonical RDF/XML serialization: ontology header, annotation-property
//! declarations, classes with reified NCIT provenance axioms, properties,
//! and named individuals.

use crate::model::iris::*;
use crate::model::{Class, Individual, IndividualValue, Ontology, Property, PropertyKind};

/// Serializes the complete HPV Cancer Ontology to a Turtle string.
#[must_use]
pub fn to_turtle(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(128 * 1024);

    out.push_str(&format!("@prefix owl:      <{OWL}> .\n"));
    out.push_str(&format!("@prefix rdf:      <{RDF}> .\n"));
    out.push_str(&format!("@prefix rdfs:     <{RDFS}> .\n"));
    out.push_str(&format!("@prefix xsd:      <{XSD}> .\n"));
    out.push_str(&format!("@prefix oboInOwl: <{OBO_IN_OWL}> .\n"));
    out.push_str(&format!("@prefix obo:      <{OBO}> .\n"));
    out.push_str(&format!("@prefix hpvco:    <{HPVCO}> .\n"));
    out.push('\n');

    // Ontology header
    out.push_str(&format!(
        "<{}>\n  a owl:Ontology ;\n  rdfs:label {} ;\n  rdfs:comment {} ;\n  owl:versionInfo {}",
        ontology.ontology_iri,
        turtle_string(crate::model::ONTOLOGY_LABEL),
        turtle_string(crate::model::ONTOLOGY_COMMENT),
        turtle_string(ontology.version)
    ));
    for module in &ontology.topics {
        for question in module.topic.competency_questions {
            out.push_str(&format!(
                " ;\n  hpvco:competencyQuestion {}",
                turtle_string(question)
            ));
        }
    }
    out.push_str(" .\n\n");

    // Annotation properties
    for ap in &ontology.annotation_properties {
        out.push_str(&format!(
            "<{}>\n  a owl:AnnotationProperty ;\n  rdfs:label {} ;\n  rdfs:comment {} ;\n  rdfs:range <{}> .\n\n",
            ap.id,
            turtle_string(ap.label),
            turtle_string(ap.comment),
            ap.range
        ));
    }

    for module in &ontology.topics {
        out.push_str(&format!("# Topic: {}\n\n", module.topic.key));
        for class in &module.classes {
            write_class(&mut out, class);
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

fn write_class(out: &mut String, class: &Class) {
    out.push_str(&format!(
        "<{}>\n  a owl:Class ;\n  rdfs:label {} ;\n  obo:IAO_0000115 {}",
        class.id,
        turtle_string(class.label),
        turtle_string(class.definition)
    ));
    if let Some(synonym) = class.synonym {
        out.push_str(&format!(
            " ;\n  oboInOwl:hasSynonym {}",
            turtle_string(synonym)
        ));
    }
    for parent in class.subclass_of {
        out.push_str(&format!(" ;\n  rdfs:subClassOf <{parent}>"));
    }
    for other in class.disjoint_with {
        out.push_str(&format!(" ;\n  owl:disjointWith <{other}>"));
    }
    out.push_str(" .\n\n");

    if let Some(ncit) = class.ncit {
        write_axiom(out, class.id, IAO_DEFINITION, class.definition, ncit);
        if let Some(synonym) = class.synonym {
            write_axiom(out, class.id, HAS_SYNONYM, synonym, ncit);
        }
    }
}

fn write_axiom(out: &mut String, source: &str, property: &str, target: &str, xref: &str) {
    out.push_str(&format!(
        "[] a owl:Axiom ;\n  owl:annotatedSource <{source}> ;\n  \
         owl:annotatedProperty <{property}> ;\n  \
         owl:annotatedTarget {} ;\n  \
         oboInOwl:hasDbXref {} .\n\n",
        turtle_string(target),
        turtle_string(xref)
    ));
}

fn write_property(out: &mut String, prop: &Property) {
    let type_str = match prop.kind {
        PropertyKind::Datatype if prop.functional => "owl:DatatypeProperty , owl:FunctionalProperty",
        PropertyKind::Datatype => "owl:DatatypeProperty",
        PropertyKind::Object if prop.functional => "owl:ObjectProperty , owl:FunctionalProperty",
        PropertyKind::Object => "owl:ObjectProperty",
        PropertyKind::Annotation => "owl:AnnotationProperty",
    };
    let domain_str = prop
        .domain
        .map(|d| format!("  rdfs:domain <{d}> ;\n"))
        .unwrap_or_default();
    out.push_str(&format!(
        "<{}>\n  a {} ;\n  rdfs:label {} ;\n  rdfs:comment {} ;\n{}  rdfs:range <{}> .\n\n",
        prop.id,
        type_str,
        turtle_string(prop.label),
        turtle_string(prop.comment),
        domain_str,
        prop.range
    ));
}

fn write_individual(out: &mut String, ind: &Individual) {
    out.push_str(&format!(
        "<{}>\n  a owl:NamedIndividual , <{}> ;\n  rdfs:label {} ;\n  rdfs:comment {}",
        ind.id,
        ind.type_,
        turtle_string(ind.label),
        turtle_string(ind.comment)
    ));
    if let Some(ncit) = ind.ncit {
        out.push_str(&format!(
            " ;\n  oboInOwl:hasDbXref {}",
            turtle_string(ncit)
        ));
    }
    for (prop_iri, value) in ind.properties {
        out.push_str(&format!(
            " ;\n  <{prop_iri}> {}",
            individual_value_to_turtle(value)
        ));
    }
    out.push_str(" .\n\n");
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

fn individual_value_to_turtle(value: &IndividualValue) -> String {
    match value {
        IndividualValue::Str(s) => turtle_string(s),
        IndividualValue::Int(i) => format!("\"{i}\"^^xsd:integer"),
        IndividualValue::Bool(b) => format!("\"{b}\"^^xsd:boolean"),
        IndividualValue::IriRef(iri) => format!("<{iri}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn produces_non_empty_turtle() {
        let turtle = to_turtle(Ontology::full());
        assert!(!turtle.is_empty());
        assert!(turtle.contains("@prefix owl:"));
        assert!(turtle.contains("owl:Ontology"));
    }

    #[test]
    fn contains_all_topic_sections() {
        let turtle = to_turtle(Ontology::full());
        for module in &Ontology::full().topics {
            assert!(
                turtle.contains(&format!("# Topic: {}", module.topic.key)),
                "Missing section marker for topic '{}'",
                module.topic.key
            );
        }
    }

    #[test]
    fn contains_reified_xref_axioms() {
        let turtle = to_turtle(Ontology::full());
        assert!(turtle.contains("[] a owl:Axiom"));
        assert!(turtle.contains("oboInOwl:hasDbXref \"NCIT:C4910\""));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(turtle_string("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
    }
}

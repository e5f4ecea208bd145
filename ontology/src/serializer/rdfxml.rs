//! RDF/XML serializer for the HPV Cancer Ontology.
//!
//! Produces the canonical `.rdf` document: ontology header with version and
//! competency questions, annotation-property declarations, classes with IAO
//! definitions and oboInOwl synonyms, reified `owl:Axiom` blocks carrying
//! the NCIT cross-reference for each enriched annotation, properties, and
//! named individuals.

use crate::model::iris::*;
use crate::model::{Class, Individual, IndividualValue, Ontology, Property, PropertyKind};

/// Serializes the complete HPV Cancer Ontology to an RDF/XML string.
#[must_use]
pub fn to_rdf_xml(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(256 * 1024);

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rdf:RDF\n");
    out.push_str(&format!("    xmlns:rdf=\"{RDF}\"\n"));
    out.push_str(&format!("    xmlns:rdfs=\"{RDFS}\"\n"));
    out.push_str(&format!("    xmlns:owl=\"{OWL}\"\n"));
    out.push_str(&format!("    xmlns:xsd=\"{XSD}\"\n"));
    out.push_str(&format!("    xmlns:oboInOwl=\"{OBO_IN_OWL}\"\n"));
    out.push_str(&format!("    xmlns:obo=\"{OBO}\"\n"));
    out.push_str(&format!("    xmlns:hpvco=\"{HPVCO}\">\n\n"));

    write_header(&mut out, ontology);

    for ap in &ontology.annotation_properties {
        out.push_str(&format!(
            "  <owl:AnnotationProperty rdf:about=\"{}\">\n    \
             <rdfs:label>{}</rdfs:label>\n    \
             <rdfs:comment>{}</rdfs:comment>\n    \
             <rdfs:range rdf:resource=\"{}\"/>\n  \
             </owl:AnnotationProperty>\n\n",
            ap.id,
            escape_text(ap.label),
            escape_text(ap.comment),
            ap.range
        ));
    }

    for module in &ontology.topics {
        out.push_str(&format!("  <!-- Topic: {} -->\n\n", module.topic.key));
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

    out.push_str("</rdf:RDF>\n");
    out
}

fn write_header(out: &mut String, ontology: &Ontology) {
    out.push_str(&format!(
        "  <owl:Ontology rdf:about=\"{}\">\n",
        ontology.ontology_iri
    ));
    out.push_str(&format!(
        "    <rdfs:label>{}</rdfs:label>\n",
        escape_text(crate::model::ONTOLOGY_LABEL)
    ));
    out.push_str(&format!(
        "    <rdfs:comment>{}</rdfs:comment>\n",
        escape_text(crate::model::ONTOLOGY_COMMENT)
    ));
    out.push_str(&format!(
        "    <owl:versionInfo>{}</owl:versionInfo>\n",
        ontology.version
    ));
    for module in &ontology.topics {
        for question in module.topic.competency_questions {
            out.push_str(&format!(
                "    <hpvco:competencyQuestion>{}</hpvco:competencyQuestion>\n",
                escape_text(question)
            ));
        }
    }
    out.push_str("  </owl:Ontology>\n\n");
}

fn write_class(out: &mut String, class: &Class) {
    out.push_str(&format!("  <owl:Class rdf:about=\"{}\">\n", class.id));
    out.push_str(&format!(
        "    <rdfs:label>{}</rdfs:label>\n",
        escape_text(class.label)
    ));
    out.push_str(&format!(
        "    <obo:IAO_0000115>{}</obo:IAO_0000115>\n",
        escape_text(class.definition)
    ));
    if let Some(synonym) = class.synonym {
        out.push_str(&format!(
            "    <oboInOwl:hasSynonym>{}</oboInOwl:hasSynonym>\n",
            escape_text(synonym)
        ));
    }
    for parent in class.subclass_of {
        out.push_str(&format!(
            "    <rdfs:subClassOf rdf:resource=\"{parent}\"/>\n"
        ));
    }
    for other in class.disjoint_with {
        out.push_str(&format!(
            "    <owl:disjointWith rdf:resource=\"{other}\"/>\n"
        ));
    }
    out.push_str("  </owl:Class>\n\n");

    // Reified provenance: each enriched annotation carries its NCIT
    // cross-reference on an owl:Axiom node, mirroring the output of the
    // NCIT definition-extraction migration.
    if let Some(ncit) = class.ncit {
        write_axiom(out, class.id, IAO_DEFINITION, class.definition, ncit);
        if let Some(synonym) = class.synonym {
            write_axiom(out, class.id, HAS_SYNONYM, synonym, ncit);
        }
    }
}

fn write_axiom(out: &mut String, source: &str, property: &str, target: &str, xref: &str) {
    out.push_str("  <owl:Axiom>\n");
    out.push_str(&format!(
        "    <owl:annotatedSource rdf:resource=\"{source}\"/>\n"
    ));
    out.push_str(&format!(
        "    <owl:annotatedProperty rdf:resource=\"{property}\"/>\n"
    ));
    out.push_str(&format!(
        "    <owl:annotatedTarget>{}</owl:annotatedTarget>\n",
        escape_text(target)
    ));
    out.push_str(&format!(
        "    <oboInOwl:hasDbXref>{}</oboInOwl:hasDbXref>\n",
        escape_text(xref)
    ));
    out.push_str("  </owl:Axiom>\n\n");
}

fn write_property(out: &mut String, prop: &Property) {
    let element = match prop.kind {
        PropertyKind::Datatype => "owl:DatatypeProperty",
        PropertyKind::Object => "owl:ObjectProperty",
        PropertyKind::Annotation => "owl:AnnotationProperty",
    };
    out.push_str(&format!("  <{element} rdf:about=\"{}\">\n", prop.id));
    if prop.functional {
        out.push_str(&format!(
            "    <rdf:type rdf:resource=\"{OWL}FunctionalProperty\"/>\n"
        ));
    }
    out.push_str(&format!(
        "    <rdfs:label>{}</rdfs:label>\n",
        escape_text(prop.label)
    ));
    out.push_str(&format!(
        "    <rdfs:comment>{}</rdfs:comment>\n",
        escape_text(prop.comment)
    ));
    if let Some(domain) = prop.domain {
        out.push_str(&format!("    <rdfs:domain rdf:resource=\"{domain}\"/>\n"));
    }
    out.push_str(&format!(
        "    <rdfs:range rdf:resource=\"{}\"/>\n",
        prop.range
    ));
    out.push_str(&format!("  </{element}>\n\n"));
}

fn write_individual(out: &mut String, ind: &Individual) {
    out.push_str(&format!(
        "  <owl:NamedIndividual rdf:about=\"{}\">\n",
        ind.id
    ));
    out.push_str(&format!("    <rdf:type rdf:resource=\"{}\"/>\n", ind.type_));
    out.push_str(&format!(
        "    <rdfs:label>{}</rdfs:label>\n",
        escape_text(ind.label)
    ));
    out.push_str(&format!(
        "    <rdfs:comment>{}</rdfs:comment>\n",
        escape_text(ind.comment)
    ));
    if let Some(ncit) = ind.ncit {
        out.push_str(&format!(
            "    <oboInOwl:hasDbXref>{}</oboInOwl:hasDbXref>\n",
            escape_text(ncit)
        ));
    }
    for (prop_iri, value) in ind.properties {
        write_assertion(out, prop_iri, value);
    }
    out.push_str("  </owl:NamedIndividual>\n\n");
}

fn write_assertion(out: &mut String, prop_iri: &str, value: &IndividualValue) {
    let (open, close) = qname(prop_iri);
    match value {
        IndividualValue::Str(s) => {
            out.push_str(&format!("    <{open}>{}</{close}>\n", escape_text(s)));
        }
        IndividualValue::Int(i) => {
            out.push_str(&format!(
                "    <{open} rdf:datatype=\"{XSD_INTEGER}\">{i}</{close}>\n"
            ));
        }
        IndividualValue::Bool(b) => {
            out.push_str(&format!(
                "    <{open} rdf:datatype=\"{XSD_BOOLEAN}\">{b}</{close}>\n"
            ));
        }
        IndividualValue::IriRef(iri) => {
            out.push_str(&format!("    <{open} rdf:resource=\"{iri}\"/>\n"));
        }
    }
}

/// Maps a predicate IRI to an XML element name.
///
/// Predicates in the document's declared namespaces use their prefix; any
/// other predicate gets an inline namespace declaration so the output stays
/// well-formed regardless of vocabulary.
fn qname(iri: &str) -> (String, String) {
    for (prefix, ns) in [
        ("hpvco", HPVCO),
        ("owl", OWL),
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("oboInOwl", OBO_IN_OWL),
        ("obo", OBO),
    ] {
        if let Some(local) = iri.strip_prefix(ns) {
            return (format!("{prefix}:{local}"), format!("{prefix}:{local}"));
        }
    }
    let split = iri
        .rfind(['#', '/'])
        .map_or(0, |i| i + 1);
    let (ns, local) = iri.split_at(split);
    (
        format!("ns1:{local} xmlns:ns1=\"{}\"", escape_attr(ns)),
        format!("ns1:{local}"),
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn produces_well_formed_prolog_and_root() {
        let xml = to_rdf_xml(Ontology::full());
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<rdf:RDF"));
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn contains_ontology_header_with_version() {
        let xml = to_rdf_xml(Ontology::full());
        assert!(xml.contains("<owl:Ontology rdf:about=\"https://purl.org/uth/ontology/hpvco\">"));
        assert!(xml.contains("<owl:versionInfo>2.0.0</owl:versionInfo>"));
    }

    #[test]
    fn enriched_classes_carry_reified_xrefs() {
        let xml = to_rdf_xml(Ontology::full());
        assert!(xml.contains("<owl:Axiom>"));
        assert!(xml.contains("<oboInOwl:hasDbXref>NCIT:C4910</oboInOwl:hasDbXref>"));
        assert!(xml.contains(
            "<owl:annotatedProperty rdf:resource=\"http://purl.obolibrary.org/obo/IAO_0000115\"/>"
        ));
    }

    #[test]
    fn vaccine_individuals_are_serialized() {
        let xml = to_rdf_xml(Ontology::full());
        assert!(xml.contains("rdf:about=\"https://purl.org/uth/ontology/hpvco#Gardasil9\""));
        assert!(xml.contains("<hpvco:targetsGenotype rdf:resource=\"https://purl.org/uth/ontology/hpvco#HPV16\"/>"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }
}

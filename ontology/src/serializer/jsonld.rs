//! JSON-LD 1.1 serializer for the HPV Cancer Ontology.
//!
//! Produces a single JSON-LD document with a complete `@context` and a
//! `@graph` array mirroring the triple content of the RDF/XML artifact.

use serde_json::{json, Map, Value};

use crate::model::iris::*;
use crate::model::{IndividualValue, Ontology, PropertyKind};

/// Serializes the complete HPV Cancer Ontology to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with
/// [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(ontology: &Ontology) -> Value {
    json!({
        "@context": build_context(),
        "@graph": build_graph(ontology)
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!(OWL));
    ctx.insert("rdf".to_owned(), json!(RDF));
    ctx.insert("rdfs".to_owned(), json!(RDFS));
    ctx.insert("xsd".to_owned(), json!(XSD));
    ctx.insert("oboInOwl".to_owned(), json!(OBO_IN_OWL));
    ctx.insert("obo".to_owned(), json!(OBO));
    ctx.insert("hpvco".to_owned(), json!(HPVCO));
    Value::Object(ctx)
}

fn build_graph(ontology: &Ontology) -> Value {
    let mut nodes: Vec<Value> = Vec::new();

    // Ontology header
    let questions: Vec<Value> = ontology
        .topics
        .iter()
        .flat_map(|m| m.topic.competency_questions.iter())
        .map(|q| json!(q))
        .collect();
    nodes.push(json!({
        "@id": ontology.ontology_iri,
        "@type": "owl:Ontology",
        "rdfs:label": crate::model::ONTOLOGY_LABEL,
        "rdfs:comment": crate::model::ONTOLOGY_COMMENT,
        "owl:versionInfo": ontology.version,
        "hpvco:competencyQuestion": questions
    }));

    for ap in &ontology.annotation_properties {
        nodes.push(json!({
            "@id": ap.id,
            "@type": "owl:AnnotationProperty",
            "rdfs:label": ap.label,
            "rdfs:comment": ap.comment,
            "rdfs:range": { "@id": ap.range }
        }));
    }

    for module in &ontology.topics {
        for class in &module.classes {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(class.id));
            node.insert("@type".to_owned(), json!("owl:Class"));
            node.insert("rdfs:label".to_owned(), json!(class.label));
            node.insert("obo:IAO_0000115".to_owned(), json!(class.definition));
            if let Some(synonym) = class.synonym {
                node.insert("oboInOwl:hasSynonym".to_owned(), json!(synonym));
            }
            if !class.subclass_of.is_empty() {
                let parents: Vec<Value> = class
                    .subclass_of
                    .iter()
                    .map(|iri| json!({ "@id": iri }))
                    .collect();
                node.insert("rdfs:subClassOf".to_owned(), json!(parents));
            }
            if !class.disjoint_with.is_empty() {
                let others: Vec<Value> = class
                    .disjoint_with
                    .iter()
                    .map(|iri| json!({ "@id": iri }))
                    .collect();
                node.insert("owl:disjointWith".to_owned(), json!(others));
            }
            nodes.push(Value::Object(node));

            if let Some(ncit) = class.ncit {
                nodes.push(axiom_node(class.id, IAO_DEFINITION, class.definition, ncit));
                if let Some(synonym) = class.synonym {
                    nodes.push(axiom_node(class.id, HAS_SYNONYM, synonym, ncit));
                }
            }
        }

        for prop in &module.properties {
            let mut types = vec![match prop.kind {
                PropertyKind::Datatype => json!("owl:DatatypeProperty"),
                PropertyKind::Object => json!("owl:ObjectProperty"),
                PropertyKind::Annotation => json!("owl:AnnotationProperty"),
            }];
            if prop.functional {
                types.push(json!("owl:FunctionalProperty"));
            }
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(prop.id));
            node.insert("@type".to_owned(), json!(types));
            node.insert("rdfs:label".to_owned(), json!(prop.label));
            node.insert("rdfs:comment".to_owned(), json!(prop.comment));
            if let Some(domain) = prop.domain {
                node.insert("rdfs:domain".to_owned(), json!({ "@id": domain }));
            }
            node.insert("rdfs:range".to_owned(), json!({ "@id": prop.range }));
            nodes.push(Value::Object(node));
        }

        for ind in &module.individuals {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(ind.id));
            node.insert(
                "@type".to_owned(),
                json!(["owl:NamedIndividual", ind.type_]),
            );
            node.insert("rdfs:label".to_owned(), json!(ind.label));
            node.insert("rdfs:comment".to_owned(), json!(ind.comment));
            if let Some(ncit) = ind.ncit {
                node.insert("oboInOwl:hasDbXref".to_owned(), json!(ncit));
            }
            for (prop_iri, value) in ind.properties {
                let rendered = individual_value_to_json(value);
                match node.get_mut(*prop_iri) {
                    Some(Value::Array(values)) => values.push(rendered),
                    Some(existing) => {
                        let first = existing.take();
                        node.insert((*prop_iri).to_owned(), json!([first, rendered]));
                    }
                    None => {
                        node.insert((*prop_iri).to_owned(), rendered);
                    }
                }
            }
            nodes.push(Value::Object(node));
        }
    }

    Value::Array(nodes)
}

fn axiom_node(source: &str, property: &str, target: &str, xref: &str) -> Value {
    json!({
        "@type": "owl:Axiom",
        "owl:annotatedSource": { "@id": source },
        "owl:annotatedProperty": { "@id": property },
        "owl:annotatedTarget": target,
        "oboInOwl:hasDbXref": xref
    })
}

fn individual_value_to_json(value: &IndividualValue) -> Value {
    match value {
        IndividualValue::Str(s) => json!(s),
        IndividualValue::Int(i) => json!(i),
        IndividualValue::Bool(b) => json!(b),
        IndividualValue::IriRef(iri) => json!({ "@id": iri }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn context_declares_all_prefixes() {
        let doc = to_json_ld(Ontology::full());
        let ctx = &doc["@context"];
        for prefix in ["owl", "rdf", "rdfs", "xsd", "oboInOwl", "obo", "hpvco"] {
            assert!(ctx.get(prefix).is_some(), "Missing context prefix {prefix}");
        }
    }

    #[test]
    fn graph_contains_every_class() {
        let doc = to_json_ld(Ontology::full());
        let graph = doc["@graph"].as_array().unwrap();
        for module in &Ontology::full().topics {
            for class in &module.classes {
                assert!(
                    graph.iter().any(|n| n["@id"] == class.id),
                    "Missing node for {}",
                    class.id
                );
            }
        }
    }

    #[test]
    fn repeated_assertions_collect_into_arrays() {
        let doc = to_json_ld(Ontology::full());
        let graph = doc["@graph"].as_array().unwrap();
        let gardasil9 = graph
            .iter()
            .find(|n| n["@id"] == "https://purl.org/uth/ontology/hpvco#Gardasil9")
            .unwrap();
        let targets = gardasil9["https://purl.org/uth/ontology/hpvco#targetsGenotype"]
            .as_array()
            .unwrap();
        assert_eq!(targets.len(), 4);
    }
}

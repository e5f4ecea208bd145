//! `symptom` topic — clinical manifestations of HPV-related disease.
//!
//! Early HPV-related cancers are typically silent; the manifestations
//! here are the presenting complaints patients ask about.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `symptom` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "symptom",
            label: "Signs and Symptoms",
            comment: "Clinical manifestations of HPV infection and HPV-related \
                      cancers, from benign warts to the presenting symptoms of \
                      invasive disease.",
            competency_questions: &[
                "What symptoms can HPV-related cancers cause?",
                "Are genital warts a sign of cancer?",
            ],
        },
        classes: classes(),
        properties: properties(),
        individuals: vec![],
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: "https://purl.org/uth/ontology/hpvco#ClinicalManifestation",
            label: "clinical manifestation",
            definition: "An observable sign or reported symptom of HPV infection \
                         or HPV-related disease.",
            synonym: Some("sign or symptom"),
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#GenitalWarts",
            label: "genital warts",
            definition: "Benign epithelial growths of the anogenital region \
                         caused by low-risk HPV genotypes, most commonly types 6 \
                         and 11. Genital warts are not precancerous.",
            synonym: Some("condyloma acuminatum"),
            ncit: Some("NCIT:C2962"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#AbnormalVaginalBleeding",
            label: "abnormal vaginal bleeding",
            definition: "Vaginal bleeding outside of expected menstruation, the \
                         most common presenting symptom of invasive cervical \
                         cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PostcoitalBleeding",
            label: "postcoital bleeding",
            definition: "Vaginal bleeding provoked by intercourse, a symptom \
                         that warrants evaluation of the cervix.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#AbnormalVaginalBleeding"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PelvicPain",
            label: "pelvic pain",
            definition: "Pain in the pelvic region, a symptom of locally \
                         advanced cervical, vaginal, or anal cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PersistentSoreThroat",
            label: "persistent sore throat",
            definition: "Throat pain lasting longer than a few weeks, a \
                         presenting symptom of oropharyngeal cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Dysphagia",
            label: "dysphagia",
            definition: "Difficulty or pain on swallowing, a symptom of \
                         oropharyngeal cancer.",
            synonym: Some("difficulty swallowing"),
            ncit: Some("NCIT:C2980"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Hoarseness",
            label: "hoarseness",
            definition: "A rough or strained voice persisting for weeks, a \
                         symptom of laryngeal involvement by oropharyngeal \
                         cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#ClinicalManifestation"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![Property {
        id: "https://purl.org/uth/ontology/hpvco#manifestationOf",
        label: "manifestation of",
        comment: "The HPV-related cancer this sign or symptom may indicate.",
        kind: PropertyKind::Object,
        functional: false,
        domain: Some("https://purl.org/uth/ontology/hpvco#ClinicalManifestation"),
        range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
    }]
}

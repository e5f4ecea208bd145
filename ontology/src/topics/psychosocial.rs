//! `psychosocial` topic — the psychological and social burden of HPV-related
//! disease, and the resources that alleviate it.
//!
//! HPVCO is patient-centric; this section exists because an HPV diagnosis
//! carries a stigma and emotional burden that clinical vocabularies rarely
//! model.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `psychosocial` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "psychosocial",
            label: "Psychosocial Impact",
            comment: "Psychological and social consequences of HPV infection \
                      and HPV-related cancer, and the support resources that \
                      address them.",
            competency_questions: &[
                "What psychological effects can an HPV diagnosis have?",
                "Where can patients find support after a diagnosis?",
                "Why do patients report stigma around HPV?",
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
            id: "https://purl.org/uth/ontology/hpvco#PsychosocialImpact",
            label: "psychosocial impact",
            definition: "A psychological or social consequence experienced by a \
                         person as a result of HPV infection, an HPV-related \
                         diagnosis, or its treatment.",
            synonym: None,
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Anxiety",
            label: "anxiety",
            definition: "Apprehension and worry, commonly reported after an \
                         abnormal screening result or while awaiting follow-up \
                         testing.",
            synonym: None,
            ncit: Some("NCIT:C2878"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PsychosocialImpact"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Depression",
            label: "depression",
            definition: "Persistent low mood and loss of interest, reported at \
                         elevated rates among patients treated for HPV-related \
                         cancers.",
            synonym: None,
            ncit: Some("NCIT:C2982"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PsychosocialImpact"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HealthRelatedStigma",
            label: "health-related stigma",
            definition: "Perceived or experienced social disapproval arising \
                         from the sexually transmitted nature of HPV, a barrier \
                         to disclosure, screening, and vaccination.",
            synonym: Some("HPV-related stigma"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PsychosocialImpact"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#FearOfRecurrence",
            label: "fear of recurrence",
            definition: "Persistent worry that a treated cancer will return, one \
                         of the most common unmet needs reported by survivors.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PsychosocialImpact"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#SexualDysfunction",
            label: "sexual dysfunction",
            definition: "Impairment of sexual function following pelvic surgery, \
                         radiation, or the psychological burden of an \
                         HPV-related diagnosis.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PsychosocialImpact"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#SupportResource",
            label: "support resource",
            definition: "A service or community that helps patients cope with \
                         the psychosocial burden of HPV-related disease.",
            synonym: None,
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#CounselingService",
            label: "counseling service",
            definition: "Professional psychological counseling offered to \
                         patients and survivors of HPV-related cancers.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SupportResource"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PeerSupportGroup",
            label: "peer support group",
            definition: "A group of patients or survivors who share experience \
                         and practical advice, in person or online.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SupportResource"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#associatedWithDiagnosisOf",
            label: "associated with diagnosis of",
            comment: "The HPV-related cancer whose diagnosis or treatment this \
                      impact follows.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#PsychosocialImpact"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#alleviatedBy",
            label: "alleviated by",
            comment: "A support resource that reduces this impact.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#PsychosocialImpact"),
            range: "https://purl.org/uth/ontology/hpvco#SupportResource",
        },
    ]
}

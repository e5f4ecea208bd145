//! `diagnosis` topic — screening and diagnostic procedures.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `diagnosis` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "diagnosis",
            label: "Diagnosis",
            comment: "Procedures used to screen for, detect, and confirm \
                      HPV infection, precancerous lesions, and HPV-related \
                      cancers.",
            competency_questions: &[
                "How is cervical cancer screened for and diagnosed?",
                "What happens after an abnormal Pap smear result?",
                "What does an HPV DNA test detect?",
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
            id: "https://purl.org/uth/ontology/hpvco#DiagnosticProcedure",
            label: "diagnostic procedure",
            definition: "A clinical procedure performed to detect or confirm \
                         HPV infection, a precancerous lesion, or an invasive \
                         cancer.",
            synonym: None,
            ncit: Some("NCIT:C18020"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PapSmear",
            label: "Pap smear",
            definition: "Cytologic examination of exfoliated cervical cells for \
                         precancerous changes. The cornerstone of cervical \
                         screening programs for decades.",
            synonym: Some("Papanicolaou test"),
            ncit: Some("NCIT:C17348"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HPVDNATest",
            label: "HPV DNA test",
            definition: "A molecular assay detecting the DNA of high-risk HPV \
                         genotypes in a cervical or oral specimen. More \
                         sensitive than cytology for detecting precancer.",
            synonym: Some("HPV DNA testing"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Colposcopy",
            label: "colposcopy",
            definition: "Magnified visual examination of the cervix after an \
                         abnormal screening result, used to identify lesions \
                         and direct biopsy.",
            synonym: None,
            ncit: Some("NCIT:C16355"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Biopsy",
            label: "biopsy",
            definition: "Removal of a tissue sample for histologic examination, \
                         the definitive means of diagnosing precancer and \
                         invasive cancer.",
            synonym: None,
            ncit: Some("NCIT:C15189"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#VisualInspectionWithAceticAcid",
            label: "visual inspection with acetic acid",
            definition: "Naked-eye inspection of the cervix after application of \
                         dilute acetic acid, a low-cost screening alternative \
                         used where cytology is unavailable.",
            synonym: Some("VIA"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#screensFor",
            label: "screens for",
            comment: "The HPV-related cancer this procedure screens for.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#detectsInfection",
            label: "detects infection",
            comment: "The HPV infection state this procedure detects.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"),
            range: "https://purl.org/uth/ontology/hpvco#HPVInfection",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#confirmsResultOf",
            label: "confirms result of",
            comment: "The screening procedure whose abnormal result this \
                      procedure follows up.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"),
            range: "https://purl.org/uth/ontology/hpvco#DiagnosticProcedure",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#sensitivity",
            label: "sensitivity",
            comment: "Reported sensitivity of this procedure for detecting \
                      high-grade cervical lesions, between 0 and 1.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"),
            range: XSD_DECIMAL,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#specificity",
            label: "specificity",
            comment: "Reported specificity of this procedure for detecting \
                      high-grade cervical lesions, between 0 and 1.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#DiagnosticProcedure"),
            range: XSD_DECIMAL,
        },
    ]
}

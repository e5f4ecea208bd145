//! `risk` topic — factors that increase the likelihood of HPV-related cancer.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `risk` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "risk",
            label: "Risk Factors",
            comment: "Behavioral, medical, and access-related factors that \
                      increase the risk of acquiring HPV infection or of \
                      progression from infection to cancer.",
            competency_questions: &[
                "What increases the risk of developing an HPV-related cancer?",
                "Which risk factors can a patient change?",
                "Why does smoking matter for cervical cancer risk?",
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
            id: "https://purl.org/uth/ontology/hpvco#RiskFactor",
            label: "risk factor",
            definition: "A characteristic, behavior, or exposure that increases \
                         the probability of acquiring HPV infection or of \
                         progression from persistent infection to cancer.",
            synonym: None,
            ncit: Some("NCIT:C17103"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#TobaccoSmoking",
            label: "tobacco smoking",
            definition: "Habitual inhalation of tobacco smoke. Smoking impairs \
                         local immune clearance of HPV and roughly doubles the \
                         risk of cervical cancer among infected individuals.",
            synonym: Some("cigarette smoking"),
            ncit: Some("NCIT:C17934"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Immunosuppression",
            label: "immunosuppression",
            definition: "A weakened immune system, whether disease-related or \
                         iatrogenic, that impairs clearance of HPV infection and \
                         accelerates progression of epithelial lesions.",
            synonym: None,
            ncit: Some("NCIT:C14139"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HIVCoinfection",
            label: "HIV co-infection",
            definition: "Concurrent infection with human immunodeficiency virus. \
                         People living with HIV have markedly elevated rates of \
                         persistent HPV infection and of cervical and anal \
                         cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#Immunosuppression"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#EarlySexualDebut",
            label: "early sexual debut",
            definition: "First sexual intercourse at a young age, which extends \
                         the period of exposure to HPV and coincides with the \
                         biological vulnerability of the immature cervical \
                         transformation zone.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#MultipleSexualPartners",
            label: "multiple sexual partners",
            definition: "A higher lifetime number of sexual partners, which \
                         increases the cumulative probability of acquiring \
                         high-risk HPV infection.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#LongTermOralContraceptiveUse",
            label: "long-term oral contraceptive use",
            definition: "Use of combined oral contraceptives for five years or \
                         longer, associated with a moderately increased risk of \
                         cervical cancer that declines after discontinuation.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HighParity",
            label: "high parity",
            definition: "Having carried many full-term pregnancies, associated \
                         with increased cervical cancer risk among HPV-positive \
                         individuals.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#AbsenceOfScreening",
            label: "absence of screening",
            definition: "Never or rarely participating in cervical screening. \
                         Most cervical cancers are diagnosed in individuals who \
                         were never screened or were screened infrequently.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#RiskFactor"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#increasesRiskOf",
            label: "increases risk of",
            comment: "The HPV-related cancer whose risk this factor increases.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#RiskFactor"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#relativeRisk",
            label: "relative risk",
            comment: "The ratio of cancer risk in exposed versus unexposed \
                      individuals reported for this factor.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#RiskFactor"),
            range: XSD_DECIMAL,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#modifiable",
            label: "modifiable",
            comment: "Whether the factor can be changed by the patient's own \
                      behavior or by clinical intervention.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#RiskFactor"),
            range: XSD_BOOLEAN,
        },
    ]
}

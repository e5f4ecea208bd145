//! `treatment` topic — treatment modalities for precancer and invasive disease.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `treatment` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "treatment",
            label: "Treatment",
            comment: "Treatment modalities for precancerous lesions and \
                      invasive HPV-related cancers: excisional procedures, \
                      radiation, systemic therapy, and their combinations.",
            competency_questions: &[
                "How are precancerous cervical lesions treated?",
                "Which treatments preserve fertility?",
                "When is chemoradiation used for cervical cancer?",
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
            id: "https://purl.org/uth/ontology/hpvco#TreatmentModality",
            label: "treatment modality",
            definition: "A category of therapy used to treat precancerous \
                         lesions or invasive HPV-related cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#SurgicalProcedure",
            label: "surgical procedure",
            definition: "An operative treatment that removes diseased tissue, \
                         from local excision of precancer to radical resection \
                         of invasive cancer.",
            synonym: None,
            ncit: Some("NCIT:C15329"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#TreatmentModality"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Conization",
            label: "conization",
            definition: "Excision of a cone-shaped portion of the cervix \
                         containing the transformation zone, used to treat \
                         high-grade cervical intraepithelial neoplasia while \
                         preserving fertility.",
            synonym: Some("cone biopsy"),
            ncit: Some("NCIT:C15325"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SurgicalProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#LoopElectrosurgicalExcisionProcedure",
            label: "loop electrosurgical excision procedure",
            definition: "Excision of the cervical transformation zone with a \
                         thin electrified wire loop, the most common outpatient \
                         treatment for high-grade cervical lesions.",
            synonym: Some("LEEP"),
            ncit: Some("NCIT:C15343"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SurgicalProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Hysterectomy",
            label: "hysterectomy",
            definition: "Surgical removal of the uterus, performed for \
                         early-stage invasive cervical cancer or recurrent \
                         high-grade lesions when fertility preservation is not \
                         desired.",
            synonym: None,
            ncit: Some("NCIT:C15256"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SurgicalProcedure"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#RadiationTherapy",
            label: "radiation therapy",
            definition: "Treatment with ionizing radiation, delivered externally \
                         or by brachytherapy, a mainstay for locally advanced \
                         cervical and oropharyngeal cancer.",
            synonym: Some("radiotherapy"),
            ncit: Some("NCIT:C15313"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#TreatmentModality"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Chemotherapy",
            label: "chemotherapy",
            definition: "Systemic treatment with cytotoxic drugs, used for \
                         advanced or recurrent HPV-related cancers and as a \
                         radiosensitizer.",
            synonym: None,
            ncit: Some("NCIT:C15632"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#TreatmentModality"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Chemoradiation",
            label: "chemoradiation",
            definition: "Concurrent administration of chemotherapy and radiation \
                         therapy, the standard of care for locally advanced \
                         cervical cancer.",
            synonym: Some("concurrent chemoradiotherapy"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#TreatmentModality"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#Immunotherapy",
            label: "immunotherapy",
            definition: "Treatment that augments the immune response against \
                         tumor cells, including checkpoint inhibitors approved \
                         for recurrent or metastatic cervical cancer.",
            synonym: None,
            ncit: Some("NCIT:C15262"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#TreatmentModality"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#treats",
            label: "treats",
            comment: "The HPV-related cancer this modality is used to treat.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#TreatmentModality"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#fertilitySparing",
            label: "fertility sparing",
            comment: "Whether the procedure preserves the ability to carry a \
                      pregnancy.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#SurgicalProcedure"),
            range: XSD_BOOLEAN,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#hasAdverseEffect",
            label: "has adverse effect",
            comment: "A clinical manifestation this treatment can itself cause.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#TreatmentModality"),
            range: "https://purl.org/uth/ontology/hpvco#ClinicalManifestation",
        },
    ]
}

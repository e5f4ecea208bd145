//! `core` topic — the virus, infection, and genotypes.
//!
//! Everything else in HPVCO hangs off this section: the virus itself,
//! the distinction between transient and persistent infection (persistence
//! is the necessary precursor of HPV-related malignancy), and the genotype
//! hierarchy with the four genotypes most relevant to patients as named
//! individuals.

use crate::model::iris::*;
use crate::model::{Class, Individual, IndividualValue, Property, PropertyKind, Topic, TopicModule};

/// Returns the `core` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "core",
            label: "HPV and Infection",
            comment: "Human papillomavirus, HPV infection and its persistence, \
                      genotypes and their oncogenic risk classification, and the \
                      anatomic sites HPV infects.",
            competency_questions: &[
                "What is human papillomavirus?",
                "What is the difference between a transient and a persistent HPV infection?",
                "Which HPV genotypes are considered high-risk?",
            ],
        },
        classes: classes(),
        properties: properties(),
        individuals: individuals(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HumanPapillomavirus",
            label: "human papillomavirus",
            definition: "A non-enveloped double-stranded DNA virus of the family \
                         Papillomaviridae that infects cutaneous and mucosal \
                         epithelium. Over two hundred genotypes are known; a \
                         subset is carcinogenic to humans.",
            synonym: Some("HPV"),
            ncit: Some("NCIT:C14184"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HPVInfection",
            label: "HPV infection",
            definition: "The state of harboring human papillomavirus in cutaneous \
                         or mucosal epithelium. Most infections are asymptomatic \
                         and cleared by the immune system within two years.",
            synonym: Some("human papillomavirus infection"),
            ncit: Some("NCIT:C27851"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#TransientHPVInfection",
            label: "transient HPV infection",
            definition: "An HPV infection that is cleared by the host immune \
                         response, typically within six to twenty-four months of \
                         acquisition, without progressing to epithelial disease.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVInfection"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PersistentHPVInfection",
            label: "persistent HPV infection",
            definition: "An HPV infection in which the same genotype remains \
                         detectable at the same anatomic site for twelve months \
                         or longer. Persistent infection with a high-risk \
                         genotype is the established precursor of HPV-related \
                         cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVInfection"],
            disjoint_with: &["https://purl.org/uth/ontology/hpvco#TransientHPVInfection"],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HPVGenotype",
            label: "HPV genotype",
            definition: "A strain of human papillomavirus distinguished by the \
                         DNA sequence of its L1 capsid gene. Genotypes are \
                         numbered in order of discovery.",
            synonym: Some("HPV type"),
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HighRiskHPVGenotype",
            label: "high-risk HPV genotype",
            definition: "An HPV genotype classified by IARC as carcinogenic or \
                         probably carcinogenic to humans. Types 16 and 18 \
                         together account for roughly seventy percent of \
                         cervical cancers.",
            synonym: Some("oncogenic HPV type"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVGenotype"],
            disjoint_with: &["https://purl.org/uth/ontology/hpvco#LowRiskHPVGenotype"],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#LowRiskHPVGenotype",
            label: "low-risk HPV genotype",
            definition: "An HPV genotype not associated with malignancy. \
                         Low-risk types such as 6 and 11 cause benign epithelial \
                         lesions, most commonly anogenital warts.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVGenotype"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#AnatomicSite",
            label: "anatomic site",
            definition: "A named region of the human body. HPVCO uses anatomic \
                         sites to relate infections and cancers to the epithelium \
                         they arise in.",
            synonym: Some("body site"),
            ncit: Some("NCIT:C13717"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#genotypeNumber",
            label: "genotype number",
            comment: "The discovery-order number of an HPV genotype.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVGenotype"),
            range: XSD_POSITIVE_INTEGER,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#oncogenic",
            label: "oncogenic",
            comment: "Whether this genotype is carcinogenic to humans per the \
                      IARC classification.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVGenotype"),
            range: XSD_BOOLEAN,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#causedByGenotype",
            label: "caused by genotype",
            comment: "The HPV genotype detected in this infection.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVInfection"),
            range: "https://purl.org/uth/ontology/hpvco#HPVGenotype",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#hasAnatomicSite",
            label: "has anatomic site",
            comment: "The anatomic site at which this infection was detected.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVInfection"),
            range: "https://purl.org/uth/ontology/hpvco#AnatomicSite",
        },
    ]
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#HPV16",
            type_: "https://purl.org/uth/ontology/hpvco#HighRiskHPVGenotype",
            label: "HPV-16",
            comment: "The most carcinogenic HPV genotype, responsible for \
                      roughly half of cervical cancers and the large majority \
                      of HPV-positive oropharyngeal cancers.",
            ncit: Some("NCIT:C14284"),
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#genotypeNumber",
                    IndividualValue::Int(16),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#oncogenic",
                    IndividualValue::Bool(true),
                ),
            ],
        },
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#HPV18",
            type_: "https://purl.org/uth/ontology/hpvco#HighRiskHPVGenotype",
            label: "HPV-18",
            comment: "The second most carcinogenic HPV genotype, \
                      disproportionately associated with cervical \
                      adenocarcinoma.",
            ncit: Some("NCIT:C14285"),
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#genotypeNumber",
                    IndividualValue::Int(18),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#oncogenic",
                    IndividualValue::Bool(true),
                ),
            ],
        },
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#HPV6",
            type_: "https://purl.org/uth/ontology/hpvco#LowRiskHPVGenotype",
            label: "HPV-6",
            comment: "A low-risk genotype causing, with HPV-11, about ninety \
                      percent of anogenital warts.",
            ncit: None,
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#genotypeNumber",
                    IndividualValue::Int(6),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#oncogenic",
                    IndividualValue::Bool(false),
                ),
            ],
        },
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#HPV11",
            type_: "https://purl.org/uth/ontology/hpvco#LowRiskHPVGenotype",
            label: "HPV-11",
            comment: "A low-risk genotype causing anogenital warts and \
                      recurrent respiratory papillomatosis.",
            ncit: None,
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#genotypeNumber",
                    IndividualValue::Int(11),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#oncogenic",
                    IndividualValue::Bool(false),
                ),
            ],
        },
    ]
}

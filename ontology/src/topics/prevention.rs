//! `prevention` topic — vaccination, screening, and behavioral prevention.
//!
//! The three licensed prophylactic vaccines are named individuals with
//! their genotype coverage asserted against the `core` genotype
//! individuals.

use crate::model::iris::*;
use crate::model::{Class, Individual, IndividualValue, Property, PropertyKind, Topic, TopicModule};

/// Returns the `prevention` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "prevention",
            label: "Prevention",
            comment: "Primary prevention (vaccination, condom use, smoking \
                      cessation) and secondary prevention (cervical screening) \
                      of HPV-related cancers, including the licensed \
                      prophylactic vaccines.",
            competency_questions: &[
                "How can HPV-related cancers be prevented?",
                "Which HPV genotypes does each licensed vaccine protect against?",
                "What is the difference between primary and secondary prevention?",
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
            id: "https://purl.org/uth/ontology/hpvco#PreventiveIntervention",
            label: "preventive intervention",
            definition: "An action taken to reduce the incidence of HPV \
                         infection or of progression from infection to cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PrimaryPrevention",
            label: "primary prevention",
            definition: "A preventive intervention that averts HPV infection \
                         itself, before any disease is present.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PreventiveIntervention"],
            disjoint_with: &["https://purl.org/uth/ontology/hpvco#SecondaryPrevention"],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#SecondaryPrevention",
            label: "secondary prevention",
            definition: "A preventive intervention that detects and treats \
                         precancerous lesions before they progress to invasive \
                         cancer.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PreventiveIntervention"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HPVVaccination",
            label: "HPV vaccination",
            definition: "Administration of a prophylactic HPV vaccine, most \
                         effective when completed before first exposure to the \
                         virus.",
            synonym: Some("HPV immunization"),
            ncit: Some("NCIT:C15431"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PrimaryPrevention"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#HPVVaccine",
            label: "HPV vaccine",
            definition: "A prophylactic vaccine composed of virus-like particles \
                         of the L1 capsid protein of selected HPV genotypes. \
                         HPV vaccines prevent infection but do not treat \
                         established infection or disease.",
            synonym: Some("human papillomavirus vaccine"),
            ncit: Some("NCIT:C1701"),
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#CondomUse",
            label: "condom use",
            definition: "Consistent use of condoms, which reduces but does not \
                         eliminate HPV transmission, since the virus infects \
                         epithelium not covered by the condom.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PrimaryPrevention"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#SmokingCessation",
            label: "smoking cessation",
            definition: "Quitting tobacco smoking, which restores local immune \
                         clearance of HPV and lowers the risk of progression of \
                         cervical lesions.",
            synonym: None,
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PrimaryPrevention"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#CervicalScreening",
            label: "cervical screening",
            definition: "Periodic testing of asymptomatic individuals for \
                         cervical precancer by cytology, HPV DNA testing, or \
                         both.",
            synonym: Some("cervical cancer screening"),
            ncit: None,
            subclass_of: &["https://purl.org/uth/ontology/hpvco#SecondaryPrevention"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#prevents",
            label: "prevents",
            comment: "The HPV-related cancer whose incidence this intervention \
                      reduces.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#PreventiveIntervention"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#targetsGenotype",
            label: "targets genotype",
            comment: "An HPV genotype covered by this vaccine.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVVaccine"),
            range: "https://purl.org/uth/ontology/hpvco#HPVGenotype",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#valency",
            label: "valency",
            comment: "The number of HPV genotypes this vaccine covers.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVVaccine"),
            range: XSD_POSITIVE_INTEGER,
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#recommendedAgeRange",
            label: "recommended age range",
            comment: "The age range for which this vaccine is routinely \
                      recommended, as free text.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVVaccine"),
            range: XSD_STRING,
        },
    ]
}

fn individuals() -> Vec<Individual> {
    vec![
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#Cervarix",
            type_: "https://purl.org/uth/ontology/hpvco#HPVVaccine",
            label: "Cervarix",
            comment: "The bivalent prophylactic HPV vaccine, covering the two \
                      genotypes responsible for most cervical cancers.",
            ncit: None,
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#valency",
                    IndividualValue::Int(2),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV16"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV18"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#recommendedAgeRange",
                    IndividualValue::Str("9 through 25 years"),
                ),
            ],
        },
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#Gardasil",
            type_: "https://purl.org/uth/ontology/hpvco#HPVVaccine",
            label: "Gardasil",
            comment: "The quadrivalent prophylactic HPV vaccine, adding the two \
                      low-risk genotypes that cause most anogenital warts.",
            ncit: None,
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#valency",
                    IndividualValue::Int(4),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV6"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV11"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV16"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV18"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#recommendedAgeRange",
                    IndividualValue::Str("9 through 26 years"),
                ),
            ],
        },
        Individual {
            id: "https://purl.org/uth/ontology/hpvco#Gardasil9",
            type_: "https://purl.org/uth/ontology/hpvco#HPVVaccine",
            label: "Gardasil 9",
            comment: "The nonavalent prophylactic HPV vaccine. Beyond the four \
                      quadrivalent genotypes it covers five additional high-risk \
                      types (31, 33, 45, 52, 58).",
            ncit: None,
            properties: &[
                (
                    "https://purl.org/uth/ontology/hpvco#valency",
                    IndividualValue::Int(9),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV6"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV11"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV16"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#targetsGenotype",
                    IndividualValue::IriRef("https://purl.org/uth/ontology/hpvco#HPV18"),
                ),
                (
                    "https://purl.org/uth/ontology/hpvco#recommendedAgeRange",
                    IndividualValue::Str("9 through 45 years"),
                ),
            ],
        },
    ]
}

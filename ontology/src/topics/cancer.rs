//! `cancer` topic — HPV-related cancers and their precursor lesions.

use crate::model::iris::*;
use crate::model::{Class, Property, PropertyKind, Topic, TopicModule};

/// Returns the `cancer` topic module.
#[must_use]
pub fn module() -> TopicModule {
    TopicModule {
        topic: Topic {
            key: "cancer",
            label: "HPV-Related Cancers",
            comment: "The six cancer sites causally associated with persistent \
                      high-risk HPV infection, and the precancerous lesions from \
                      which the invasive cancers develop.",
            competency_questions: &[
                "Which cancers are caused by HPV?",
                "Which HPV genotypes are attributed to cervical cancer?",
                "What fraction of oropharyngeal cancers is attributable to HPV?",
                "What does a diagnosis of cervical intraepithelial neoplasia mean?",
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
            id: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
            label: "HPV-related cancer",
            definition: "A malignant neoplasm causally associated with persistent \
                         high-risk human papillomavirus infection. HPV-related \
                         cancers arise at the cervix, oropharynx, anus, vulva, \
                         vagina, and penis.",
            synonym: Some("HPV-associated cancer"),
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#CervicalCancer",
            label: "cervical cancer",
            definition: "A malignant neoplasm of the uterine cervix. Virtually \
                         all cervical cancers are caused by persistent high-risk \
                         HPV infection, most commonly with types 16 and 18.",
            synonym: Some("cervical carcinoma"),
            ncit: Some("NCIT:C4910"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#OropharyngealCancer",
            label: "oropharyngeal cancer",
            definition: "A malignant neoplasm of the oropharynx, including the \
                         tonsils and base of tongue. The HPV-positive form is \
                         epidemiologically and prognostically distinct from the \
                         tobacco- and alcohol-associated form.",
            synonym: Some("oropharyngeal carcinoma"),
            ncit: Some("NCIT:C8851"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#AnalCancer",
            label: "anal cancer",
            definition: "A malignant neoplasm of the anal canal or anal margin, \
                         predominantly squamous cell carcinoma attributable to \
                         high-risk HPV infection.",
            synonym: Some("anal carcinoma"),
            ncit: Some("NCIT:C9291"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#VulvarCancer",
            label: "vulvar cancer",
            definition: "A malignant neoplasm of the vulva. A substantial \
                         minority of cases, particularly in younger patients, \
                         is attributable to high-risk HPV infection.",
            synonym: Some("vulvar carcinoma"),
            ncit: Some("NCIT:C4866"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#VaginalCancer",
            label: "vaginal cancer",
            definition: "A malignant neoplasm of the vagina, most often squamous \
                         cell carcinoma attributable to high-risk HPV infection.",
            synonym: Some("vaginal carcinoma"),
            ncit: Some("NCIT:C9292"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PenileCancer",
            label: "penile cancer",
            definition: "A malignant neoplasm of the penis, predominantly \
                         squamous cell carcinoma; roughly half of cases are \
                         attributable to high-risk HPV infection.",
            synonym: Some("penile carcinoma"),
            ncit: Some("NCIT:C9061"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
            disjoint_with: &[],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#PrecancerousLesion",
            label: "precancerous lesion",
            definition: "An epithelial abnormality that is not invasive cancer \
                         but may progress to it if untreated. Detecting and \
                         treating precancerous lesions is the goal of screening.",
            synonym: Some("premalignant lesion"),
            ncit: None,
            subclass_of: &[OWL_THING],
            disjoint_with: &["https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"],
        },
        Class {
            id: "https://purl.org/uth/ontology/hpvco#CervicalIntraepithelialNeoplasia",
            label: "cervical intraepithelial neoplasia",
            definition: "A precancerous lesion of the cervical squamous \
                         epithelium, graded 1 to 3 by the depth of epithelial \
                         involvement. Grades 2 and 3 are treated to prevent \
                         progression to invasive cervical cancer.",
            synonym: Some("CIN"),
            ncit: Some("NCIT:C4733"),
            subclass_of: &["https://purl.org/uth/ontology/hpvco#PrecancerousLesion"],
            disjoint_with: &[],
        },
    ]
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "https://purl.org/uth/ontology/hpvco#attributedToGenotype",
            label: "attributed to genotype",
            comment: "An HPV genotype causally attributed to this cancer.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"),
            range: "https://purl.org/uth/ontology/hpvco#HPVGenotype",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#progressesTo",
            label: "progresses to",
            comment: "The invasive cancer this lesion may develop into if \
                      untreated.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some("https://purl.org/uth/ontology/hpvco#PrecancerousLesion"),
            range: "https://purl.org/uth/ontology/hpvco#HPVRelatedCancer",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#primarySite",
            label: "primary site",
            comment: "The anatomic site at which this cancer arises.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"),
            range: "https://purl.org/uth/ontology/hpvco#AnatomicSite",
        },
        Property {
            id: "https://purl.org/uth/ontology/hpvco#attributableFraction",
            label: "attributable fraction",
            comment: "The fraction of cases of this cancer attributable to HPV \
                      infection, between 0 and 1.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some("https://purl.org/uth/ontology/hpvco#HPVRelatedCancer"),
            range: XSD_DECIMAL,
        },
    ]
}

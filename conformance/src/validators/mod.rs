//! Validators for the HPV Cancer Ontology.
//!
//! Three validator families exist:
//! - graph validators ([`declarations`], [`profile`], [`xrefs`]) operate
//!   on a loaded [`hpvco_store::OntologyStore`];
//! - the curated-data validator ([`curated`]) operates on the live typed
//!   ontology, before any serialization;
//! - the artifact validator ([`artifacts`]) checks exported files on disk.

pub mod artifacts;
pub mod curated;
pub mod declarations;
pub mod profile;
pub mod xrefs;

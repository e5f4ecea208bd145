//! Consumer layer for the HPV Cancer Ontology.
//!
//! The published HPVCO artifact is a static RDF/XML document at a
//! permanent URL. This crate provides the minimal software a consumer of
//! that artifact needs:
//!
//! - a **fetcher** for the permanent URL ([`fetch_document`], [`DOCUMENT_URL`])
//! - a **triple-store loader** that parses RDF/XML, Turtle, or N-Triples
//!   into an in-memory graph ([`load_graph`])
//! - a **lookup facade** over the immutable loaded graph
//!   ([`OntologyStore`])
//!
//! The load → validate → query lifecycle has no further states: once
//! loaded, the graph is never mutated, so any number of concurrent
//! readers may query it without synchronization. Structural validation
//! lives in the `hpvco-conformance` crate.
//!
//! ```no_run
//! use hpvco_store::OntologyStore;
//!
//! let store = OntologyStore::fetch()?;
//! let entity = store.resolve("CervicalCancer")?;
//! println!("{} xrefs: {:?}", entity.iri, entity.xrefs);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod fetch;
pub mod format;
pub mod loader;
pub mod store;

pub use error::{FetchError, LoadError, NotFound, ParseError};
pub use fetch::{fetch_document, DOCUMENT_URL};
pub use format::Format;
pub use loader::load_graph;
pub use store::{Entity, EntityKind, ObjectValue, OntologyStore, Statement};

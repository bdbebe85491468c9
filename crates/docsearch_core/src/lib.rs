//! Core document store and query logic for docsearch.
//! This crate is the single source of truth for document invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    derive_excerpt, next_document_id, seed_document, Document, DocumentId, NewDocument,
    EXCERPT_MAX_UTF16_UNITS, EXCERPT_SUFFIX,
};
pub use repo::document_repo::{DocumentRepository, MemoryDocumentRepository};
pub use search::matcher::{search_documents, QueryMatcher};
pub use service::document_service::{DocumentService, DocumentServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

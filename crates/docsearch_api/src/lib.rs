//! Async boundary consumed by the docsearch presentation layer.

mod api;

pub use api::{
    core_version, init_logging, ping, DocumentApi, DocumentView, SearchItem, SearchResponse,
};
pub use docsearch_core::{Document, DocumentRepository, DocumentService, MemoryDocumentRepository};

//! Async use-case API for presentation-layer calls.
//!
//! # Responsibility
//! - Expose search/get/add as `async` functions over a shared service.
//! - Shape records into the views each page consumes.
//!
//! # Invariants
//! - Exported functions never panic and never return errors.
//! - A missing document is `None`, not a failure.
//! - Each call completes without awaiting; the async signature leaves room
//!   for a networked or persistent repository.

use docsearch_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Document, DocumentRepository, DocumentService, MemoryDocumentRepository,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Minimal health-check API.
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes core crate version.
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    /// Preview shown under the title.
    pub excerpt: String,
}

impl From<Document> for SearchItem {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            title: document.title,
            excerpt: document.excerpt,
        }
    }
}

/// Search response envelope for the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches in store insertion order.
    pub items: Vec<SearchItem>,
    /// Human-readable summary for the results header.
    pub message: String,
}

/// Full document payload for the document view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentView {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl DocumentView {
    /// Splits content into display paragraphs, one per line.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

impl From<Document> for DocumentView {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            title: document.title,
            content: document.content,
        }
    }
}

/// Shared handle to the document service used by every page.
pub struct DocumentApi<R: DocumentRepository> {
    service: Arc<DocumentService<R>>,
}

impl<R: DocumentRepository> Clone for DocumentApi<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl DocumentApi<MemoryDocumentRepository> {
    /// Creates an API over a fresh in-memory store holding the seed record.
    pub fn seeded() -> Self {
        Self::new(Arc::new(DocumentService::seeded()))
    }
}

impl<R: DocumentRepository> DocumentApi<R> {
    /// Creates an API over an already constructed service.
    pub fn new(service: Arc<DocumentService<R>>) -> Self {
        info!(
            "event=api_ready module=api status=ok documents={}",
            service.document_count()
        );
        Self { service }
    }

    /// Searches titles and contents, ignoring case.
    pub async fn search_documents(&self, query: String) -> SearchResponse {
        let items = self
            .service
            .search_documents(query.as_str())
            .into_iter()
            .map(SearchItem::from)
            .collect::<Vec<_>>();
        let message = if items.is_empty() {
            "No results.".to_string()
        } else {
            format!("Found {} result(s).", items.len())
        };
        SearchResponse { items, message }
    }

    /// Loads one document for display.
    pub async fn get_document(&self, id: String) -> Option<DocumentView> {
        self.service
            .get_document(id.as_str())
            .map(DocumentView::from)
    }

    /// Stores a new document from the creation form.
    pub async fn add_document(&self, title: String, content: String) -> Document {
        self.service.add_document(title, content)
    }
}

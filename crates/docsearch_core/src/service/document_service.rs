//! Document use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/search APIs over a repository.
//! - Derive excerpts before records reach storage.
//! - Emit metadata-only diagnostic events.
//!
//! # Invariants
//! - Created documents are visible to every read as soon as `add_document` returns.
//! - Search results are always in insertion order.
//! - Title, content and query text are never written to logs.

use crate::model::document::{Document, DocumentId, NewDocument};
use crate::repo::document_repo::{DocumentRepository, MemoryDocumentRepository};
use crate::search::matcher::search_documents;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for document use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentServiceError {
    /// Target document does not exist.
    NotFound(DocumentId),
}

impl Display for DocumentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "document not found: {id}"),
        }
    }
}

impl Error for DocumentServiceError {}

/// Document service facade over repository implementations.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl DocumentService<MemoryDocumentRepository> {
    /// Creates a service over an in-memory repository holding the seed record.
    pub fn seeded() -> Self {
        Self::new(MemoryDocumentRepository::seeded())
    }
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one document and returns the stored record.
    ///
    /// Empty title or content is accepted.
    pub fn add_document(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Document {
        let draft = NewDocument::new(title, content);
        let title_chars = draft.title.chars().count();
        let content_chars = draft.content.chars().count();
        let created = self.repo.create_document(draft);
        info!(
            "event=document_add module=service status=ok id={} title_chars={} content_chars={}",
            created.id, title_chars, content_chars
        );
        created
    }

    /// Gets one document by id. A miss is a normal `None` result.
    pub fn get_document(&self, id: &str) -> Option<Document> {
        let found = self.repo.get_document(id);
        debug!(
            "event=document_get module=service status=ok found={}",
            found.is_some()
        );
        found
    }

    /// Gets one document by id, mapping a miss to `NotFound`.
    pub fn require_document(&self, id: &str) -> Result<Document, DocumentServiceError> {
        self.get_document(id)
            .ok_or_else(|| DocumentServiceError::NotFound(id.to_string()))
    }

    /// Lists all documents in insertion order.
    pub fn list_documents(&self) -> Vec<Document> {
        self.repo.list_documents()
    }

    /// Returns documents whose title or content contains `query`, ignoring case.
    pub fn search_documents(&self, query: &str) -> Vec<Document> {
        let started_at = Instant::now();
        let hits = search_documents(&self.repo, query);
        debug!(
            "event=document_search module=service status=ok query_chars={} hits={} duration_us={}",
            query.chars().count(),
            hits.len(),
            started_at.elapsed().as_micros()
        );
        hits
    }

    /// Returns the number of stored documents.
    pub fn document_count(&self) -> usize {
        self.repo.count_documents()
    }
}

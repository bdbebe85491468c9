//! Document repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered, append-only document collection.
//! - Assign identifiers atomically with the append.
//!
//! # Invariants
//! - Insertion order is the only order exposed by `list_documents`.
//! - Id allocation and append happen under one write guard.
//! - Lookup misses are reported as `None`, never as an error.

use crate::model::document::{next_document_id, seed_document, Document, NewDocument};
use log::debug;
use parking_lot::RwLock;

/// Repository interface for document storage.
///
/// Implementations must be shareable across threads; the async API layer
/// hands one instance to every caller.
pub trait DocumentRepository: Send + Sync {
    /// Appends one document, assigning its id, and returns the stored record.
    fn create_document(&self, draft: NewDocument) -> Document;
    /// Gets the first document whose id equals `id` exactly.
    fn get_document(&self, id: &str) -> Option<Document>;
    /// Returns a snapshot of all documents in insertion order.
    fn list_documents(&self) -> Vec<Document>;
    /// Returns the number of stored documents.
    fn count_documents(&self) -> usize;
}

/// Process-lifetime document repository backed by a guarded `Vec`.
#[derive(Debug, Default)]
pub struct MemoryDocumentRepository {
    documents: RwLock<Vec<Document>>,
}

impl MemoryDocumentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the standard seed record.
    pub fn seeded() -> Self {
        Self::with_documents(vec![seed_document()])
    }

    /// Creates a repository from pre-existing records, kept in given order.
    ///
    /// Records are trusted as-is; ids are not re-derived.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl DocumentRepository for MemoryDocumentRepository {
    fn create_document(&self, draft: NewDocument) -> Document {
        let mut documents = self.documents.write();
        let document = draft.into_document(next_document_id(documents.len()));
        documents.push(document.clone());
        debug!(
            "event=document_append module=repo status=ok id={} len={}",
            document.id,
            documents.len()
        );
        document
    }

    fn get_document(&self, id: &str) -> Option<Document> {
        self.documents
            .read()
            .iter()
            .find(|document| document.id == id)
            .cloned()
    }

    fn list_documents(&self) -> Vec<Document> {
        self.documents.read().clone()
    }

    fn count_documents(&self) -> usize {
        self.documents.read().len()
    }
}

//! Case-insensitive substring search over document title and content.
//!
//! # Responsibility
//! - Decide whether one document matches a query.
//! - Filter a repository snapshot into ordered hits.
//!
//! # Invariants
//! - Hits keep repository insertion order; there is no ranking.
//! - An empty query matches every document.
//! - The repository read guard is released before filtering starts.

use crate::model::document::Document;
use crate::repo::document_repo::DocumentRepository;

/// Pre-folded query used to test documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    /// Lower-cases the query once so each comparison only folds the haystack.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Returns whether the query occurs in the title or content.
    pub fn matches(&self, document: &Document) -> bool {
        contains_folded(&document.title, &self.needle)
            || contains_folded(&document.content, &self.needle)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Searches all documents in `repo` and returns matches in store order.
pub fn search_documents<R>(repo: &R, query: &str) -> Vec<Document>
where
    R: DocumentRepository + ?Sized,
{
    let matcher = QueryMatcher::new(query);
    repo.list_documents()
        .into_iter()
        .filter(|document| matcher.matches(document))
        .collect()
}

//! Document domain model.
//!
//! # Responsibility
//! - Define the single stored record shared by search/view/create flows.
//! - Provide identifier allocation and excerpt derivation rules.
//!
//! # Invariants
//! - `id` is assigned once by the store and never reused.
//! - `excerpt` is derived once at creation and never recomputed.
//! - Records are immutable after they enter the store.

use serde::{Deserialize, Serialize};

/// Stable identifier for a stored document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DocumentId = String;

/// Maximum length of the copied content prefix, in UTF-16 code units.
pub const EXCERPT_MAX_UTF16_UNITS: usize = 100;

/// Suffix appended to every derived excerpt.
pub const EXCERPT_SUFFIX: &str = "...";

/// Canonical stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Decimal identifier assigned by the store.
    pub id: DocumentId,
    /// Display title. Empty titles are accepted.
    pub title: String,
    /// Raw body text. May contain markup; never parsed by core.
    pub content: String,
    /// Preview derived from `content` at creation time.
    pub excerpt: String,
}

/// Draft for a document that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub excerpt: String,
}

impl NewDocument {
    /// Builds a draft and derives its excerpt from `content`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let excerpt = derive_excerpt(content.as_str());
        Self {
            title: title.into(),
            content,
            excerpt,
        }
    }

    /// Finalizes the draft with a store-assigned id.
    pub fn into_document(self, id: DocumentId) -> Document {
        Document {
            id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
        }
    }
}

/// Allocates the next identifier from the current store size.
///
/// The first document of an empty store is `"1"`. Callers must hold the
/// store's write guard between allocation and append.
pub fn next_document_id(current_len: usize) -> DocumentId {
    (current_len + 1).to_string()
}

/// Derives a preview excerpt from raw content.
///
/// Rules:
/// - keep the longest prefix of whole characters spanning at most 100 UTF-16
///   code units, so lengths agree with browser-side string slicing;
/// - a surrogate pair that would straddle the limit is dropped entirely;
/// - always append `...`, even when nothing was cut;
/// - markup is copied verbatim, so a cut may land inside a tag.
pub fn derive_excerpt(content: &str) -> String {
    let mut units = 0;
    let end = content
        .char_indices()
        .find_map(|(offset, ch)| {
            units += ch.len_utf16();
            (units > EXCERPT_MAX_UTF16_UNITS).then_some(offset)
        })
        .unwrap_or(content.len());

    let mut excerpt = String::with_capacity(end + EXCERPT_SUFFIX.len());
    excerpt.push_str(&content[..end]);
    excerpt.push_str(EXCERPT_SUFFIX);
    excerpt
}

/// Record present in every freshly constructed store.
///
/// Its excerpt is a hand-written summary, not a derived one.
pub fn seed_document() -> Document {
    Document {
        id: next_document_id(0),
        title: "Sample Document".to_string(),
        content: "<p>This is a sample document content.</p>".to_string(),
        excerpt: "This is a sample document content.".to_string(),
    }
}

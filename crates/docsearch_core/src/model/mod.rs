//! Domain model for stored documents.
//!
//! # Responsibility
//! - Define the canonical document record and its creation draft.
//! - Own identifier and excerpt derivation rules.
//!
//! # Invariants
//! - Every document is identified by a stable `DocumentId`.
//! - There is no update or delete path for a document.

pub mod document;

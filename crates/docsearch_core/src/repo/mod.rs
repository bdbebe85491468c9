//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract used by the service layer.
//! - Keep locking details out of service/business orchestration.
//!
//! # Invariants
//! - Repositories are append-only; no update or delete path exists.

pub mod document_repo;

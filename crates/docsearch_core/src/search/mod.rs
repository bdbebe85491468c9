//! Query entry points.
//!
//! # Responsibility
//! - Expose substring search over the repository snapshot.
//! - Keep match semantics inside core.

pub mod matcher;

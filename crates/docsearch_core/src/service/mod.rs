//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and search calls into use-case level APIs.
//! - Keep API/CLI layers decoupled from storage details.

pub mod document_service;

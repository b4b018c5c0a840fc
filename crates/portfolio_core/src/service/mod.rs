//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog and search calls into view-level APIs.
//! - Keep host/API layers decoupled from data sources.

pub mod contact_service;
pub mod project_service;

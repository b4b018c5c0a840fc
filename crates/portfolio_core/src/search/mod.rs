//! In-memory search entry points.
//!
//! # Responsibility
//! - Filter, search and rank the project catalog for the list view.
//! - Filter the skill board by free text.
//!
//! # Invariants
//! - Every function here is total; malformed input degrades, never fails.

pub mod collate;
pub mod impact;
pub mod pipeline;
pub mod skills;

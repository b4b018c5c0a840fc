//! Domain model for portfolio content.
//!
//! # Responsibility
//! - Define the records rendered by project, skill, experience and contact views.
//! - Keep wire naming stable for catalog documents and API envelopes.
//!
//! # Invariants
//! - Every project is identified by a stable, unique `slug`.
//! - Model values are immutable after construction; there is no update path.

pub mod contact;
pub mod experience;
pub mod project;
pub mod skill;

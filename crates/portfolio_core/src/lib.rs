//! Core domain logic for the portfolio site.
//! This crate is the single source of truth for catalog and view invariants.

pub mod catalog;
pub mod content;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;

pub use catalog::{
    Catalog, CatalogError, CatalogResult, ProjectLookup, ProjectSource, ALL_TAGS,
    FEATURED_PROJECT_COUNT,
};
pub use content::{contact_profile, experience, home_snapshot, skill_groups, HomeSnapshot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{ContactProfile, ResumeDownload};
pub use model::experience::{ExperienceEntry, ExperienceSection, ExperienceSectionError};
pub use model::project::{Metric, ProjectLink, ProjectRecord};
pub use model::skill::SkillGroup;
pub use search::impact::{impact_magnitude, parse_impact};
pub use search::pipeline::{
    filter_projects, ProjectFilter, ProjectListing, SortKey, SortKeyError, TagFilter,
};
pub use search::skills::{filter_skill_groups, no_skills_message, SkillGroupMatch};
pub use service::contact_service::{
    ClipboardError, ClipboardSink, ContactConsole, COPIED_FEEDBACK_MS,
};
pub use service::project_service::ProjectService;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Static profile content: skills, experience, contact and home page.
//!
//! # Responsibility
//! - Own the hard-coded biographical data rendered by non-project pages.
//! - Assemble the home page snapshot from the catalog and static content.
//!
//! # Invariants
//! - Content is built once per process and shared read-only.
//! - Declared order is display order.

mod data;

use crate::catalog::{Catalog, ProjectSource, FEATURED_PROJECT_COUNT};
use crate::model::contact::ContactProfile;
use crate::model::experience::{ExperienceEntry, ExperienceSection};
use crate::model::project::ProjectRecord;
use crate::model::skill::SkillGroup;
use once_cell::sync::Lazy;
use serde::Serialize;

static SKILL_GROUPS: Lazy<Vec<SkillGroup>> = Lazy::new(|| {
    data::SKILL_GROUPS
        .iter()
        .map(|(title, subtitle, skills)| SkillGroup::new(title, subtitle, skills))
        .collect()
});

static EXPERIENCE: Lazy<Vec<ExperienceEntry>> = Lazy::new(|| {
    data::EXPERIENCE.iter().map(data::ExperienceRow::to_entry).collect()
});

static CONTACT: Lazy<ContactProfile> = Lazy::new(|| ContactProfile {
    name: data::OWNER_NAME.to_string(),
    email: data::EMAIL.to_string(),
    linkedin_url: data::LINKEDIN_URL.to_string(),
    github_url: data::GITHUB_URL.to_string(),
    resume_href: data::RESUME_HREF.to_string(),
});

/// Number of roles previewed on the home page.
pub const EXPERIENCE_PREVIEW_COUNT: usize = 2;

/// Returns the skill board groups in display order.
pub fn skill_groups() -> &'static [SkillGroup] {
    &SKILL_GROUPS
}

/// Returns the experience entries of one section in display order.
pub fn experience(section: ExperienceSection) -> Vec<&'static ExperienceEntry> {
    EXPERIENCE
        .iter()
        .filter(|entry| entry.section == section)
        .collect()
}

/// Returns the public contact channels.
pub fn contact_profile() -> &'static ContactProfile {
    &CONTACT
}

/// Headline figure tile on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiTile {
    pub value: &'static str,
    pub label: &'static str,
}

/// Condensed role card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperiencePreview {
    pub role: &'static str,
    pub org: &'static str,
    pub location: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

/// Everything the home page renders besides decoration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSnapshot<'a> {
    pub name: &'static str,
    pub tagline: &'static str,
    pub status: &'static str,
    pub status_detail: &'static str,
    pub focus: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub kpis: Vec<KpiTile>,
    pub experience_preview: Vec<ExperiencePreview>,
    pub featured: Vec<&'a ProjectRecord>,
    pub resume_href: &'static str,
}

/// Assembles the home page snapshot; featured work is the catalog head.
pub fn home_snapshot(catalog: &Catalog) -> HomeSnapshot<'_> {
    HomeSnapshot {
        name: data::OWNER_NAME,
        tagline: data::TAGLINE,
        status: data::STATUS,
        status_detail: data::STATUS_DETAIL,
        focus: data::FOCUS,
        stack: data::HOME_STACK,
        kpis: data::KPIS
            .iter()
            .map(|&(value, label)| KpiTile { value, label })
            .collect(),
        experience_preview: data::EXPERIENCE_PREVIEW
            .iter()
            .take(EXPERIENCE_PREVIEW_COUNT)
            .cloned()
            .collect(),
        featured: catalog.featured(FEATURED_PROJECT_COUNT).iter().collect(),
        resume_href: data::RESUME_HREF,
    }
}

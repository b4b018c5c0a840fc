//! Use-case API for site hosts.
//!
//! # Responsibility
//! - Expose stable, view-level functions returning owned response envelopes.
//! - Keep error semantics simple: every call returns a value with a message.
//!
//! # Invariants
//! - Exported functions never panic.
//! - Unknown textual inputs fall back to defaults and say so in `message`.
//! - The active catalog is resolved once per process.

use log::warn;
use portfolio_core::{
    contact_profile, core_version as core_version_inner, experience, filter_skill_groups,
    home_snapshot, init_logging as init_logging_inner, no_skills_message, ping as ping_inner,
    skill_groups, Catalog, ClipboardSink, ContactConsole, ContactProfile, ExperienceEntry,
    ExperienceSection, HomeSnapshot, ProjectFilter, ProjectLookup, ProjectRecord, ProjectService,
    ResumeDownload, SortKey, TagFilter, COPIED_FEEDBACK_MS,
};
use serde::Serialize;
use std::sync::OnceLock;

/// Environment variable naming a JSON catalog that replaces the embedded one.
pub const CATALOG_PATH_ENV: &str = "PORTFOLIO_CATALOG_PATH";

static ACTIVE_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Health-check API for host smoke integration.
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Detail route response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProjectDetailResponse {
    Found { project: ProjectRecord },
    NotFound { slug: String, message: String },
}

/// List view response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListResponse {
    /// Filtered, ordered records.
    pub items: Vec<ProjectRecord>,
    pub count: u32,
    /// Summary line for the result bar.
    pub summary: String,
    /// Tag chips, `All` first.
    pub tags: Vec<String>,
    /// Inputs actually applied after normalization.
    pub applied_tag: String,
    pub applied_sort: String,
    /// Empty-state hint or fallback notice; empty when neither applies.
    pub message: String,
}

/// One skill card after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroupItem {
    pub group_title: String,
    pub group_subtitle: String,
    pub matched_skills: Vec<String>,
}

/// Skills view response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsResponse {
    pub groups: Vec<SkillGroupItem>,
    /// `No skills found ...` when a non-blank query matched nothing.
    pub message: String,
}

/// Experience view response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceResponse {
    pub section: ExperienceSection,
    pub entries: Vec<ExperienceEntry>,
    pub message: String,
}

/// Contact view response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponse {
    pub profile: ContactProfile,
    pub mailto: String,
    pub resume: ResumeDownload,
    pub copy_label: String,
    /// Milliseconds the `Copied!` label stays visible.
    pub copied_feedback_ms: u64,
}

/// Resolves the detail route for `slug`.
pub fn project_detail(slug: String) -> ProjectDetailResponse {
    let service = ProjectService::new(active_catalog());
    match service.detail(slug.as_str()) {
        ProjectLookup::Found(project) => ProjectDetailResponse::Found {
            project: project.clone(),
        },
        ProjectLookup::NotFound => ProjectDetailResponse::NotFound {
            message: format!("Project not found: `{slug}`. Check the URL and try again."),
            slug,
        },
    }
}

/// Runs the list view pipeline.
///
/// Blank or unknown `sort_key` text falls back to `impact`.
pub fn project_list(query: String, active_tag: String, sort_key: String) -> ProjectListResponse {
    let (sort, fallback) = if sort_key.trim().is_empty() {
        (SortKey::default(), None)
    } else {
        match sort_key.parse::<SortKey>() {
            Ok(sort) => (sort, None),
            Err(err) => (SortKey::default(), Some(format!("{err}; using impact"))),
        }
    };
    let filter = ProjectFilter::new(query, TagFilter::parse(&active_tag), sort);

    let service = ProjectService::new(active_catalog());
    let listing = service.list(&filter);
    let message = fallback
        .or_else(|| listing.empty_state())
        .unwrap_or_default();

    ProjectListResponse {
        count: u32::try_from(listing.count()).unwrap_or(u32::MAX),
        summary: listing.summary(),
        items: listing.items.iter().map(|project| (*project).clone()).collect(),
        tags: service.tags(),
        applied_tag: filter.tag.as_str().to_string(),
        applied_sort: filter.sort.as_str().to_string(),
        message,
    }
}

/// Runs the skills view filter.
pub fn skills_view(query: String) -> SkillsResponse {
    let groups: Vec<SkillGroupItem> = filter_skill_groups(skill_groups(), &query)
        .into_iter()
        .map(|group| SkillGroupItem {
            group_title: group.title.to_string(),
            group_subtitle: group.subtitle.to_string(),
            matched_skills: group.skills.iter().map(|skill| (*skill).to_string()).collect(),
        })
        .collect();
    let message = if groups.is_empty() {
        no_skills_message(&query)
    } else {
        String::new()
    };
    SkillsResponse { groups, message }
}

/// Returns one experience section; unknown names fall back to `professional`.
pub fn experience_view(section: String) -> ExperienceResponse {
    let (section, message) = match section.parse::<ExperienceSection>() {
        Ok(section) => (section, String::new()),
        Err(err) => (
            ExperienceSection::Professional,
            format!("{err}; using professional"),
        ),
    };
    ExperienceResponse {
        section,
        entries: experience(section).into_iter().cloned().collect(),
        message,
    }
}

/// Returns the home page snapshot.
pub fn home_view() -> HomeSnapshot<'static> {
    home_snapshot(active_catalog())
}

/// Returns contact channels with the copy button in its idle state.
pub fn contact_view() -> ContactResponse {
    contact_response(&ContactConsole::new(contact_profile().clone()))
}

/// Copies the e-mail through `sink`; failures leave the idle label in place.
pub fn contact_copy_email(sink: &mut dyn ClipboardSink) -> ContactResponse {
    let mut console = ContactConsole::new(contact_profile().clone());
    console.copy_email(sink);
    contact_response(&console)
}

fn contact_response(console: &ContactConsole) -> ContactResponse {
    ContactResponse {
        profile: console.profile().clone(),
        mailto: console.profile().mailto(),
        resume: console.resume_download(),
        copy_label: console.copy_label().to_string(),
        copied_feedback_ms: COPIED_FEEDBACK_MS,
    }
}

/// Returns the catalog used by every API call.
///
/// `PORTFOLIO_CATALOG_PATH` is read once; an unreadable or invalid file is
/// logged and the embedded catalog is used instead.
pub fn active_catalog() -> &'static Catalog {
    ACTIVE_CATALOG.get_or_init(|| {
        let Ok(raw) = std::env::var(CATALOG_PATH_ENV) else {
            return Catalog::builtin().clone();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Catalog::builtin().clone();
        }
        match Catalog::from_path(trimmed) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(
                    "event=catalog_load module=api status=fallback source=env reason={}",
                    err
                );
                Catalog::builtin().clone()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, experience_view, init_logging, ping, project_detail, project_list,
        skills_view, ProjectDetailResponse,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn project_detail_reports_not_found_with_slug() {
        match project_detail("does-not-exist".to_string()) {
            ProjectDetailResponse::NotFound { slug, message } => {
                assert_eq!(slug, "does-not-exist");
                assert!(message.contains("not found"));
            }
            ProjectDetailResponse::Found { .. } => panic!("unknown slug must not resolve"),
        }
    }

    #[test]
    fn project_list_falls_back_on_unknown_sort_key() {
        let response = project_list(String::new(), "All".to_string(), "oldest".to_string());
        assert_eq!(response.applied_sort, "impact");
        assert!(response.message.contains("oldest"));
        assert_eq!(response.count as usize, response.items.len());
    }

    #[test]
    fn skills_view_reports_empty_result() {
        let response = skills_view("cobol".to_string());
        assert!(response.groups.is_empty());
        assert_eq!(response.message, "No skills found for \"cobol\".");
    }

    #[test]
    fn experience_view_falls_back_to_professional() {
        let response = experience_view("hobbies".to_string());
        assert_eq!(response.entries.len(), 4);
        assert!(response.message.contains("hobbies"));
    }
}

//! Project list filter/sort/search pipeline.
//!
//! # Responsibility
//! - Derive the ordered project list view from caller-owned filter inputs.
//! - Build the summary line shown above the list.
//!
//! # Invariants
//! - Pure function of `(projects, filter)`; no ambient state.
//! - Filtering happens before sorting; every sort is stable, so declared
//!   catalog order breaks ties.
//! - Zero matches is an explicit empty listing, never an absent value.

use crate::catalog::ALL_TAGS;
use crate::model::project::ProjectRecord;
use crate::search::collate::locale_cmp;
use crate::search::impact::impact_magnitude;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Keywords suggested by the empty-state message.
pub const EMPTY_STATE_KEYWORDS: &[&str] = &["SQL", "Power BI", "ETL", "PostgreSQL", "ML"];

/// Tag selection for the project list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFilter {
    /// No tag filtering.
    #[default]
    All,
    /// Keep records whose `stack` contains this exact tag.
    Tag(String),
}

impl TagFilter {
    /// Maps the UI chip value to a filter; `All` and blank input disable filtering.
    pub fn parse(value: &str) -> Self {
        if value == ALL_TAGS || value.trim().is_empty() {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    /// Chip label for this filter.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAGS,
            Self::Tag(tag) => tag.as_str(),
        }
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => project.has_tag(tag),
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending impact magnitude.
    #[default]
    Impact,
    /// Descending year, undated records last.
    Newest,
    /// Ascending title.
    Alphabetical,
}

impl SortKey {
    /// Stable string id used by API and CLI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impact => "impact",
            Self::Newest => "newest",
            Self::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "impact" => Ok(Self::Impact),
            "newest" => Ok(Self::Newest),
            "alphabetical" | "az" | "a-z" => Ok(Self::Alphabetical),
            other => Err(SortKeyError(other.to_string())),
        }
    }
}

/// Unknown sort key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKeyError(pub String);

impl Display for SortKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported sort key `{}`; expected impact|newest|alphabetical",
            self.0
        )
    }
}

impl Error for SortKeyError {}

/// Caller-owned list view inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFilter {
    /// Free-text query, matched case-insensitively after trimming.
    pub query: String,
    pub tag: TagFilter,
    pub sort: SortKey,
}

impl ProjectFilter {
    pub fn new(query: impl Into<String>, tag: TagFilter, sort: SortKey) -> Self {
        Self {
            query: query.into(),
            tag,
            sort,
        }
    }

    /// Restores `query=""`, `tag=All`, `sort=impact`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trimmed query as typed, used for display.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    fn needle(&self) -> Option<String> {
        let trimmed = self.trimmed_query();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}

/// Ordered result of [`filter_projects`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing<'a> {
    pub items: Vec<&'a ProjectRecord>,
    /// Inputs that produced `items`.
    pub filter: ProjectFilter,
}

impl<'a> ProjectListing<'a> {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slugs(&self) -> Vec<&'a str> {
        self.items.iter().map(|project| project.slug.as_str()).collect()
    }

    /// Summary line, e.g. `Showing 1 project tagged SQL for search "routing"`.
    pub fn summary(&self) -> String {
        let count = self.count();
        let mut summary = format!(
            "Showing {count} project{}",
            if count == 1 { "" } else { "s" }
        );
        if let TagFilter::Tag(tag) = &self.filter.tag {
            summary.push_str(&format!(" tagged {tag}"));
        }
        let query = self.filter.trimmed_query();
        if !query.is_empty() {
            summary.push_str(&format!(" for search \"{query}\""));
        }
        summary
    }

    /// Empty-state hint, present only when nothing matched.
    pub fn empty_state(&self) -> Option<String> {
        if !self.is_empty() {
            return None;
        }
        Some(format!(
            "No projects found. Try clearing filters or searching with different keywords like {}.",
            EMPTY_STATE_KEYWORDS.join(", ")
        ))
    }
}

/// Applies tag filter, text filter and stable sort, in that order.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    filter: &ProjectFilter,
) -> ProjectListing<'a> {
    let needle = filter.needle();
    let mut items: Vec<&ProjectRecord> = projects
        .iter()
        .filter(|project| filter.tag.matches(project))
        .filter(|project| match needle.as_deref() {
            Some(needle) => project.search_text().contains(needle),
            None => true,
        })
        .collect();

    sort_projects(&mut items, filter.sort);

    ProjectListing {
        items,
        filter: filter.clone(),
    }
}

/// Stable in-place sort by `key`.
pub fn sort_projects(items: &mut [&ProjectRecord], key: SortKey) {
    match key {
        SortKey::Impact => {
            items.sort_by_cached_key(|project| Reverse(impact_magnitude(project.impact.as_deref())))
        }
        SortKey::Newest => items.sort_by_key(|project| Reverse(project.year.unwrap_or(0))),
        SortKey::Alphabetical => items.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
    }
}

//! Project case-study record.
//!
//! # Responsibility
//! - Define the canonical record rendered by the project list and detail views.
//! - Build the lower-cased text used by type-as-you-search filtering.
//!
//! # Invariants
//! - `slug` is stable and unique within one catalog.
//! - Records are immutable once a catalog is built.

use serde::{Deserialize, Serialize};

/// One `(label, value)` figure shown on a case-study page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// External link attached to a case study (repo, live demo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

/// Canonical project record.
///
/// List-view fields (`impact`, `year`, `kind`, `highlights`) are optional so
/// a catalog document may omit them entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable lookup key used by the detail route.
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    /// Technology tags in display order.
    pub stack: Vec<String>,
    pub metrics: Vec<Metric>,
    pub problem: String,
    pub approach: Vec<String>,
    pub results: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ProjectLink>,
    /// Free-text magnitude such as `50K+`, ranked by [`crate::parse_impact`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Serialized as `type` to match the catalog document naming.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}

impl ProjectRecord {
    /// Returns whether `tag` appears verbatim in `stack`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.stack.iter().any(|value| value == tag)
    }

    /// Returns the lower-cased haystack matched by free-text search.
    ///
    /// Fields are joined by a single space; empty optional fields are skipped.
    pub fn search_text(&self) -> String {
        let year = self.year.map(|value| value.to_string());
        let scalars = [
            Some(self.title.as_str()),
            Some(self.subtitle.as_str()),
            Some(self.problem.as_str()),
            self.impact.as_deref(),
            self.kind.as_deref(),
            year.as_deref(),
        ];

        scalars
            .into_iter()
            .flatten()
            .chain(self.approach.iter().map(String::as_str))
            .chain(self.results.iter().map(String::as_str))
            .chain(self.stack.iter().map(String::as_str))
            .chain(self.highlights.iter().map(String::as_str))
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

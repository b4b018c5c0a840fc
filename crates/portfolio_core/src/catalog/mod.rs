//! Immutable project catalog and slug lookup.
//!
//! # Responsibility
//! - Build a validated, ordered catalog from a JSON document.
//! - Resolve detail routes by slug without using errors for control flow.
//! - Derive the tag chip list used by the project list view.
//!
//! # Invariants
//! - Declared order is preserved; it is the tie-breaker for every sort.
//! - Slugs are non-empty and unique.
//! - A missing slug is a normal `NotFound` outcome.

pub mod validate;

use crate::model::project::ProjectRecord;
use crate::search::collate::locale_cmp;
use log::info;
use once_cell::sync::Lazy;
use std::path::Path;
use validate::validate_projects;

pub use validate::{CatalogError, CatalogResult};

/// Sentinel tag that disables tag filtering.
pub const ALL_TAGS: &str = "All";

/// Number of case studies surfaced on the home page.
pub const FEATURED_PROJECT_COUNT: usize = 3;

/// Embedded records in display order. `impact` carries the headline figure
/// from each subtitle; the in-progress routing study has none, so it ranks
/// last under the default impact sort while staying first on the home page.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/projects.json");

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(BUILTIN_CATALOG_JSON).expect("embedded project catalog must be valid")
});

/// Outcome of a detail lookup by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLookup<'a> {
    Found(&'a ProjectRecord),
    NotFound,
}

impl<'a> ProjectLookup<'a> {
    /// Converts the outcome into an `Option`.
    pub fn found(self) -> Option<&'a ProjectRecord> {
        match self {
            Self::Found(project) => Some(project),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Read-only access to an ordered project collection.
pub trait ProjectSource {
    /// Returns all projects in declared order.
    fn projects(&self) -> &[ProjectRecord];

    /// Looks up one project by exact slug.
    fn lookup(&self, slug: &str) -> ProjectLookup<'_> {
        match self.projects().iter().find(|project| project.slug == slug) {
            Some(project) => ProjectLookup::Found(project),
            None => ProjectLookup::NotFound,
        }
    }

    /// Returns distinct stack tags, sorted, with [`ALL_TAGS`] first.
    fn tags(&self) -> Vec<String> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.projects().iter().flat_map(|project| project.stack.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag.as_str());
            }
        }
        tags.sort_by(|a, b| locale_cmp(a, b));

        std::iter::once(ALL_TAGS)
            .chain(tags)
            .map(str::to_string)
            .collect()
    }

    /// Returns up to `count` leading projects in declared order.
    fn featured(&self, count: usize) -> &[ProjectRecord] {
        let projects = self.projects();
        &projects[..count.min(projects.len())]
    }
}

impl<T: ProjectSource + ?Sized> ProjectSource for &T {
    fn projects(&self) -> &[ProjectRecord] {
        (**self).projects()
    }
}

/// Validated, immutable project catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// Builds a catalog from records, enforcing slug/title invariants.
    pub fn new(projects: Vec<ProjectRecord>) -> CatalogResult<Self> {
        validate_projects(&projects)?;
        Ok(Self { projects })
    }

    /// Parses and validates a JSON array of project records.
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(text)?;
        Self::new(projects)
    }

    /// Reads, parses and validates a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&text)?;
        info!(
            "event=catalog_load module=catalog status=ok source=file projects={}",
            catalog.len()
        );
        Ok(catalog)
    }

    /// Returns the process-wide catalog embedded at build time.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectSource for Catalog {
    fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }
}

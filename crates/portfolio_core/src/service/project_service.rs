//! Project use-case service.
//!
//! # Responsibility
//! - Provide detail, list and tag-chip entry points for project views.
//! - Emit metadata-only diagnostics for each request.
//!
//! # Invariants
//! - Service APIs never mutate the underlying source.
//! - Query text is never logged, only its length.

use crate::catalog::{ProjectLookup, ProjectSource};
use crate::model::project::ProjectRecord;
use crate::search::pipeline::{filter_projects, ProjectFilter, ProjectListing, TagFilter};
use log::debug;

/// Use-case service over a read-only project source.
pub struct ProjectService<S: ProjectSource> {
    source: S,
}

impl<S: ProjectSource> ProjectService<S> {
    /// Creates a service over the provided source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolves the detail route for `slug`.
    ///
    /// Unknown slugs yield `ProjectLookup::NotFound`.
    pub fn detail(&self, slug: &str) -> ProjectLookup<'_> {
        let lookup = self.source.lookup(slug);
        debug!(
            "event=project_detail module=service status={} slug_len={}",
            if lookup.is_found() { "found" } else { "not_found" },
            slug.len()
        );
        lookup
    }

    /// Runs the list pipeline for caller-owned filter inputs.
    pub fn list(&self, filter: &ProjectFilter) -> ProjectListing<'_> {
        let listing = filter_projects(self.source.projects(), filter);
        debug!(
            "event=project_list module=service status=ok count={} query_len={} tag_filtered={} sort={}",
            listing.count(),
            filter.trimmed_query().len(),
            !matches!(filter.tag, TagFilter::All),
            filter.sort.as_str()
        );
        listing
    }

    /// Returns distinct tags with the `All` sentinel first.
    pub fn tags(&self) -> Vec<String> {
        self.source.tags()
    }

    /// Returns up to `count` leading projects in declared order.
    pub fn featured(&self, count: usize) -> &[ProjectRecord] {
        self.source.featured(count)
    }
}

//! Catalog document validation.

use crate::model::project::ProjectRecord;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction error for I/O, parsing and record invariants.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document does not match the project record shape.
    Parse(serde_json::Error),
    /// Record at `index` has a blank slug.
    EmptySlug { index: usize },
    /// Two records share one slug.
    DuplicateSlug(String),
    /// Record has a blank title.
    EmptyTitle { slug: String },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid catalog document: {err}"),
            Self::EmptySlug { index } => write!(f, "project #{index} has an empty slug"),
            Self::DuplicateSlug(slug) => write!(f, "duplicate project slug `{slug}`"),
            Self::EmptyTitle { slug } => write!(f, "project `{slug}` has an empty title"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Checks slug and title invariants across all records.
pub fn validate_projects(projects: &[ProjectRecord]) -> CatalogResult<()> {
    let mut seen = BTreeSet::<&str>::new();
    for (index, project) in projects.iter().enumerate() {
        let slug = project.slug.trim();
        if slug.is_empty() {
            return Err(CatalogError::EmptySlug { index });
        }
        if !seen.insert(project.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(project.slug.clone()));
        }
        if project.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle {
                slug: project.slug.clone(),
            });
        }
    }
    Ok(())
}

//! Experience timeline model.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Section of the experience page an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceSection {
    Professional,
    Volunteering,
}

impl ExperienceSection {
    /// Stable string id used by API and CLI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Volunteering => "volunteering",
        }
    }
}

impl FromStr for ExperienceSection {
    type Err = ExperienceSectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "professional" | "work" => Ok(Self::Professional),
            "volunteering" | "volunteer" => Ok(Self::Volunteering),
            other => Err(ExperienceSectionError(other.to_string())),
        }
    }
}

/// Unknown experience section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceSectionError(pub String);

impl Display for ExperienceSectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported experience section `{}`; expected professional|volunteering",
            self.0
        )
    }
}

impl Error for ExperienceSectionError {}

/// One role on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub section: ExperienceSection,
    pub org: String,
    pub role: String,
    pub location: String,
    /// Display range, e.g. `Jan 2026 – May 2026`.
    pub dates: String,
    pub bullets: Vec<String>,
}

//! Skill grouping model.

use serde::{Deserialize, Serialize};

/// Named group of skills shown as one card on the skills board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub subtitle: String,
    /// Skills in display order.
    pub skills: Vec<String>,
}

impl SkillGroup {
    /// Creates a group from borrowed static strings.
    pub fn new(title: &str, subtitle: &str, skills: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            skills: skills.iter().map(|skill| (*skill).to_string()).collect(),
        }
    }
}

//! Skill board search.

use crate::model::skill::SkillGroup;
use serde::Serialize;

/// Group reduced to the skills matching a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroupMatch<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub skills: Vec<&'a str>,
}

/// Filters groups to skills containing `query` (case-insensitive).
///
/// Blank query returns every group with its full skill list. Groups left
/// without a matching skill are dropped; declared order is preserved.
pub fn filter_skill_groups<'a>(groups: &'a [SkillGroup], query: &str) -> Vec<SkillGroupMatch<'a>> {
    let needle = query.trim().to_lowercase();
    groups
        .iter()
        .map(|group| SkillGroupMatch {
            title: group.title.as_str(),
            subtitle: group.subtitle.as_str(),
            skills: group
                .skills
                .iter()
                .map(String::as_str)
                .filter(|skill| needle.is_empty() || skill.to_lowercase().contains(&needle))
                .collect(),
        })
        .filter(|group| needle.is_empty() || !group.skills.is_empty())
        .collect()
}

/// Message shown when a non-blank query matched nothing.
pub fn no_skills_message(query: &str) -> String {
    format!("No skills found for \"{query}\".")
}

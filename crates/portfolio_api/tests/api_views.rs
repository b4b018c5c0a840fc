use portfolio_api::api::{
    contact_copy_email, contact_view, experience_view, home_view, project_detail, project_list,
    skills_view, ProjectDetailResponse,
};
use portfolio_core::{ClipboardError, ClipboardSink};

struct OkClipboard(Vec<String>);

impl ClipboardSink for OkClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.push(text.to_string());
        Ok(())
    }
}

struct HeadlessClipboard;

impl ClipboardSink for HeadlessClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[test]
fn project_detail_returns_found_record() {
    match project_detail("job-title-data-aggregator".to_string()) {
        ProjectDetailResponse::Found { project } => {
            assert_eq!(project.title, "Job Title Data Aggregator");
            assert_eq!(project.stack[0], "Python");
        }
        ProjectDetailResponse::NotFound { .. } => panic!("known slug should resolve"),
    }
}

#[test]
fn project_detail_serializes_with_status_tag() {
    let json = serde_json::to_value(project_detail("nope".to_string())).unwrap();
    assert_eq!(json["status"], "not_found");
    assert_eq!(json["slug"], "nope");
}

#[test]
fn project_list_defaults_to_full_catalog_by_impact() {
    let response = project_list(String::new(), String::new(), String::new());
    assert_eq!(response.count, 4);
    assert_eq!(response.items[0].slug, "job-title-data-aggregator");
    assert_eq!(response.applied_tag, "All");
    assert_eq!(response.applied_sort, "impact");
    assert_eq!(response.summary, "Showing 4 projects");
    assert!(response.message.is_empty());
    assert_eq!(response.tags[0], "All");
}

#[test]
fn project_list_applies_tag_query_and_sort() {
    let response = project_list(
        "data".to_string(),
        "PostgreSQL".to_string(),
        "az".to_string(),
    );
    let slugs: Vec<&str> = response.items.iter().map(|item| item.slug.as_str()).collect();
    assert_eq!(
        slugs,
        vec!["car-wash-repair-system", "job-title-data-aggregator", "privacy-aware-routing"]
    );
    assert_eq!(response.applied_sort, "alphabetical");
    assert_eq!(
        response.summary,
        "Showing 3 projects tagged PostgreSQL for search \"data\""
    );
}

#[test]
fn project_list_reports_empty_state() {
    let response = project_list("cobol".to_string(), "All".to_string(), "newest".to_string());
    assert_eq!(response.count, 0);
    assert!(response.items.is_empty());
    assert!(response.message.starts_with("No projects found"));
}

#[test]
fn skills_view_reduces_groups_to_matching_skills() {
    let response = skills_view("SQL".to_string());
    assert_eq!(response.groups.len(), 2);
    assert_eq!(response.groups[0].group_title, "Programming & Frontend");
    assert_eq!(response.groups[0].matched_skills, vec!["SQL".to_string()]);
    assert_eq!(
        response.groups[1].matched_skills,
        vec!["PostgreSQL".to_string(), "MySQL".to_string()]
    );
    assert!(response.message.is_empty());
}

#[test]
fn experience_view_returns_volunteering_section() {
    let response = experience_view("volunteering".to_string());
    assert_eq!(response.entries.len(), 2);
    assert!(response.message.is_empty());
}

#[test]
fn home_view_features_three_projects() {
    let snapshot = home_view();
    assert_eq!(snapshot.featured.len(), 3);
    assert_eq!(snapshot.featured[0].slug, "privacy-aware-routing");
}

#[test]
fn contact_copy_reports_copied_only_on_success() {
    let idle = contact_view();
    assert_eq!(idle.copy_label, "Copy Email");
    assert_eq!(idle.copied_feedback_ms, 1200);
    assert_eq!(idle.resume.file_name, "johannes-johnson-data-analyst.pdf");

    let mut clipboard = OkClipboard(Vec::new());
    let copied = contact_copy_email(&mut clipboard);
    assert_eq!(copied.copy_label, "Copied!");
    assert_eq!(clipboard.0, vec![idle.profile.email.clone()]);

    let failed = contact_copy_email(&mut HeadlessClipboard);
    assert_eq!(failed, idle);
}

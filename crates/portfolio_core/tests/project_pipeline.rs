use portfolio_core::{
    filter_projects, Catalog, ProjectFilter, ProjectRecord, ProjectService, ProjectSource, SortKey,
    TagFilter,
};

fn project(
    slug: &str,
    title: &str,
    stack: &[&str],
    impact: Option<&str>,
    year: Option<i32>,
) -> ProjectRecord {
    ProjectRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: format!("{title} subtitle"),
        stack: stack.iter().map(|tag| (*tag).to_string()).collect(),
        metrics: Vec::new(),
        problem: String::new(),
        approach: Vec::new(),
        results: Vec::new(),
        links: Vec::new(),
        impact: impact.map(str::to_string),
        year,
        kind: None,
        highlights: Vec::new(),
    }
}

#[test]
fn default_filter_ranks_builtin_catalog_by_impact() {
    let listing = filter_projects(Catalog::builtin().projects(), &ProjectFilter::default());
    assert_eq!(
        listing.slugs(),
        vec![
            "job-title-data-aggregator",
            "pizza-sales-dashboard",
            "car-wash-repair-system",
            "privacy-aware-routing",
        ]
    );
    assert_eq!(listing.count(), 4);
    assert_eq!(listing.summary(), "Showing 4 projects");
    assert_eq!(listing.empty_state(), None);
}

#[test]
fn tag_filter_is_sound_and_complete_for_every_tag() {
    let catalog = Catalog::builtin();
    for tag in catalog.tags().into_iter().skip(1) {
        let filter = ProjectFilter::new("", TagFilter::parse(&tag), SortKey::Impact);
        let listing = filter_projects(catalog.projects(), &filter);

        assert!(listing.items.iter().all(|project| project.has_tag(&tag)));
        let expected = catalog
            .projects()
            .iter()
            .filter(|project| project.has_tag(&tag))
            .count();
        assert_eq!(listing.count(), expected, "tag `{tag}` dropped a record");
        assert!(listing.count() > 0);
    }
}

#[test]
fn tag_filter_requires_verbatim_tag() {
    let catalog = Catalog::builtin();
    let filter = ProjectFilter::new("", TagFilter::parse("sql"), SortKey::Impact);
    assert!(filter_projects(catalog.projects(), &filter).is_empty());
}

#[test]
fn query_matches_exact_subsequence_of_searchable_text() {
    let catalog = Catalog::builtin();
    for query in ["SQL", "postgis", "50k", "dashboard", "  Routing  ", "zzz", "fuzzy matching"] {
        let filter = ProjectFilter::new(query, TagFilter::All, SortKey::Alphabetical);
        let mut actual = filter_projects(catalog.projects(), &filter).slugs();
        actual.sort_unstable();

        let needle = query.trim().to_lowercase();
        let mut expected: Vec<&str> = catalog
            .projects()
            .iter()
            .filter(|project| project.search_text().contains(&needle))
            .map(|project| project.slug.as_str())
            .collect();
        expected.sort_unstable();

        assert_eq!(actual, expected, "query `{query}`");
    }
}

#[test]
fn query_is_case_insensitive_and_searches_impact() {
    let catalog = Catalog::builtin();
    let filter = ProjectFilter::new("POSTGIS", TagFilter::All, SortKey::Impact);
    assert_eq!(
        filter_projects(catalog.projects(), &filter).slugs(),
        vec!["privacy-aware-routing"]
    );

    let filter = ProjectFilter::new("50k", TagFilter::All, SortKey::Impact);
    assert_eq!(
        filter_projects(catalog.projects(), &filter).slugs(),
        vec!["job-title-data-aggregator"]
    );
}

#[test]
fn blank_query_keeps_tag_filtered_set() {
    let catalog = Catalog::builtin();
    let tag_only = ProjectFilter::new("", TagFilter::parse("PostgreSQL"), SortKey::Impact);
    let blank = ProjectFilter::new("   ", TagFilter::parse("PostgreSQL"), SortKey::Impact);
    let expected = filter_projects(catalog.projects(), &tag_only);
    let actual = filter_projects(catalog.projects(), &blank);
    assert_eq!(actual.slugs(), expected.slugs());
    assert_eq!(
        actual.slugs(),
        vec![
            "job-title-data-aggregator",
            "car-wash-repair-system",
            "privacy-aware-routing",
        ]
    );
}

#[test]
fn impact_sort_is_stable_for_tied_magnitudes() {
    let projects = vec![
        project("c", "C", &[], Some("5K"), None),
        project("a", "A", &[], Some("5,000"), None),
        project("big", "Big", &[], Some("1M"), None),
        project("b", "B", &[], Some("5000+"), None),
        project("none", "None", &[], None, None),
        project("tbd", "Tbd", &[], Some("TBD"), None),
    ];
    let listing = filter_projects(&projects, &ProjectFilter::default());
    assert_eq!(listing.slugs(), vec!["big", "c", "a", "b", "none", "tbd"]);

    let shuffled = vec![
        projects[3].clone(),
        projects[5].clone(),
        projects[0].clone(),
        projects[4].clone(),
        projects[1].clone(),
        projects[2].clone(),
    ];
    let listing = filter_projects(&shuffled, &ProjectFilter::default());
    assert_eq!(listing.slugs(), vec!["big", "b", "c", "a", "tbd", "none"]);
}

#[test]
fn newest_sort_puts_undated_last_and_keeps_ties() {
    let projects = vec![
        project("undated", "U", &[], None, None),
        project("old", "O", &[], None, Some(2021)),
        project("new-a", "NA", &[], None, Some(2025)),
        project("new-b", "NB", &[], None, Some(2025)),
    ];
    let filter = ProjectFilter::new("", TagFilter::All, SortKey::Newest);
    assert_eq!(
        filter_projects(&projects, &filter).slugs(),
        vec!["new-a", "new-b", "old", "undated"]
    );
}

#[test]
fn alphabetical_sort_orders_titles_ignoring_case() {
    let projects = vec![
        project("z", "zeta", &[], None, None),
        project("b", "Beta", &[], None, None),
        project("a", "alpha", &[], None, None),
    ];
    let filter = ProjectFilter::new("", TagFilter::All, SortKey::Alphabetical);
    assert_eq!(filter_projects(&projects, &filter).slugs(), vec!["a", "b", "z"]);

    let filter = ProjectFilter::new("", TagFilter::All, SortKey::Alphabetical);
    assert_eq!(
        filter_projects(Catalog::builtin().projects(), &filter).slugs(),
        vec![
            "car-wash-repair-system",
            "job-title-data-aggregator",
            "pizza-sales-dashboard",
            "privacy-aware-routing",
        ]
    );
}

#[test]
fn zero_matches_is_an_explicit_empty_listing() {
    let filter = ProjectFilter::new("cobol", TagFilter::parse("SQL"), SortKey::Impact);
    let listing = filter_projects(Catalog::builtin().projects(), &filter);
    assert!(listing.is_empty());
    assert_eq!(listing.count(), 0);
    assert_eq!(
        listing.summary(),
        "Showing 0 projects tagged SQL for search \"cobol\""
    );
    let hint = listing.empty_state().expect("empty listing should carry a hint");
    assert!(hint.starts_with("No projects found"));
    assert!(hint.contains("Power BI"));
}

#[test]
fn summary_pluralizes_and_names_active_inputs() {
    let filter = ProjectFilter::new(" routing ", TagFilter::parse("SQL"), SortKey::Newest);
    let listing = filter_projects(Catalog::builtin().projects(), &filter);
    assert_eq!(listing.count(), 1);
    assert_eq!(
        listing.summary(),
        "Showing 1 project tagged SQL for search \"routing\""
    );
}

#[test]
fn reset_restores_default_impact_order() {
    let service = ProjectService::new(Catalog::builtin());
    let initial = service.list(&ProjectFilter::default()).slugs();

    let mut filter = ProjectFilter::new("sql", TagFilter::parse("Python"), SortKey::Alphabetical);
    assert_ne!(service.list(&filter).slugs(), initial);

    filter.reset();
    assert_eq!(service.list(&filter).slugs(), initial);
}

#[test]
fn changing_one_input_does_not_disturb_others() {
    let service = ProjectService::new(Catalog::builtin());
    let mut filter = ProjectFilter::new("", TagFilter::parse("SQL"), SortKey::Impact);
    let by_impact = service.list(&filter).slugs();

    filter.sort = SortKey::Alphabetical;
    let mut by_title = service.list(&filter).slugs();
    assert_eq!(filter.tag, TagFilter::parse("SQL"));

    let mut sorted_impact = by_impact.clone();
    sorted_impact.sort_unstable();
    by_title.sort_unstable();
    assert_eq!(sorted_impact, by_title);
}

use folio_core::query::merge_filter_query;
use folio_core::{
    decode_filter_query, encode_filter_query, FilterLocation, HistorySink, MemoryHistory, Project,
    ProjectFilterSession, TagSelection,
};

fn projects() -> Vec<Project> {
    vec![
        Project::new("Lifepadi", "E-commerce").with_tech(["Flutter", "Dart", "Firebase"]),
        Project::new("FinView", "Charts").with_tech(["React", "TypeScript"]),
        Project::new("Ace iT Pro", "Exams").with_tech(["Flutter", "Dart"]),
        Project::new("Vitrine", "Showcase").with_tech(["Python", "Flask"]),
    ]
}

#[test]
fn toggle_on_then_off_restores_full_list_and_empty_url() {
    let catalog = projects();
    let mut session = ProjectFilterSession::mount(MemoryHistory::from_href("/projects"));

    session.toggle_tag("React");
    assert_eq!(session.visible(&catalog).len(), 1);
    assert_eq!(
        session.history().location().to_href(),
        "/projects?filter=React"
    );

    session.toggle_tag("React");
    let visible = session.visible(&catalog);
    assert_eq!(visible.len(), catalog.len());
    assert_eq!(visible[0].title, "Lifepadi");
    assert!(decode_filter_query(&session.history().location().query).is_empty());
    assert_eq!(session.history().location().to_href(), "/projects");
    assert_eq!(session.history().replacements().len(), 2);
}

#[test]
fn mount_restores_selection_from_repeated_params() {
    let catalog = projects();
    let history = MemoryHistory::from_href("/projects?filter=Flutter&filter=Dart&utm=x");
    let session = ProjectFilterSession::mount(history);

    let expected: TagSelection = ["Dart", "Flutter"].into_iter().collect();
    assert_eq!(session.selected(), &expected);

    let titles: Vec<&str> = session
        .visible(&catalog)
        .into_iter()
        .map(|project| project.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Lifepadi", "Ace iT Pro"]);
}

#[test]
fn url_is_not_reread_after_mount() {
    let mut history = MemoryHistory::from_href("/projects?filter=Python");
    let mut session = ProjectFilterSession::mount(&mut history);
    session.toggle_tag("Flask");
    assert_eq!(
        session.href(),
        "/projects?filter=Python&filter=Flask"
    );
    drop(session);

    history.replace(FilterLocation::parse("/projects?filter=Dart"));
    let mut session = ProjectFilterSession::mount(&mut history);
    assert!(session.selected().contains("Dart"));
    session.clear();
    drop(session);
    assert_eq!(history.location().to_href(), "/projects");
}

#[test]
fn set_tags_writes_every_tag_once() {
    let mut session = ProjectFilterSession::mount(MemoryHistory::from_href("/projects"));
    session.set_tags(["Dart", "Dart", "React Native"]);
    assert_eq!(
        session.history().location().query,
        "filter=Dart&filter=React+Native"
    );
}

#[test]
fn encode_decode_handles_reserved_characters() {
    let selection: TagSelection = ["CI/CD", "C#", "Web Development"].into_iter().collect();
    let encoded = encode_filter_query(&selection);
    assert_eq!(
        encoded,
        "filter=CI%2FCD&filter=C%23&filter=Web+Development"
    );
    assert_eq!(decode_filter_query(&format!("?{encoded}")), selection);
}

#[test]
fn decode_ignores_other_keys_and_empty_values() {
    let decoded = decode_filter_query("filter=&view=list&filter=Rust&filters=Go&filter");
    let expected: TagSelection = ["Rust"].into_iter().collect();
    assert_eq!(decoded, expected);
}

#[test]
fn merge_replaces_only_filter_pairs() {
    let selection: TagSelection = ["Go"].into_iter().collect();
    assert_eq!(
        merge_filter_query("?a=1&filter=Rust&b=2", &selection),
        "a=1&b=2&filter=Go"
    );
    assert_eq!(merge_filter_query("filter=Rust", &TagSelection::new()), "");
}

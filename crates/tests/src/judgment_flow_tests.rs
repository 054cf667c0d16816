use pretty_assertions::assert_eq;
use shared_types::{parse_judgment_id, AppErrorKind};
use shared_ui::detail::{
    body_sections, case_title, header_fields, FetchState, FetchTracker, NOT_AVAILABLE,
};

use crate::common::{judgment, spawn_site};

#[tokio::test]
async fn route_param_to_rendered_sections() {
    let site = spawn_site().await;
    site.library
        .insert(2417, judgment(2417, "K. Suresh", "State of Kerala"));

    let id = parse_judgment_id("2417").unwrap();
    let mut tracker = FetchTracker::default();
    let ticket = tracker.begin(id);
    assert!(tracker.state().is_loading());

    let result = site.content().fetch_judgment(id).await;
    assert!(tracker.settle(ticket, result));

    let FetchState::Loaded(judgment) = tracker.state() else {
        panic!("expected a loaded judgment, got {:?}", tracker.state());
    };
    assert_eq!(case_title(judgment), "K. Suresh v. State of Kerala");
    assert_eq!(
        header_fields(&judgment.record)[1],
        ("Court", "High Court of Kerala".to_string())
    );

    let sections = body_sections(&judgment.record);
    assert_eq!(sections.len(), 7);
    let facts = sections.iter().find(|s| s.title == "Facts").unwrap();
    assert_eq!(facts.body, NOT_AVAILABLE);
    let headnotes = sections.iter().find(|s| s.title == "Headnotes").unwrap();
    assert!(!headnotes.available);
}

#[tokio::test]
async fn unknown_judgment_lands_in_failed_state() {
    let site = spawn_site().await;
    let mut tracker = FetchTracker::default();
    let ticket = tracker.begin(99);

    let result = site.content().fetch_judgment(99).await;
    assert_eq!(result.as_ref().unwrap_err().kind, AppErrorKind::NotFound);
    tracker.settle(ticket, result);

    assert_eq!(
        tracker.state(),
        &FetchState::Failed("We couldn't find this judgment.".to_string())
    );
}

#[tokio::test]
async fn malformed_route_param_never_reaches_the_service() {
    let site = spawn_site().await;
    let err = parse_judgment_id("12abc").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(site.library.lookups().is_empty());
}

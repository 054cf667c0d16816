use pretty_assertions::assert_eq;
use std::time::Duration;
use shared_ui::detail::{case_title, FetchState, FetchTracker};

use crate::common::{judgment, spawn_site};

#[tokio::test]
async fn slow_response_for_previous_id_is_discarded() {
    let site = spawn_site().await;
    site.library.insert_delayed(
        5,
        judgment(5, "Old Appellant", "Old Respondent"),
        Duration::from_millis(400),
    );
    site.library.insert(6, judgment(6, "New Appellant", "New Respondent"));
    let content = site.content();

    let mut tracker = FetchTracker::default();
    let first = tracker.begin(5);
    let slow = tokio::spawn({
        let content = content.clone();
        async move { content.fetch_judgment(5).await }
    });

    // Navigate to another judgment before the first answers.
    let second = tracker.begin(6);
    let fast = content.fetch_judgment(6).await;
    assert!(tracker.settle(second, fast));

    let late = slow.await.unwrap();
    assert!(late.is_ok());
    assert!(!tracker.settle(first, late));

    let FetchState::Loaded(shown) = tracker.state() else {
        panic!("expected a loaded judgment");
    };
    assert_eq!(shown.id, 6);
    assert_eq!(case_title(shown), "New Appellant v. New Respondent");
}

#[tokio::test]
async fn response_after_teardown_changes_nothing() {
    let site = spawn_site().await;
    site.library.insert(8, judgment(8, "A", "B"));

    let mut tracker = FetchTracker::default();
    let ticket = tracker.begin(8);
    let result = site.content().fetch_judgment(8).await;

    tracker.retire();
    assert!(!tracker.settle(ticket, result));
    assert!(tracker.state().is_loading());
    assert_eq!(tracker.pending(), None);
}

#[tokio::test]
async fn revisiting_an_id_fetches_again() {
    let site = spawn_site().await;
    site.library.insert(3, judgment(3, "A", "B"));
    let content = site.content();
    let mut tracker = FetchTracker::default();

    for _ in 0..2 {
        let ticket = tracker.begin(3);
        let result = content.fetch_judgment(3).await;
        assert!(tracker.settle(ticket, result));
    }

    assert_eq!(site.library.lookups(), vec![3, 3]);
}

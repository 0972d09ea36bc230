mod common;

use ai_news_tui::app::{FeedTarget, FetchOutcome, FetchRequest, LoadState};
use common::{make_archive, make_feed, ready_app, rejected};

fn feed_ticket(request: &FetchRequest) -> u64 {
    match request {
        FetchRequest::Feed { ticket, .. } => *ticket,
        other => panic!("expected feed request, got {:?}", other),
    }
}

fn complete(app: &mut ai_news_tui::app::App, request: &FetchRequest, ids: &[&str], ts: &str) {
    let FetchRequest::Feed { ticket, target } = request else {
        panic!("expected feed request, got {:?}", request);
    };
    app.apply(FetchOutcome::Feed {
        ticket: *ticket,
        target: target.clone(),
        result: Ok(make_feed(ids, Some(ts))),
    });
}

#[test]
fn test_fetch_archive_sets_loading_before_request() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    let request = app.fetch_archive("w1");
    assert!(app.archive_loading);
    match request {
        FetchRequest::Feed { target, .. } => assert_eq!(target, FeedTarget::Archive("w1".to_string())),
        other => panic!("unexpected request {:?}", other),
    }
}

#[test]
fn test_switch_to_archive_replaces_news() {
    let mut app = ready_app(vec![make_archive("w1", Some("Week 1"))]);
    app.toggle_sidebar();
    app.selected_index = 2;
    let request = app.fetch_archive("w1");
    complete(&mut app, &request, &["x", "y"], "2025-01-07T00:00:00Z");

    assert_eq!(app.current_archive.as_deref(), Some("w1"));
    assert_eq!(app.news.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(app.last_updated.as_deref(), Some("2025-01-07T00:00:00Z"));
    assert_eq!(app.selected_index, 0);
    assert!(!app.archive_loading);
    assert!(!app.sidebar_open);
    assert_eq!(app.current_feed_label(), "Week 1");
}

#[test]
fn test_switch_back_to_latest_refetches_live_feed() {
    let mut app = ready_app(vec![make_archive("X", None)]);
    let request = app.fetch_archive("X");
    complete(&mut app, &request, &["old"], "2024-12-01T00:00:00Z");
    assert_eq!(app.current_archive.as_deref(), Some("X"));

    let request = app.fetch_archive("latest");
    match &request {
        FetchRequest::Feed { target, .. } => assert_eq!(*target, FeedTarget::Latest),
        other => panic!("unexpected request {:?}", other),
    }
    complete(&mut app, &request, &["new"], "2025-01-15T12:00:00Z");
    assert!(app.current_archive.is_none());
    assert_eq!(app.news[0].id, "new");
    assert_eq!(app.current_feed_label(), "Latest");
}

#[test]
fn test_switch_failure_keeps_previous_news() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    app.toggle_sidebar();
    let request = app.fetch_archive("w1");
    app.apply(FetchOutcome::Feed {
        ticket: feed_ticket(&request),
        target: FeedTarget::Archive("w1".to_string()),
        result: Err(rejected("Archive not found")),
    });

    assert_eq!(app.news.len(), 3);
    assert_eq!(app.news[0].id, "a");
    assert!(app.current_archive.is_none());
    assert_eq!(app.error.as_deref(), Some("Archive not found"));
    assert_eq!(app.load_state, LoadState::Ready);
    assert!(!app.archive_loading);
    assert!(!app.sidebar_open);
}

#[test]
fn test_successful_switch_clears_inline_error() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    let request = app.fetch_archive("w1");
    app.apply(FetchOutcome::Feed {
        ticket: feed_ticket(&request),
        target: FeedTarget::Archive("w1".to_string()),
        result: Err(rejected("Archive not found")),
    });
    let request = app.fetch_archive("w1");
    complete(&mut app, &request, &["x"], "2025-01-07T00:00:00Z");
    assert!(app.error.is_none());
}

#[test]
fn test_superseded_switch_is_discarded() {
    let mut app = ready_app(vec![make_archive("w1", None), make_archive("w2", None)]);
    let first = app.fetch_archive("w1");
    let second = app.fetch_archive("w2");

    complete(&mut app, &first, &["from-w1"], "2025-01-07T00:00:00Z");
    assert!(app.archive_loading, "older response must not clear loading");
    assert_eq!(app.news[0].id, "a");

    complete(&mut app, &second, &["from-w2"], "2025-01-14T00:00:00Z");
    assert!(!app.archive_loading);
    assert_eq!(app.current_archive.as_deref(), Some("w2"));
    assert_eq!(app.news[0].id, "from-w2");
}

#[test]
fn test_refresh_targets_current_feed() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    match app.refresh() {
        FetchRequest::Feed { target, .. } => assert_eq!(target, FeedTarget::Latest),
        other => panic!("unexpected request {:?}", other),
    }
    let request = app.fetch_archive("w1");
    complete(&mut app, &request, &["x"], "2025-01-07T00:00:00Z");
    match app.refresh() {
        FetchRequest::Feed { target, .. } => assert_eq!(target, FeedTarget::Archive("w1".to_string())),
        other => panic!("unexpected request {:?}", other),
    }
}

// --- sidebar ---

#[test]
fn test_toggle_sidebar_flips() {
    let mut app = ready_app(vec![]);
    app.toggle_sidebar();
    assert!(app.sidebar_open);
    app.toggle_sidebar();
    assert!(!app.sidebar_open);
}

#[test]
fn test_toggle_sidebar_does_not_fetch() {
    let mut app = ready_app(vec![]);
    app.toggle_sidebar();
    assert!(!app.archive_loading);
}

#[test]
fn test_sidebar_entries_latest_first() {
    let app = ready_app(vec![make_archive("w1", Some("Week 1")), make_archive("w2", None)]);
    let entries = app.sidebar_entries();
    let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
    assert_eq!(labels, vec!["Latest", "Week 1", "w2"]);
    assert_eq!(entries[0].id, "latest");
    assert!(entries[0].active);
    assert!(!entries[1].active);
}

#[test]
fn test_sidebar_blank_display_name_uses_id() {
    let app = ready_app(vec![make_archive("w1", Some("  "))]);
    assert_eq!(app.sidebar_entries()[1].label, "w1");
}

#[test]
fn test_sidebar_navigation_clamps() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    app.toggle_sidebar();
    assert_eq!(app.sidebar_selected, 0);
    app.sidebar_up();
    assert_eq!(app.sidebar_selected, 0);
    app.sidebar_down();
    app.sidebar_down();
    assert_eq!(app.sidebar_selected, 1);
}

#[test]
fn test_confirm_sidebar_switches_to_highlighted() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    app.toggle_sidebar();
    app.sidebar_down();
    match app.confirm_sidebar() {
        Some(FetchRequest::Feed { target, .. }) => {
            assert_eq!(target, FeedTarget::Archive("w1".to_string()))
        }
        other => panic!("unexpected request {:?}", other),
    }
}

#[test]
fn test_sidebar_opens_on_current_feed() {
    let mut app = ready_app(vec![make_archive("w1", None), make_archive("w2", None)]);
    let request = app.fetch_archive("w2");
    complete(&mut app, &request, &["x"], "2025-01-14T00:00:00Z");
    app.toggle_sidebar();
    assert_eq!(app.sidebar_selected, 2);
    assert!(app.sidebar_entries()[2].active);
}

#[test]
fn test_cards_inactive_while_archive_loads() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    app.fetch_archive("w1");
    assert!(app.selected_news().is_some());
    assert!(app.visible_selection().is_none());
    assert!(app.open_selected().is_none());
    assert!(app.modal.is_none());
}

#[test]
fn test_cards_active_again_after_switch() {
    let mut app = ready_app(vec![make_archive("w1", None)]);
    let request = app.fetch_archive("w1");
    complete(&mut app, &request, &["x"], "2025-01-14T00:00:00Z");
    assert_eq!(app.visible_selection().map(|n| n.id.as_str()), Some("x"));
    assert!(app.open_selected().is_some());
}

mod common;

use ai_news_tui::app::{App, FetchOutcome, LoadState};
use ai_news_tui::ui::{self, sidebar::NO_ARCHIVES};
use common::{make_feed, ready_app, rejected, test_app, unreachable_backend};
use ratatui::{Terminal, backend::TestBackend};

fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn failed_app(message: &str) -> App {
    let mut app = test_app();
    app.begin_initial_load();
    app.apply(FetchOutcome::News(Err(rejected(message))));
    app
}

fn app_without_archives() -> App {
    let mut app = test_app();
    app.begin_initial_load();
    app.apply(FetchOutcome::News(Ok(make_feed(&["a", "b"], None))));
    app.apply(FetchOutcome::ArchiveList(Err(unreachable_backend())));
    app
}

// --- failed view ---

#[test]
fn test_failed_view_shows_server_message() {
    for (width, height) in [(120, 40), (80, 24)] {
        let mut app = failed_app("boom");
        assert_eq!(app.load_state, LoadState::Failed);
        let screen = render(&mut app, width, height);
        assert!(screen.contains("Error: boom"));
        assert!(screen.contains("[R] Try Again"));
    }
}

// --- sidebar ---

#[test]
fn test_sidebar_without_archives_shows_notice() {
    for (width, height) in [(120, 40), (80, 24)] {
        let mut app = app_without_archives();
        app.toggle_sidebar();
        let screen = render(&mut app, width, height);
        assert!(screen.contains("News Timeline"));
        assert!(screen.contains("Latest"));
        assert!(screen.contains(NO_ARCHIVES));
    }
}

#[test]
fn test_sidebar_hidden_until_toggled() {
    let mut app = app_without_archives();
    let screen = render(&mut app, 120, 40);
    assert!(!screen.contains(NO_ARCHIVES));
    assert!(screen.contains("#1 Story a"));
}

// --- grid ---

#[test]
fn test_draw_records_grid_columns() {
    let mut app = ready_app(vec![]);
    render(&mut app, 120, 40);
    assert_eq!(app.grid_columns, 3);
    render(&mut app, 60, 40);
    assert_eq!(app.grid_columns, 1);
}

#[test]
fn test_status_message_in_footer() {
    let mut app = ready_app(vec![]);
    app.toggle_theme();
    assert!(render(&mut app, 120, 40).contains("Theme: light"));
}

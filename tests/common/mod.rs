#![allow(dead_code)]

use ai_news_tui::api::{Analysis, ApiError, ArchiveDescriptor, Importance, NewsFeed, NewsItem};
use ai_news_tui::app::{App, FetchOutcome};
use ai_news_tui::config::Config;

pub fn make_news_item(id: &str, title: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        snippet: format!("{} in brief", title),
        detailed_snippet: format!("{} in more detail.", title),
        date: "2025-01-15".to_string(),
        source: "TechCrunch".to_string(),
        link: format!("https://example.com/{}", id),
        tags: vec!["LLM/Models".to_string()],
    }
}

pub fn make_feed(ids: &[&str], last_updated: Option<&str>) -> NewsFeed {
    NewsFeed {
        items: ids
            .iter()
            .map(|id| make_news_item(id, &format!("Story {}", id)))
            .collect(),
        last_updated: last_updated.map(str::to_string),
    }
}

pub fn make_archive(id: &str, display_name: Option<&str>) -> ArchiveDescriptor {
    ArchiveDescriptor {
        id: id.to_string(),
        display_name: display_name.map(str::to_string),
    }
}

pub fn make_analysis(score: f64) -> Analysis {
    Analysis {
        importance: Some(Importance {
            score: Some(score),
            reasoning: Some("Sets a new bar".to_string()),
        }),
        key_implications: Some(vec!["Cheaper inference".to_string()]),
        industry_impact: Some("Broad".to_string()),
        timeline: Some("6 months".to_string()),
        risks: Some("Misuse".to_string()),
        opportunities: Some("New products".to_string()),
    }
}

pub fn rejected(message: &str) -> ApiError {
    ApiError::Rejected(message.to_string())
}

pub fn unreachable_backend() -> ApiError {
    ApiError::Status {
        status: 503,
        message: "HTTP error! status: 503".to_string(),
    }
}

// Creates an App with default config (no file I/O, no network).
pub fn test_app() -> App {
    App::new(Config::default())
}

/// App that finished its initial load with stories `a`, `b`, `c` and the
/// given archives.
pub fn ready_app(archives: Vec<ArchiveDescriptor>) -> App {
    let mut app = test_app();
    app.begin_initial_load();
    app.apply(FetchOutcome::News(Ok(make_feed(
        &["a", "b", "c"],
        Some("2025-01-15T10:00:00Z"),
    ))));
    app.apply(FetchOutcome::ArchiveList(Ok(archives)));
    app
}

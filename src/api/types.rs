use serde::{Deserialize, Serialize};

/// Archive id that always means the live feed.
pub const LATEST_ARCHIVE_ID: &str = "latest";

/// A ranked story from the digest API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub detailed_snippet: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewsItem {
    /// Card and modal body text; older feeds only carry `snippet`.
    pub fn body(&self) -> &str {
        if self.detailed_snippet.trim().is_empty() {
            &self.snippet
        } else {
            &self.detailed_snippet
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Importance {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// "Why it matters" commentary for one story. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default)]
    pub importance: Option<Importance>,
    #[serde(default)]
    pub key_implications: Option<Vec<String>>,
    #[serde(default)]
    pub industry_impact: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub risks: Option<String>,
    #[serde(default)]
    pub opportunities: Option<String>,
}

impl Analysis {
    pub fn implications(&self) -> &[String] {
        self.key_implications.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveDescriptor {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl ArchiveDescriptor {
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.id,
        }
    }
}

/// A news list together with the time it was captured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFeed {
    pub items: Vec<NewsItem>,
    pub last_updated: Option<String>,
}

// Wire envelopes

#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeHead {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewsResponse {
    #[serde(default)]
    pub data: Vec<NewsItem>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

impl From<NewsResponse> for NewsFeed {
    fn from(r: NewsResponse) -> Self {
        NewsFeed {
            items: r.data,
            last_updated: r.last_updated.or(r.timestamp).filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisResponse {
    #[serde(default)]
    pub analysis: Option<Analysis>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveListResponse {
    #[serde(default)]
    pub data: Option<Vec<ArchiveDescriptor>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveResponse {
    pub data: ArchiveSnapshot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveSnapshot {
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl From<ArchiveSnapshot> for NewsFeed {
    fn from(s: ArchiveSnapshot) -> Self {
        NewsFeed {
            items: s.news,
            last_updated: s.timestamp.filter(|t| !t.is_empty()),
        }
    }
}

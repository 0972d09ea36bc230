use crate::api::{
    Analysis, ApiError, ArchiveDescriptor, LATEST_ARCHIVE_ID, NewsClient, NewsFeed,
};

/// Which feed a switch asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedTarget {
    Latest,
    Archive(String),
}

impl FeedTarget {
    pub fn from_id(id: &str) -> Self {
        if id == LATEST_ARCHIVE_ID {
            FeedTarget::Latest
        } else {
            FeedTarget::Archive(id.to_string())
        }
    }

    /// `None` for the live feed.
    pub fn archive_id(&self) -> Option<&str> {
        match self {
            FeedTarget::Latest => None,
            FeedTarget::Archive(id) => Some(id),
        }
    }
}

/// A network call the app wants made. Produced by state transitions and
/// answered with a [`FetchOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Live feed for the initial load.
    News,
    ArchiveList,
    Analysis { ticket: u64, news_id: String },
    Feed { ticket: u64, target: FeedTarget },
}

#[derive(Debug)]
pub enum FetchOutcome {
    News(Result<NewsFeed, ApiError>),
    ArchiveList(Result<Vec<ArchiveDescriptor>, ApiError>),
    Analysis {
        ticket: u64,
        news_id: String,
        result: Result<Analysis, ApiError>,
    },
    Feed {
        ticket: u64,
        target: FeedTarget,
        result: Result<NewsFeed, ApiError>,
    },
}

/// Run one request against the API.
pub async fn execute(client: &NewsClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::News => FetchOutcome::News(client.fetch_news().await),
        FetchRequest::ArchiveList => FetchOutcome::ArchiveList(client.fetch_archive_list().await),
        FetchRequest::Analysis { ticket, news_id } => {
            let result = client.fetch_analysis(&news_id).await;
            FetchOutcome::Analysis {
                ticket,
                news_id,
                result,
            }
        }
        FetchRequest::Feed { ticket, target } => {
            let result = match &target {
                FeedTarget::Latest => client.fetch_news().await,
                FeedTarget::Archive(id) => client.fetch_archive(id).await,
            };
            FetchOutcome::Feed {
                ticket,
                target,
                result,
            }
        }
    }
}

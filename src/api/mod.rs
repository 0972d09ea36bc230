pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_API_URL, NewsClient};
pub use error::ApiError;
pub use types::{Analysis, ArchiveDescriptor, Importance, LATEST_ARCHIVE_ID, NewsFeed, NewsItem};

use tracing::{debug, error, info, warn};

use super::{App, FetchRequest, LoadState};
use crate::api::{ApiError, ArchiveDescriptor, NewsFeed};

impl App {
    /// Enter `Initializing` and return the live feed and archive list
    /// requests, to be issued together.
    pub fn begin_initial_load(&mut self) -> Vec<FetchRequest> {
        self.load_state = LoadState::Initializing;
        self.error = None;
        vec![FetchRequest::News, FetchRequest::ArchiveList]
    }

    /// Start over after a failed initial load.
    pub fn retry(&mut self) -> Vec<FetchRequest> {
        if self.load_state != LoadState::Failed {
            return Vec::new();
        }
        info!("retrying initial load");
        self.begin_initial_load()
    }

    pub(super) fn apply_initial_news(&mut self, result: Result<NewsFeed, ApiError>) {
        if self.load_state != LoadState::Initializing {
            debug!("ignoring initial feed response outside of initial load");
            return;
        }
        match result {
            Ok(feed) => {
                info!(count = feed.items.len(), "loaded live feed");
                self.install_feed(feed);
                self.current_archive = None;
                self.error = None;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                error!(error = %e, "failed to fetch news");
                self.error = Some(e.to_string());
                self.load_state = LoadState::Failed;
            }
        }
    }

    pub(super) fn apply_archive_list(&mut self, result: Result<Vec<ArchiveDescriptor>, ApiError>) {
        match result {
            Ok(archives) => {
                debug!(count = archives.len(), "loaded archive list");
                self.archives = archives;
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch archives");
                self.archives.clear();
            }
        }
        let max = self.archives.len();
        self.sidebar_selected = self.sidebar_selected.min(max);
    }

    /// Replace the visible list wholesale.
    pub(super) fn install_feed(&mut self, feed: NewsFeed) {
        self.news = feed.items;
        self.last_updated = feed.last_updated;
        self.selected_index = 0;
    }
}

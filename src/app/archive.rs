use tracing::{debug, info, warn};

use super::{App, FeedTarget, FetchRequest};
use crate::api::{ApiError, LATEST_ARCHIVE_ID, NewsFeed};

/// One row of the timeline sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry<'a> {
    pub id: &'a str,
    pub label: &'a str,
    /// This entry is the feed on screen.
    pub active: bool,
}

impl App {
    /// Switch to `archive_id`, or back to the live feed for `"latest"`.
    pub fn fetch_archive(&mut self, archive_id: &str) -> FetchRequest {
        let target = FeedTarget::from_id(archive_id);
        let ticket = self.next_ticket();
        self.archive_loading = true;
        self.feed_ticket = Some(ticket);
        debug!(ticket, ?target, "switching feed");
        FetchRequest::Feed { ticket, target }
    }

    /// Reload whatever feed is on screen.
    pub fn refresh(&mut self) -> FetchRequest {
        let id = self
            .current_archive
            .clone()
            .unwrap_or_else(|| LATEST_ARCHIVE_ID.to_string());
        self.fetch_archive(&id)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if self.sidebar_open {
            self.sidebar_selected = self.current_sidebar_index();
        }
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_selected > 0 {
            self.sidebar_selected -= 1;
        }
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_selected < self.archives.len() {
            self.sidebar_selected += 1;
        }
    }

    /// Switch to the highlighted sidebar entry.
    pub fn confirm_sidebar(&mut self) -> Option<FetchRequest> {
        let id = self
            .sidebar_entries()
            .get(self.sidebar_selected)
            .map(|entry| entry.id.to_string())?;
        Some(self.fetch_archive(&id))
    }

    /// "Latest" first, then the fetched archives in server order.
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry<'_>> {
        let mut entries = Vec::with_capacity(self.archives.len() + 1);
        entries.push(SidebarEntry {
            id: LATEST_ARCHIVE_ID,
            label: "Latest",
            active: self.current_archive.is_none(),
        });
        entries.extend(self.archives.iter().map(|archive| SidebarEntry {
            id: &archive.id,
            label: archive.label(),
            active: self.current_archive.as_deref() == Some(archive.id.as_str()),
        }));
        entries
    }

    /// Label for the feed on screen.
    pub fn current_feed_label(&self) -> &str {
        match &self.current_archive {
            None => "Latest",
            Some(id) => self
                .archives
                .iter()
                .find(|a| &a.id == id)
                .map(|a| a.label())
                .unwrap_or(id.as_str()),
        }
    }

    fn current_sidebar_index(&self) -> usize {
        match &self.current_archive {
            None => 0,
            Some(id) => self
                .archives
                .iter()
                .position(|a| &a.id == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    pub(super) fn apply_feed_switch(
        &mut self,
        ticket: u64,
        target: FeedTarget,
        result: Result<NewsFeed, ApiError>,
    ) {
        if self.feed_ticket != Some(ticket) {
            debug!(ticket, ?target, "discarding superseded feed response");
            return;
        }
        match result {
            Ok(feed) => {
                info!(count = feed.items.len(), ?target, "switched feed");
                self.install_feed(feed);
                self.current_archive = target.archive_id().map(str::to_string);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, ?target, "failed to fetch archive");
                self.error = Some(e.to_string());
            }
        }
        self.feed_ticket = None;
        self.archive_loading = false;
        self.sidebar_open = false;
    }
}

use tracing::{debug, warn};

use super::{App, FetchRequest};
use crate::api::{Analysis, ApiError, NewsItem};

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Loading,
    Ready(Analysis),
    /// Fetch failed or the server had nothing yet; rendered as "coming soon".
    Unavailable,
}

/// The open detail modal. Owns the selected story so an open modal always
/// has one.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModal {
    pub item: NewsItem,
    pub analysis: AnalysisState,
}

impl App {
    /// Open the modal on `item` and ask for its analysis. Any analysis on
    /// screen is dropped first.
    pub fn select_news(&mut self, item: NewsItem) -> FetchRequest {
        let ticket = self.next_ticket();
        let news_id = item.id.clone();
        self.modal = Some(DetailModal {
            item,
            analysis: AnalysisState::Loading,
        });
        self.detail_scroll = 0;
        self.analysis_ticket = Some(ticket);
        debug!(ticket, %news_id, "requesting analysis");
        FetchRequest::Analysis { ticket, news_id }
    }

    /// Open the card under the cursor.
    pub fn open_selected(&mut self) -> Option<FetchRequest> {
        let item = self.visible_selection()?.clone();
        Some(self.select_news(item))
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.detail_scroll = 0;
        self.analysis_ticket = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.modal.as_ref().map(|m| &m.item)
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self.modal.as_ref().map(|m| &m.analysis) {
            Some(AnalysisState::Ready(analysis)) => Some(analysis),
            _ => None,
        }
    }

    pub fn analysis_loading(&self) -> bool {
        matches!(
            self.modal.as_ref().map(|m| &m.analysis),
            Some(AnalysisState::Loading)
        )
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll += 1;
    }

    pub(super) fn apply_analysis(
        &mut self,
        ticket: u64,
        news_id: &str,
        result: Result<Analysis, ApiError>,
    ) {
        if self.analysis_ticket != Some(ticket) {
            debug!(ticket, news_id, "discarding stale analysis response");
            return;
        }
        let Some(modal) = self.modal.as_mut().filter(|m| m.item.id == news_id) else {
            debug!(ticket, news_id, "discarding analysis for a story no longer open");
            return;
        };
        modal.analysis = match result {
            Ok(analysis) => AnalysisState::Ready(analysis),
            Err(e) => {
                warn!(error = %e, news_id, "failed to fetch analysis");
                AnalysisState::Unavailable
            }
        };
        self.analysis_ticket = None;
    }
}

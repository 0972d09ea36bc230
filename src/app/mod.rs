mod analysis;
mod archive;
mod fetch;
mod news;

pub use analysis::{AnalysisState, DetailModal};
pub use archive::SidebarEntry;
pub use fetch::{FeedTarget, FetchOutcome, FetchRequest, execute};

use crate::api::{ArchiveDescriptor, NewsItem};
use crate::config::Config;
use crate::theme::Theme;

/// Redraw ticks a status message stays in the footer.
pub const STATUS_TICKS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Initializing,
    Ready,
    Failed,
}

/// Which part of the screen receives keys. Derived from state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Normal,
    Sidebar,
    Detail,
    Help,
}

pub struct App {
    pub config: Config,
    pub load_state: LoadState,
    /// Last feed error. Fatal while `Failed`, shown inline while `Ready`.
    pub error: Option<String>,
    pub news: Vec<NewsItem>,
    pub last_updated: Option<String>,
    pub selected_index: usize,
    /// Card columns on screen, kept current by the renderer.
    pub grid_columns: usize,
    pub modal: Option<DetailModal>,
    pub detail_scroll: usize,
    pub sidebar_open: bool,
    pub sidebar_selected: usize,
    pub archives: Vec<ArchiveDescriptor>,
    /// `None` while showing the live feed.
    pub current_archive: Option<String>,
    pub archive_loading: bool,
    pub help_open: bool,
    pub status_message: Option<String>,
    status_ticks: u8,
    ticket_seq: u64,
    analysis_ticket: Option<u64>,
    feed_ticket: Option<u64>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            load_state: LoadState::Initializing,
            error: None,
            news: Vec::new(),
            last_updated: None,
            selected_index: 0,
            grid_columns: 1,
            modal: None,
            detail_scroll: 0,
            sidebar_open: false,
            sidebar_selected: 0,
            archives: Vec::new(),
            current_archive: None,
            archive_loading: false,
            help_open: false,
            status_message: None,
            status_ticks: 0,
            ticket_seq: 0,
            analysis_ticket: None,
            feed_ticket: None,
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::News(result) => self.apply_initial_news(result),
            FetchOutcome::ArchiveList(result) => self.apply_archive_list(result),
            FetchOutcome::Analysis {
                ticket,
                news_id,
                result,
            } => self.apply_analysis(ticket, &news_id, result),
            FetchOutcome::Feed {
                ticket,
                target,
                result,
            } => self.apply_feed_switch(ticket, target, result),
        }
    }

    pub fn focus(&self) -> Focus {
        if self.help_open {
            Focus::Help
        } else if self.modal.is_some() {
            Focus::Detail
        } else if self.sidebar_open {
            Focus::Sidebar
        } else {
            Focus::Normal
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Initializing
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme.toggle();
        self.set_status(format!("Theme: {}", self.config.theme.label()));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Advance one redraw tick; expires the status message.
    pub fn tick(&mut self) {
        if self.status_message.is_none() {
            return;
        }
        self.status_ticks = self.status_ticks.saturating_sub(1);
        if self.status_ticks == 0 {
            self.status_message = None;
        }
    }

    fn row_step(&self) -> usize {
        self.grid_columns.max(1)
    }

    /// One row up the card grid.
    pub fn move_up(&mut self) {
        let step = self.row_step();
        if self.selected_index >= step {
            self.selected_index -= step;
        }
    }

    /// One row down the card grid. Stays put when no card sits below.
    pub fn move_down(&mut self) {
        let step = self.row_step();
        if self.selected_index + step < self.news.len() {
            self.selected_index += step;
        }
    }

    pub fn move_left(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_right(&mut self) {
        let len = self.news.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn selected_news(&self) -> Option<&NewsItem> {
        self.news.get(self.selected_index)
    }

    /// Card under the cursor, unless an archive load hides the grid.
    pub fn visible_selection(&self) -> Option<&NewsItem> {
        if self.archive_loading {
            return None;
        }
        self.selected_news()
    }

    /// Link of the story in the open modal, else the one under the cursor.
    pub fn selected_link(&self) -> Option<&str> {
        let item = match &self.modal {
            Some(modal) => Some(&modal.item),
            None => self.selected_news(),
        }?;
        let link = item.link.trim();
        (!link.is_empty()).then_some(link)
    }

    pub fn show_help(&mut self) {
        self.help_open = true;
    }

    pub fn close_help(&mut self) {
        self.help_open = false;
    }

    fn next_ticket(&mut self) -> u64 {
        self.ticket_seq += 1;
        self.ticket_seq
    }
}

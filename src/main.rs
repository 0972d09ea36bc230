use ai_news_tui::api::NewsClient;
use ai_news_tui::app::{self, App, FetchOutcome, FetchRequest, Focus, LoadState};
use ai_news_tui::config::Config;
use ai_news_tui::ui::{
    self,
    card::{CardAction, CardEvent, NewsCard},
    formatters::truncate_str,
};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ai-news-tui")]
#[command(about = "Terminal reader for the AI news digest", long_about = None)]
struct Cli {
    /// Base URL of the digest API
    #[arg(long, env = "AI_NEWS_API_URL")]
    api_url: Option<String>,

    /// Write debug output to the log file
    #[arg(short, long)]
    verbose: bool,
}

/// Runs fetches off the UI loop and mails the outcomes back.
struct Fetcher {
    client: NewsClient,
    tx: mpsc::UnboundedSender<FetchOutcome>,
}

impl Fetcher {
    fn spawn(&self, request: FetchRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = app::execute(&client, request).await;
            // Receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });
    }

    fn spawn_all(&self, requests: impl IntoIterator<Item = FetchRequest>) {
        for request in requests {
            self.spawn(request);
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let path = Config::log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("AI_NEWS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::load()?.with_api_override(cli.api_url);
    let client = NewsClient::new(&config.api_url, config.request_timeout())
        .context("failed to build HTTP client")?;
    info!(api_url = %client.base_url(), theme = config.theme.label(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, client: NewsClient) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let fetcher = Fetcher { client, tx };
    fetcher.spawn_all(app.begin_initial_load());

    let mut events = EventStream::new();
    // Keeps the clock and "last updated" text moving.
    let mut tick = tokio::time::interval(Duration::from_secs(1));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        tokio::select! {
            Some(outcome) = rx.recv() => app.apply(outcome),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key, &fetcher) {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
            _ = tick.tick() => app.tick(),
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key(app: &mut App, key: KeyEvent, fetcher: &Fetcher) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.focus() {
        Focus::Help => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
            _ => {}
        },
        Focus::Detail => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.close_modal(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
            KeyCode::Char('o') => {
                if let Some(url) = app.selected_link().map(str::to_string) {
                    open_link(app, &url);
                }
            }
            KeyCode::Char('q') => return true,
            _ => {}
        },
        Focus::Sidebar => match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::Char('b') => app.close_sidebar(),
            KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
            KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
            KeyCode::Enter => {
                if let Some(request) = app.confirm_sidebar() {
                    fetcher.spawn(request);
                }
            }
            KeyCode::Char('t') => toggle_theme(app),
            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('q') => return true,
            _ => {}
        },
        Focus::Normal => match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('t') => toggle_theme(app),
            KeyCode::Char('R') => fetcher.spawn_all(app.retry()),
            _ if app.load_state != LoadState::Ready => {}
            KeyCode::Char('r') => fetcher.spawn(app.refresh()),
            KeyCode::Tab | KeyCode::Char('b') => app.toggle_sidebar(),
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Left | KeyCode::Char('h') => app.move_left(),
            KeyCode::Right | KeyCode::Char('l') => app.move_right(),
            KeyCode::Enter | KeyCode::Char('d') => activate_card(app, CardAction::Details, fetcher),
            KeyCode::Char('o') => activate_card(app, CardAction::FollowLink, fetcher),
            _ => {}
        },
    }
    false
}

fn activate_card(app: &mut App, action: CardAction, fetcher: &Fetcher) {
    let Some(item) = app.visible_selection().cloned() else {
        return;
    };
    let palette = app.theme().palette();
    match NewsCard::new(&item, app.selected_index, palette).activate(action) {
        CardEvent::Select(news) => fetcher.spawn(app.select_news(news.clone())),
        CardEvent::OpenLink(url) => open_link(app, url),
        CardEvent::NoLink => app.set_status("This story has no link"),
    }
}

fn open_link(app: &mut App, url: &str) {
    match open::that_detached(url) {
        Ok(()) => {
            info!(url, "opened link");
            app.set_status(format!("Opened {}", truncate_str(url, 40)));
        }
        Err(e) => {
            warn!(url, error = %e, "failed to open browser");
            app.set_status(format!("Could not open browser: {}", e));
        }
    }
}

fn toggle_theme(app: &mut App) {
    app.toggle_theme();
    if let Err(e) = app.config.save() {
        warn!(error = %e, "failed to save theme");
    }
}

pub mod card;
pub mod detail;
pub mod formatters;
mod modals;
pub mod sidebar;

use crate::app::{App, Focus, LoadState};
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use formatters::{format_relative_time, next_update_countdown};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let palette = app.theme().palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app, &palette);

    match app.load_state {
        LoadState::Initializing => draw_notice(
            frame,
            chunks[1],
            vec![Line::from(Span::styled(
                "Loading latest AI news...",
                Style::default().fg(palette.accent),
            ))],
            &palette,
        ),
        LoadState::Failed => {
            let message = app.error.as_deref().unwrap_or("Failed to fetch news");
            draw_notice(
                frame,
                chunks[1],
                vec![
                    Line::from(Span::styled(
                        format!("⚠ Error: {}", message),
                        Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled("[R] Try Again", Style::default().fg(palette.highlight))),
                ],
                &palette,
            )
        }
        LoadState::Ready => draw_body(frame, chunks[1], app, &palette),
    }

    draw_footer(frame, chunks[2], app, &palette);

    if app.modal.is_some() {
        detail::draw_news_detail(frame, app, &palette);
    }
    if app.help_open {
        modals::draw_help(frame, &palette);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let status = if app.is_loading() || app.archive_loading {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", chrono::Local::now().format("%H:%M:%S"))
    };

    let feed = match &app.current_archive {
        None => Span::styled("Latest", Style::default().fg(palette.success).add_modifier(Modifier::BOLD)),
        Some(_) => Span::styled(
            format!("Archive: {}", app.current_feed_label()),
            Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
        ),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " AI News Digest ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(palette.muted)),
        feed,
        Span::styled(" ", Style::default()),
        Span::styled(status, Style::default().fg(palette.muted)),
        Span::styled(
            format!("  {} ", app.theme().toggle_icon()),
            Style::default().fg(palette.warning),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.border)));

    frame.render_widget(header, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, palette: &Palette) {
    let height = lines.len() as u16 + 2;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect {
        y: top,
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().style(Style::default().bg(palette.bg))),
        rect,
    );
}

fn draw_body(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let (sidebar_area, grid_area) = if app.sidebar_open {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar::SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(area);
        (Some(cols[0]), cols[1])
    } else {
        (None, area)
    };

    if let Some(sidebar_area) = sidebar_area {
        sidebar::draw_sidebar(frame, sidebar_area, app, palette);
    }

    let mut grid_area = grid_area;
    if let Some(error) = &app.error {
        let banner = Rect { height: 1, ..grid_area };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" ⚠ {}", error),
                Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
            )),
            banner,
        );
        grid_area.y += 1;
        grid_area.height = grid_area.height.saturating_sub(1);
    }

    if app.archive_loading {
        draw_notice(
            frame,
            grid_area,
            vec![Line::from(Span::styled("Loading archive...", Style::default().fg(palette.accent)))],
            palette,
        );
    } else if app.news.is_empty() {
        draw_notice(
            frame,
            grid_area,
            vec![Line::from(Span::styled("No stories in this feed.", Style::default().fg(palette.muted)))],
            palette,
        );
    } else {
        app.grid_columns = card::grid_columns(grid_area.width);
        card::draw_cards(frame, grid_area, &app.news, app.selected_index, *palette);
    }
}

fn key_hints(app: &App) -> &'static str {
    match app.focus() {
        Focus::Help => " [?/Enter/Esc] Close help ",
        Focus::Detail => " [o] Browser [↑↓] Scroll [Esc] Close ",
        Focus::Sidebar => " [↑↓] Move [Enter] Show [b/Esc] Close timeline ",
        Focus::Normal => match app.load_state {
            LoadState::Failed => " [R] Try again [q] Quit ",
            LoadState::Initializing => " [q] Quit ",
            LoadState::Ready => " [Enter] Details [o] Browser [b] Timeline [r] Reload [t] Theme [?] Help [q] Quit ",
        },
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = Vec::new();
    if app.load_state == LoadState::Ready {
        let updated = app
            .last_updated
            .as_deref()
            .map(format_relative_time)
            .unwrap_or_else(|| "recently".to_string());
        spans.push(Span::styled(
            format!(" Last updated {}", updated),
            Style::default().fg(palette.success),
        ));
        if app.current_archive.is_none() {
            spans.push(Span::styled(
                format!(" · next in {}", next_update_countdown()),
                Style::default().fg(palette.muted),
            ));
        }
        spans.push(Span::raw(" |"));
    }
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(format!(" {}", msg), Style::default().fg(palette.warning)));
        spans.push(Span::raw(" |"));
    }
    spans.push(Span::styled(key_hints(app), Style::default().fg(palette.muted)));

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.border)));
    frame.render_widget(footer, area);
}

use crate::app::App;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

pub const SIDEBAR_WIDTH: u16 = 30;
pub const NO_ARCHIVES: &str = "No archives available yet";

/// "News Timeline": the live feed plus fetched archives.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" News Timeline ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.highlight))
        .style(Style::default().bg(palette.bg).fg(palette.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = app.sidebar_entries();
    let mut items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let dot_style = if entry.active {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.muted)
            };
            let label_style = if entry.active {
                Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", dot_style),
                Span::styled(entry.label.to_string(), label_style),
            ]))
        })
        .collect();

    if app.archives.is_empty() {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Span::styled(
            NO_ARCHIVES,
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    let list = List::new(items)
        .highlight_style(Style::default().bg(palette.selected_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.sidebar_selected.min(entries.len().saturating_sub(1))));
    frame.render_stateful_widget(list, inner, &mut state);

    if app.archive_loading && inner.height > 2 {
        let hint_area = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Span::styled("Loading archive...", Style::default().fg(palette.warning)))
                .wrap(Wrap { trim: true }),
            hint_area,
        );
    }
}

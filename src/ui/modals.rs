use super::centered_rect;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn help_section(title: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("─── {} ", title), Style::default().fg(palette.warning)),
        Span::styled("───────────────────────────", Style::default().fg(palette.muted)),
    ])
}

fn help_binding(key: &str, desc: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(palette.highlight)),
        Span::styled(desc.to_string(), Style::default().fg(palette.fg)),
    ])
}

fn help_content(palette: &Palette) -> Vec<Line<'static>> {
    let p = palette;
    vec![
        help_section("General", p),
        help_binding("q", "Quit", p),
        help_binding("?", "Show this help", p),
        help_binding("t", "Toggle light / dark theme", p),
        help_binding("r", "Reload the feed on screen", p),
        help_binding("R", "Try again after a failed load", p),
        Line::from(""),
        help_section("Stories", p),
        help_binding("↓ / j", "Row below", p),
        help_binding("↑ / k", "Row above", p),
        help_binding("← → / h l", "Previous / next story", p),
        help_binding("Enter", "Details & why it matters", p),
        help_binding("o", "Open article in browser", p),
        Line::from(""),
        help_section("Timeline", p),
        help_binding("b / Tab", "Open / close the timeline", p),
        help_binding("↑↓ / jk", "Move in the timeline", p),
        help_binding("Enter", "Show the highlighted archive", p),
        Line::from(""),
        help_section("Details", p),
        help_binding("↑↓ / jk", "Scroll", p),
        help_binding("o", "Open article in browser", p),
        help_binding("Esc", "Close", p),
        Line::from(""),
        Line::from(Span::styled(
            "  [?/Enter/Esc] Close",
            Style::default().fg(p.muted),
        )),
    ]
}

pub fn draw_help(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.bg));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content(palette)).alignment(Alignment::Left),
        inner_area,
    );
}

use super::centered_rect;
use super::formatters::{format_date, word_wrap};
use crate::api::{Analysis, NewsItem};
use crate::app::{AnalysisState, App};
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub const COMING_SOON: &str = "AI analysis coming soon...";
pub const ANALYSIS_LOADING: &str = "Loading AI analysis...";

fn divider(width: usize, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width), Style::default().fg(palette.muted)))
}

fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ))
}

fn wrapped(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> + use<> {
    word_wrap(text, width)
        .into_iter()
        .map(move |line| Line::from(Span::styled(line, style)))
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

fn placeholder(title: &str, subtitle: &str, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(wrapped(title, width, Style::default().fg(palette.fg)));
    lines.extend(wrapped(subtitle, width, Style::default().fg(palette.muted)));
    lines
}

/// Analysis body. Sections the server left out are skipped.
pub fn analysis_lines(analysis: &Analysis, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.fg);
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(importance) = &analysis.importance {
        if let Some(score) = importance.score {
            lines.push(Line::from(Span::styled(
                format!("Importance: {}/10", format_score(score)),
                Style::default().fg(palette.warning).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(reasoning) = present(&importance.reasoning) {
            lines.extend(wrapped(reasoning, width, text));
        }
    }

    let implications = analysis.implications();
    if !implications.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Key Implications:", palette));
        for implication in implications {
            let mut bullet = word_wrap(implication, width.saturating_sub(2)).into_iter();
            if let Some(first) = bullet.next() {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(palette.accent)),
                    Span::styled(first, text),
                ]));
            }
            for rest in bullet {
                lines.push(Line::from(Span::styled(format!("  {}", rest), text)));
            }
        }
    }

    let sections = [
        ("Industry Impact:", &analysis.industry_impact, true),
        ("Timeline:", &analysis.timeline, false),
        ("Risks:", &analysis.risks, true),
        ("Opportunities:", &analysis.opportunities, false),
    ];
    for (title, field, divide_before) in sections {
        let Some(body) = present(field) else {
            continue;
        };
        if divide_before && !lines.is_empty() {
            lines.push(Line::from(""));
            lines.push(divider(width, palette));
        }
        lines.push(Line::from(""));
        lines.push(heading(title, palette));
        lines.extend(wrapped(body, width, text));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No analysis details available.",
            Style::default().fg(palette.muted),
        )));
    }
    lines
}

/// Everything the modal shows, before scrolling.
pub fn detail_lines(
    item: &NewsItem,
    analysis: &AnalysisState,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.extend(wrapped(
        &item.title,
        width,
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(""));
    lines.extend(wrapped(item.body(), width, Style::default().fg(palette.fg)));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(format!("Date: {}", format_date(&item.date)), Style::default().fg(palette.muted)),
        Span::styled("   ", Style::default()),
        Span::styled(format!("Source: {}", item.source), Style::default().fg(palette.muted)),
    ]));

    let link = item.link.trim();
    if !link.is_empty() {
        let display = if link.chars().count() > width {
            let mut s: String = link.chars().take(width.saturating_sub(1)).collect();
            s.push('…');
            s
        } else {
            link.to_string()
        };
        lines.push(Line::from(Span::styled(
            display,
            Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(divider(width, palette));
    lines.push(heading("Why This Matters", palette));

    match analysis {
        AnalysisState::Loading => lines.extend(placeholder(
            ANALYSIS_LOADING,
            "We're analyzing the long-term implications and importance of this news",
            width,
            palette,
        )),
        AnalysisState::Unavailable => lines.extend(placeholder(
            COMING_SOON,
            "We'll analyze the long-term implications and importance of this news",
            width,
            palette,
        )),
        AnalysisState::Ready(analysis) => {
            lines.push(Line::from(""));
            lines.extend(analysis_lines(analysis, width, palette));
        }
    }
    lines
}

pub fn draw_news_detail(frame: &mut Frame, app: &mut App, palette: &Palette) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };

    let area = centered_rect(75, 80, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(format!(" {} ", modal.item.source))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.highlight))
        .style(Style::default().bg(palette.bg).fg(palette.fg));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let body_area = chunks[0];
    let footer_area = chunks[1];
    let body_height = body_area.height as usize;

    let all_lines = detail_lines(&modal.item, &modal.analysis, body_area.width as usize, palette);
    let has_link = !modal.item.link.trim().is_empty();

    let max_scroll = all_lines.len().saturating_sub(body_height);
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let visible: Vec<Line> = all_lines
        .into_iter()
        .skip(app.detail_scroll)
        .take(body_height)
        .collect();
    frame.render_widget(Paragraph::new(visible), body_area);

    let key = Style::default().fg(palette.highlight);
    let hint = Style::default().fg(palette.muted);
    let mut footer = Vec::new();
    if has_link {
        footer.push(Span::styled("[o] ", key));
        footer.push(Span::styled("read full article  ", hint));
    }
    footer.extend([
        Span::styled("[↑/↓] ", key),
        Span::styled("scroll  ", hint),
        Span::styled("[Esc] ", key),
        Span::styled("close", hint),
    ]);
    frame.render_widget(Paragraph::new(Line::from(footer)), footer_area);
}

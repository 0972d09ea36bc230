use crate::api::NewsItem;
use crate::theme::Palette;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::formatters::{clamp_lines, truncate_str};

/// Lines inside the card border. Every card is padded to this height.
pub const CARD_INNER_LINES: usize = 9;
pub const CARD_HEIGHT: u16 = CARD_INNER_LINES as u16 + 2;
pub const CARD_MIN_WIDTH: u16 = 40;

const TITLE_LINES: usize = 2;
const BODY_LINES: usize = 3;
pub const DETAILS_LABEL: &str = "Details & Why It Matters →";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    LlmModels,
    TechInfrastructure,
    ResearchInnovation,
    BusinessIndustry,
    PolicyRegulation,
    SecurityPrivacy,
    Applications,
    Performance,
}

impl TagCategory {
    pub const ALL: [TagCategory; 8] = [
        TagCategory::LlmModels,
        TagCategory::TechInfrastructure,
        TagCategory::ResearchInnovation,
        TagCategory::BusinessIndustry,
        TagCategory::PolicyRegulation,
        TagCategory::SecurityPrivacy,
        TagCategory::Applications,
        TagCategory::Performance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TagCategory::LlmModels => "LLM/Models",
            TagCategory::TechInfrastructure => "Tech/Infrastructure",
            TagCategory::ResearchInnovation => "Research/Innovation",
            TagCategory::BusinessIndustry => "Business/Industry",
            TagCategory::PolicyRegulation => "Policy/Regulation",
            TagCategory::SecurityPrivacy => "Security/Privacy",
            TagCategory::Applications => "Applications",
            TagCategory::Performance => "Performance",
        }
    }

    pub fn from_label(tag: &str) -> Option<TagCategory> {
        Self::ALL.into_iter().find(|c| c.label() == tag)
    }

    /// (foreground, background) for the chip.
    fn colors(&self, dark: bool) -> (Color, Color) {
        let (light_fg, dark_fg, dark_bg) = match self {
            TagCategory::LlmModels => (Color::Rgb(30, 64, 175), Color::Rgb(147, 197, 253), Color::Rgb(23, 37, 84)),
            TagCategory::TechInfrastructure => (Color::Rgb(22, 101, 52), Color::Rgb(134, 239, 172), Color::Rgb(20, 46, 30)),
            TagCategory::ResearchInnovation => (Color::Rgb(107, 33, 168), Color::Rgb(216, 180, 254), Color::Rgb(46, 16, 76)),
            TagCategory::BusinessIndustry => (Color::Rgb(154, 52, 18), Color::Rgb(253, 186, 116), Color::Rgb(67, 20, 7)),
            TagCategory::PolicyRegulation => (Color::Rgb(153, 27, 27), Color::Rgb(252, 165, 165), Color::Rgb(69, 10, 10)),
            TagCategory::SecurityPrivacy => (Color::Rgb(157, 23, 77), Color::Rgb(249, 168, 212), Color::Rgb(80, 7, 36)),
            TagCategory::Applications => (Color::Rgb(55, 48, 163), Color::Rgb(165, 180, 252), Color::Rgb(30, 27, 75)),
            TagCategory::Performance => (Color::Rgb(21, 94, 117), Color::Rgb(103, 232, 249), Color::Rgb(8, 51, 68)),
        };
        if dark {
            (dark_fg, dark_bg)
        } else {
            (light_fg, Color::Rgb(241, 245, 249))
        }
    }
}

/// Chip style for a tag. Unknown tags get a neutral style.
pub fn tag_style(tag: &str, palette: &Palette) -> Style {
    let (fg, bg) = match TagCategory::from_label(tag) {
        Some(category) => category.colors(palette.is_dark()),
        None => fallback_tag_colors(palette),
    };
    Style::default().fg(fg).bg(bg)
}

fn fallback_tag_colors(palette: &Palette) -> (Color, Color) {
    if palette.is_dark() {
        (Color::Rgb(209, 213, 219), Color::Rgb(55, 65, 81))
    } else {
        (Color::Rgb(55, 65, 81), Color::Rgb(229, 231, 235))
    }
}

/// What the user did to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// The title link.
    FollowLink,
    /// The "Details & Why It Matters" affordance.
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent<'a> {
    OpenLink(&'a str),
    Select(&'a NewsItem),
    /// Link activated on a story without a URL.
    NoLink,
}

/// One story card. Holds no state of its own.
pub struct NewsCard<'a> {
    item: &'a NewsItem,
    index: usize,
    selected: bool,
    palette: Palette,
}

impl<'a> NewsCard<'a> {
    pub fn new(item: &'a NewsItem, index: usize, palette: Palette) -> Self {
        Self {
            item,
            index,
            selected: false,
            palette,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn rank(&self) -> usize {
        self.index + 1
    }

    pub fn activate(&self, action: CardAction) -> CardEvent<'a> {
        match action {
            CardAction::FollowLink => match self.item.link.trim() {
                "" => CardEvent::NoLink,
                link => CardEvent::OpenLink(link),
            },
            CardAction::Details => CardEvent::Select(self.item),
        }
    }

    /// Card content for an inner width of `width`, always
    /// [`CARD_INNER_LINES`] long.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.palette;
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(CARD_INNER_LINES);

        // Title, prefixed with the rank
        let rank = format!("#{}", self.rank());
        let title_width = width.saturating_sub(rank.chars().count() + 1);
        let title_style = Style::default()
            .fg(p.fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let mut title = clamp_lines(&self.item.title, title_width, TITLE_LINES).into_iter();
        lines.push(Line::from(vec![
            Span::styled(rank.clone(), Style::default().fg(p.accent).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(title.next().unwrap_or_default(), title_style),
        ]));
        for rest in title {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(rank.chars().count() + 1)),
                Span::styled(rest, title_style),
            ]));
        }
        pad_to(&mut lines, TITLE_LINES);

        lines.push(self.tag_line(width));

        lines.push(Line::from(Span::styled(
            format!("◷ {}", truncate_str(&self.item.date, width.saturating_sub(2))),
            Style::default().fg(p.muted),
        )));

        let body_start = lines.len();
        for line in clamp_lines(self.item.body(), width, BODY_LINES) {
            lines.push(Line::from(Span::styled(line, Style::default().fg(p.fg))));
        }
        pad_to(&mut lines, body_start + BODY_LINES);

        let details_style = if self.selected {
            Style::default().fg(p.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.accent)
        };
        lines.push(Line::from(Span::styled(DETAILS_LABEL, details_style)));

        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(p.accent)),
            Span::styled(
                truncate_str(&self.item.source, width.saturating_sub(2)),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
        ]));

        lines.truncate(CARD_INNER_LINES);
        lines
    }

    fn tag_line(&self, width: usize) -> Line<'static> {
        let mut spans = Vec::new();
        let mut used = 0;
        for tag in &self.item.tags {
            let chip = format!(" {} ", tag);
            let len = chip.chars().count() + 1;
            if used + len > width && used > 0 {
                spans.push(Span::styled("…", Style::default().fg(self.palette.muted)));
                break;
            }
            spans.push(Span::styled(chip, tag_style(tag, &self.palette)));
            spans.push(Span::raw(" "));
            used += len;
        }
        Line::from(spans)
    }
}

fn pad_to(lines: &mut Vec<Line<'static>>, len: usize) {
    while lines.len() < len {
        lines.push(Line::from(""));
    }
}

impl Widget for NewsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.palette;
        let border_style = if self.selected {
            Style::default().fg(p.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style)
            .style(Style::default().bg(if self.selected { p.selected_bg } else { p.bg }));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width as usize)).render(inner, buf);
    }
}

/// Columns that fit in `width`, capped at three.
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_MIN_WIDTH) as usize).clamp(1, 3)
}

/// Lay the cards out row-major and scroll so the selected card is visible.
pub fn draw_cards(frame: &mut Frame, area: Rect, items: &[NewsItem], selected: usize, palette: Palette) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let columns = grid_columns(area.width);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let card_width = area.width / columns as u16;

    for row in 0..visible_rows {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            let Some(item) = items.get(index) else {
                return;
            };
            let y = area.y + row as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                return;
            }
            let rect = Rect {
                x: area.x + col as u16 * card_width,
                y,
                width: card_width,
                height,
            };
            let card = NewsCard::new(item, index, palette).selected(index == selected);
            frame.render_widget(card, rect);
        }
    }
}

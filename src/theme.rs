use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Header indicator, showing the theme a toggle would switch to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                theme: *self,
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::LightBlue,
                border: Color::Gray,
                highlight: Color::Cyan,
                selected_bg: Color::Rgb(30, 45, 75),
                warning: Color::Yellow,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
            Theme::Light => Palette {
                theme: *self,
                bg: Color::White,
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
                highlight: Color::Blue,
                selected_bg: Color::Rgb(220, 230, 250),
                warning: Color::Rgb(180, 110, 0),
                error: Color::Red,
                success: Color::Green,
            },
        }
    }
}

/// Colors every renderer draws with. Built from the current [`Theme`] and
/// passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

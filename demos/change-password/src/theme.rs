//! Light/dark chrome colors, toggled at runtime

use clap::ValueEnum;
use ratatui::style::Color;

/// Color scheme for the app chrome (title, status, help bar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Title and accent color.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    /// Dimmed text (help bar).
    pub fn dim(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    /// Success status color.
    pub fn success(self) -> Color {
        match self {
            Theme::Dark => Color::Green,
            Theme::Light => Color::LightGreen,
        }
    }

    /// Failure status color.
    pub fn failure(self) -> Color {
        Color::Red
    }
}

//! Core types shared by the taja banner crates.

use ratatui::style::Color;

/// Default number of stars scattered by the star field.
pub const DEFAULT_STAR_COUNT: u16 = 100;

/// Color theme for the banner text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Green,
    Cyan,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(&self) -> Self {
        match self {
            ColorTheme::Green => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Green,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Green => Color::Green,
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// Resolve a theme from its config-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "green" => Some(ColorTheme::Green),
            "cyan" => Some(ColorTheme::Cyan),
            "white" => Some(ColorTheme::White),
            "magenta" => Some(ColorTheme::Magenta),
            "yellow" => Some(ColorTheme::Yellow),
            "red" => Some(ColorTheme::Red),
            "blue" => Some(ColorTheme::Blue),
            _ => None,
        }
    }
}

/// Backdrop layer settings, resolved once at startup.
///
/// A layer that is disabled here never starts; nothing re-checks the
/// toggles while the app runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropSettings {
    /// Whether the falling-leaf layer spawns.
    pub leaves: bool,
    /// Whether the star field is built.
    pub stars: bool,
    /// Number of stars to scatter.
    pub star_count: u16,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            leaves: true,
            stars: true,
            star_count: DEFAULT_STAR_COUNT,
        }
    }
}

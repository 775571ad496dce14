//! Palette for the viewer: a deep-space night theme and a light day theme.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme, color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::custom("Cosmic Night".to_string(), NIGHT_PALETTE),
        }
    }
}

const NIGHT_PALETTE: iced::theme::Palette = iced::theme::Palette {
    background: color!(0x070b14),
    text: color!(0xe6e9f2),
    primary: color!(0x7aa2ff),
    success: color!(0x5fd3a0),
    danger: color!(0xff6b6b),
};

/// Accent used for the progress bar and active indicator.
pub fn accent(theme: &IcedTheme) -> Color {
    theme.palette().primary
}

/// Dimmed text colour for secondary copy.
pub fn muted(theme: &IcedTheme) -> Color {
    let text = theme.palette().text;
    Color { a: 0.65, ..text }
}

/// Scrim drawn over hero imagery so the copy stays legible.
pub fn hero_scrim() -> Color {
    Color::from_rgba(0.02, 0.03, 0.08, 0.55)
}

// SPDX-License-Identifier: MPL-2.0
//! Light and dark theming.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_primary: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,

    /// Translucent card background ("glass" panels).
    pub glass: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            glass: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            glass: Color {
                a: opacity::OVERLAY_HOVER,
                ..Color::from_rgb(0.15, 0.15, 0.15)
            },
        }
    }
}

/// Which of the two themes is active. Every session starts light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    /// Key of the toggle button label, which names the mode it switches to.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-switch-to-dark",
            ThemeMode::Dark => "theme-switch-to-light",
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ThemeMode;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent card behind every section ("glass").
///
/// Derived from the active `Theme` background so it stays readable in both
/// modes.
pub fn glass(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Hero banner, tinted with the brand color of `mode`.
pub fn hero(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    let colors = mode.colors();
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.glass)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Pill around a skill name.
pub fn chip(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text) = if is_light {
        (palette::PRIMARY_100, palette::PRIMARY_800)
    } else {
        (palette::PRIMARY_800, palette::PRIMARY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card holding a project or a gallery image.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

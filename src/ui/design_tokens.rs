// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the palette, spacing, sizing and type scales shared by
//! every view.
//!
//! ```
//! use folio::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let glass = Color {
//!     a: opacity::SURFACE,
//!     ..palette::WHITE
//! };
//! let padding = spacing::MD; // 16px
//! ```

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.12);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand indigo, lightest to darkest.
    pub const PRIMARY_100: Color = Color::from_rgb(0.88, 0.9, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.5, 0.55, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const PRIMARY_600: Color = Color::from_rgb(0.31, 0.27, 0.9);
    pub const PRIMARY_800: Color = Color::from_rgb(0.22, 0.19, 0.64);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Frosted cards and the hero banner.
    pub const SURFACE: f32 = 0.85;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Readable width of the centered content column.
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const PROJECT_CARD_MIN_HEIGHT: f32 = 160.0;
    pub const FORM_MESSAGE_HEIGHT: f32 = 120.0;
    /// Marker dot of a journey milestone.
    pub const TIMELINE_DOT: f32 = 12.0;
}

pub mod typography {
    /// Hero headline
    pub const DISPLAY: f32 = 40.0;
    /// Panel headings
    pub const TITLE_LG: f32 = 30.0;
    /// Section headings, owner name
    pub const TITLE_MD: f32 = 20.0;
    /// Card titles
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Badges, dates, file details
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    /// Pill shape
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 18.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

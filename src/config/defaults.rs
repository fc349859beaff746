// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Gallery**: Grid columns and thumbnail height bounds
//! - **Picker**: File dialog filter

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1100;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 780;

/// Smallest window the layout still fits in.
pub const MIN_WINDOW_WIDTH: u32 = 720;

pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnails per gallery row.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 3;

pub const MIN_GALLERY_COLUMNS: u16 = 1;

pub const MAX_GALLERY_COLUMNS: u16 = 6;

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: u16 = 180;

pub const MIN_THUMBNAIL_HEIGHT: u16 = 64;

pub const MAX_THUMBNAIL_HEIGHT: u16 = 512;

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Extensions offered by the image picker. The gallery does not re-check
/// content; this is only a hint for the dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

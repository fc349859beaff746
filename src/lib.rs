// SPDX-License-Identifier: MPL-2.0
//! `folio` presents a personal portfolio in a native window built with the
//! Iced GUI framework.
//!
//! Three pieces of state drive the interface: a light/dark [`ThemeStore`]
//! with change notification, a [`PanelSelector`] choosing between the
//! overview, journey and gallery panels, and a session-only
//! [`GalleryStore`] of locally selected images. The portfolio text itself
//! is static data from [`content`].
//!
//! [`ThemeStore`]: ui::state::ThemeStore
//! [`PanelSelector`]: ui::state::PanelSelector
//! [`GalleryStore`]: gallery::GalleryStore

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod ui;

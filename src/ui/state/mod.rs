// SPDX-License-Identifier: MPL-2.0
//! UI state stores
//!
//! The stateful core behind the portfolio views, kept apart from the `App`
//! struct. Each store owns its state and is mutated from one place in
//! `App::update`.
//!
//! - [`theme`] - Process-wide light/dark flag with change notification
//! - [`panel`] - Active content panel and its derived layout
//! - [`memo`] - Single-entry cache for pure derivations

pub mod memo;
pub mod panel;
pub mod theme;

pub use memo::Memo;
pub use panel::{Panel, PanelLayout, PanelSelector, Section};
pub use theme::{ThemeSource, ThemeStore};

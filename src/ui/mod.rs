// SPDX-License-Identifier: MPL-2.0
//! User interface components and state.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` and returns an `Element` of its own `Message`, which
//! `App` maps into the top-level message.
//!
//! # Views
//!
//! - [`navbar`] - Owner name and panel tabs
//! - [`hero`] - Headline and the theme toggle
//! - [`overview`] - About, skills and projects
//! - [`journey`] - Career timeline
//! - [`contact`] - Contact form (captures input, sends nothing)
//! - [`gallery`] - Session image gallery
//! - [`footer`] - Social links and résumé
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Theme and panel stores
//! - [`notifications`] - Toasts
//! - [`section`] - Titled card wrapper
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Palette, spacing, sizing and type scales
//! - [`theming`] - Light/dark modes and their color schemes

pub mod contact;
pub mod design_tokens;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod journey;
pub mod navbar;
pub mod notifications;
pub mod overview;
pub mod section;
pub mod state;
pub mod styles;
pub mod theming;

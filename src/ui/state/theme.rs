// SPDX-License-Identifier: MPL-2.0
//! Theme store.
//!
//! Holds the light/dark flag for the whole application. Views read the
//! current mode; the single toggle action flips it and notifies every
//! subscriber through a `watch` channel.
//!
//! The iced views need no receiver: they re-render from `App::view` after
//! each update. The channel serves observers outside that loop, such as
//! async tasks and integration tests.

use crate::ui::theming::ThemeMode;
use tokio::sync::watch;

/// Read and toggle access to the active theme.
pub trait ThemeSource {
    /// Current mode. Pure read.
    fn theme(&self) -> ThemeMode;

    /// Flips the mode and returns the new one.
    fn toggle(&mut self) -> ThemeMode;
}

/// Observable owner of the theme flag. Starts light.
#[derive(Debug)]
pub struct ThemeStore {
    sender: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(ThemeMode::default());
        Self { sender }
    }

    /// Receiver that observes every change made through [`ThemeSource::toggle`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeSource for ThemeStore {
    fn theme(&self) -> ThemeMode {
        *self.sender.borrow()
    }

    fn toggle(&mut self) -> ThemeMode {
        // send_modify updates the value even when nobody is subscribed.
        self.sender.send_modify(|mode| *mode = mode.toggled());
        let mode = self.theme();
        tracing::info!(?mode, "theme toggled");
        mode
    }
}

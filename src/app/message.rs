// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{PickToken, Selection};
use crate::ui::notifications;
use crate::ui::state::Panel;
use crate::ui::{contact, footer, gallery, hero, navbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the rest come from subscriptions and finished tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    Contact(contact::Message),
    Footer(footer::Message),
    Notification(notifications::NotificationMessage),
    /// Files were read and are ready to become a gallery batch. `token` is
    /// set when the batch came from the picker dialog.
    SelectionRead {
        token: Option<PickToken>,
        selection: Selection,
    },
    /// A file was dropped on the window. A multi-file drop sends one per file.
    FileDropped(PathBuf),
    /// The files of the last drop have all arrived.
    DropSettled,
    /// Keyboard shortcut for a panel tab.
    PanelShortcut(Panel),
    /// Keyboard shortcut for the theme toggle.
    ThemeShortcut,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional portfolio content file replacing the embedded content.
    /// Takes precedence over `[content] path` in the settings.
    pub content: Option<PathBuf>,
    /// Panel shown at startup.
    pub panel: Panel,
    /// Images preloaded as the first gallery batch.
    pub image_paths: Vec<PathBuf>,
}

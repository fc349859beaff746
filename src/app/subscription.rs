// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are turned into top-level messages
//! here. Keys already captured by a widget (typing in the contact form) are
//! left alone.

use super::Message;
use crate::ui::state::Panel;
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// File drops and keyboard shortcuts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let Event::Window(window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        match (event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
                event::Status::Ignored,
            ) => shortcut(&key, modifiers),
            _ => None,
        }
    })
}

/// Maps a key press to its shortcut: `1`-`3` pick a panel, Ctrl/Cmd+T
/// toggles the theme.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let Key::Character(character) = key else {
        return None;
    };

    if modifiers.command() {
        return character
            .eq_ignore_ascii_case("t")
            .then_some(Message::ThemeShortcut);
    }
    if modifiers.is_empty() {
        return Panel::from_shortcut(character.as_str()).map(Message::PanelShortcut);
    }
    None
}

/// Fires once shortly after a drop, when every file of the gesture has
/// been reported.
pub fn create_drop_subscription(drop_pending: bool) -> Subscription<Message> {
    if drop_pending {
        time::every(Duration::from_millis(50)).map(|_| Message::DropSettled)
    } else {
        Subscription::none()
    }
}

/// Ticks only while there is a notification to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(200)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

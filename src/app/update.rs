// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Every store mutation happens synchronously in one of these handlers. The
//! only asynchronous work (picker dialog and file reads) runs as a `Task`
//! and comes back as a single [`Message::SelectionRead`].

use super::Message;
use crate::content::PortfolioContent;
use crate::gallery::{
    self, DropGesture, FilePicker, GalleryStore, PickToken, Selection, SelectionOrigin,
};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::{Panel, PanelSelector, ThemeSource, ThemeStore};
use crate::ui::{contact, footer, gallery as gallery_view, hero, navbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;

/// Id of the scrollable holding the panel content.
pub const CONTENT_SCROLLABLE_ID: &str = "portfolio-content";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a mut ThemeStore,
    pub panels: &'a mut PanelSelector,
    pub gallery: &'a mut GalleryStore,
    pub picker: &'a mut FilePicker,
    pub drops: &'a mut DropGesture,
    pub contact: &'a mut contact::State,
    pub content: &'a PortfolioContent,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::SelectPanel(panel) => select_panel(ctx, panel),
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match message {
        hero::Message::ToggleTheme => toggle_theme(ctx),
        hero::Message::ViewProjects => {
            ctx.panels.select(Panel::Overview);
            // Projects close the overview, so the page end shows them above
            // the footer.
            operation::snap_to(
                Id::new(CONTENT_SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 1.0 },
            )
        }
    }
}

pub fn select_panel(ctx: &mut UpdateContext<'_>, panel: Panel) -> Task<Message> {
    ctx.panels.select(panel);
    operation::snap_to(
        Id::new(CONTENT_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

pub fn toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.theme.toggle();
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match message {
        gallery_view::Message::Upload => open_picker(ctx),
        gallery_view::Message::Remove(key) => {
            if !ctx.gallery.remove(key) {
                tracing::debug!(%key, "remove for unknown gallery record ignored");
            }
            Task::none()
        }
        gallery_view::Message::Clear => {
            let removed = ctx.gallery.clear();
            if removed > 0 {
                ctx.notifications.push(
                    Notification::info("notification-gallery-cleared")
                        .with_arg("count", removed.to_string()),
                );
            }
            Task::none()
        }
    }
}

/// Opens the image picker unless one is already open.
pub fn open_picker(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(token) = ctx.picker.begin() else {
        tracing::debug!("picker already open");
        return Task::none();
    };

    let title = ctx.i18n.tr("gallery-dialog-title");
    let filter_name = ctx.i18n.tr("gallery-dialog-filter");
    Task::perform(gallery::selection::pick_images(title, filter_name), move |selection| {
        Message::SelectionRead {
            token: Some(token),
            selection,
        }
    })
}

/// Reads `paths` off the update loop and reports them as one batch.
pub fn read_paths(paths: Vec<PathBuf>, origin: SelectionOrigin) -> Task<Message> {
    Task::perform(gallery::selection::read_selection(paths, origin), |selection| {
        Message::SelectionRead {
            token: None,
            selection,
        }
    })
}

/// Collects an image path into the current drop gesture. Other files are
/// rejected with a warning.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !gallery::selection::has_image_extension(&path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        ctx.notifications.push(
            Notification::warning("notification-drop-not-image").with_arg("name", name),
        );
        return Task::none();
    }
    ctx.drops.push(path);
    Task::none()
}

/// Reads the collected drop as a single batch, in drop order.
pub fn finish_drop(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.drops.take() {
        Some(paths) => {
            tracing::debug!(files = paths.len(), "drop gesture finished");
            read_paths(paths, SelectionOrigin::Drop)
        }
        None => Task::none(),
    }
}

/// Adds a read selection to the gallery, then clears the picker so the same
/// files can be chosen again.
pub fn handle_selection_read(
    ctx: &mut UpdateContext<'_>,
    token: Option<PickToken>,
    selection: Selection,
) -> Task<Message> {
    let outcome = ctx.gallery.add_images(selection);

    if let Some(token) = token {
        if !ctx.picker.finish(token) {
            tracing::debug!("stale picker token");
        }
    }

    if outcome.skipped > 0 {
        ctx.notifications.push(
            Notification::warning("notification-files-skipped")
                .with_arg("count", outcome.skipped.to_string()),
        );
    }

    if outcome.added > 0 {
        select_panel(ctx, Panel::Gallery)
    } else {
        Task::none()
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match ctx.contact.update(message) {
        contact::Event::None => {}
        contact::Event::SendRequested {
            category,
            message_chars,
        } => {
            tracing::info!(?category, message_chars, "contact form not sent: no backend");
            ctx.notifications
                .push(Notification::info("notification-contact-not-sent"));
        }
    }
    Task::none()
}

pub fn handle_footer_message(ctx: &mut UpdateContext<'_>, message: &footer::Message) -> Task<Message> {
    let Some(request) = footer::resolve(message, &ctx.content.socials, &ctx.content.resume) else {
        return Task::none();
    };

    let notification = match message {
        footer::Message::CopyResume => Notification::info("notification-resume-copied"),
        footer::Message::CopySocial(_) => {
            Notification::info("notification-link-copied").with_arg("label", request.label)
        }
    };
    ctx.notifications.push(notification);

    tracing::debug!(reference = %request.reference, "copying reference to clipboard");
    iced::clipboard::write(request.reference)
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio stores.
//!
//! The `App` struct owns one [`ThemeStore`], one [`PanelSelector`] and one
//! [`GalleryStore`] and hands them to the views by reference. Every message
//! is routed through [`update`] so that state changes stay in one place.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::CONTENT_SCROLLABLE_ID;

use crate::config::{self, Config, GalleryConfig};
use crate::content::{self, PortfolioContent};
use crate::error::Result;
use crate::gallery::{DropGesture, FilePicker, GalleryStore, SelectionOrigin};
use crate::i18n::fluent::I18n;
use crate::ui::contact;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::{PanelSelector, ThemeSource, ThemeStore};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Everything resolved before the window opens.
#[derive(Debug, Clone)]
pub struct Boot {
    pub flags: Flags,
    pub config: Config,
    /// Translation key of a settings problem to report once the UI is up.
    pub config_warning: Option<String>,
    pub content: PortfolioContent,
    pub content_warning: Option<String>,
}

impl Boot {
    /// Loads settings and portfolio content for `flags`.
    ///
    /// # Errors
    ///
    /// Fails only when the embedded content cannot be loaded.
    pub fn load(flags: Flags) -> Result<Self> {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let content_path = flags.content.clone().or_else(|| config.content.path.clone());
        let (content, content_warning) = content::load(content_path.as_deref())?;

        Ok(Self {
            flags,
            config,
            config_warning,
            content,
            content_warning,
        })
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: ThemeStore,
    panels: PanelSelector,
    gallery: GalleryStore,
    picker: FilePicker,
    drops: DropGesture,
    contact: contact::State,
    content: PortfolioContent,
    gallery_config: GalleryConfig,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.theme())
            .field("panel", &self.panels.active())
            .field("images", &self.gallery.len())
            .field("picker_open", &self.picker.is_open())
            .finish()
    }
}

/// Builds the window settings from the `[window]` section.
fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the embedded content is unusable or the window
/// cannot be created.
pub fn run(flags: Flags) -> Result<()> {
    let boot_state = Boot::load(flags)?;
    let window = window_settings(&boot_state.config);

    // iced 0.14 requires a Fn boot function.
    let boot = move || App::new(boot_state.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state and, when images were passed on the
    /// command line, starts reading them as the first gallery batch.
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            flags,
            config,
            config_warning,
            content,
            content_warning,
        } = boot;

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            theme: ThemeStore::new(),
            panels: PanelSelector::new(flags.panel),
            gallery: GalleryStore::new(),
            picker: FilePicker::new(),
            drops: DropGesture::new(),
            contact: contact::State::new(),
            content,
            gallery_config: config.gallery,
            notifications: notifications::Manager::new(),
        };

        for key in [config_warning, content_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(key));
        }

        tracing::info!(
            panel = %app.panels.active(),
            preload = flags.image_paths.len(),
            "portfolio ready"
        );

        let task = if flags.image_paths.is_empty() {
            Task::none()
        } else {
            update::read_paths(flags.image_paths, SelectionOrigin::CommandLine)
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", self.content.hero.name.as_str())])
    }

    fn theme(&self) -> Theme {
        self.theme.theme().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let drop_sub = subscription::create_drop_subscription(self.drops.is_pending());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, drop_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            theme: &mut self.theme,
            panels: &mut self.panels,
            gallery: &mut self.gallery,
            picker: &mut self.picker,
            drops: &mut self.drops,
            contact: &mut self.contact,
            content: &self.content,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, &footer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SelectionRead { token, selection } => {
                update::handle_selection_read(&mut ctx, token, selection)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::DropSettled => update::finish_drop(&mut ctx),
            Message::PanelShortcut(panel) => update::select_panel(&mut ctx, panel),
            Message::ThemeShortcut => update::toggle_theme(&mut ctx),
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme.theme(),
            layout: self.panels.layout(),
            gallery: &self.gallery,
            picker_open: self.picker.is_open(),
            contact: &self.contact,
            content: &self.content,
            gallery_config: &self.gallery_config,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{SelectedFile, Selection};
    use crate::ui::state::Panel;
    use crate::ui::theming::ThemeMode;
    use crate::ui::{footer, gallery, hero, navbar};
    use std::path::PathBuf;

    fn boot(flags: Flags) -> Boot {
        Boot {
            flags,
            config: Config::default(),
            config_warning: None,
            content: PortfolioContent::embedded().expect("embedded content"),
            content_warning: None,
        }
    }

    fn app() -> App {
        App::new(boot(Flags::default())).0
    }

    fn selection(names: &[&str]) -> Selection {
        Selection::new(
            SelectionOrigin::Picker,
            names
                .iter()
                .map(|name| SelectedFile::in_memory(*name, None, vec![1, 2, 3]))
                .collect(),
        )
    }

    #[test]
    fn starts_light_on_the_requested_panel() {
        let (app, _task) = App::new(boot(Flags {
            panel: Panel::Journey,
            ..Flags::default()
        }));
        assert_eq!(app.theme.theme(), ThemeMode::Light);
        assert_eq!(app.panels.active(), Panel::Journey);
        assert!(app.gallery.is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn boot_warnings_become_toasts() {
        let mut state = boot(Flags::default());
        state.config_warning = Some("notification-config-load-error".into());
        state.content_warning = Some(content::LOAD_WARNING_KEY.into());

        let (app, _task) = App::new(state);
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[test]
    fn title_names_the_owner() {
        let app = app();
        assert!(app.title().contains("Alex Carter"));
    }

    #[test]
    fn theme_toggles_from_hero_and_shortcut() {
        let mut app = app();
        let _ = app.update(Message::Hero(hero::Message::ToggleTheme));
        assert_eq!(app.theme.theme(), ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::ThemeShortcut);
        assert_eq!(app.theme.theme(), ThemeMode::Light);
    }

    #[test]
    fn navbar_and_shortcuts_select_panels() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SelectPanel(Panel::Gallery)));
        assert_eq!(app.panels.active(), Panel::Gallery);

        let _ = app.update(Message::PanelShortcut(Panel::Journey));
        assert_eq!(app.panels.active(), Panel::Journey);

        let _ = app.update(Message::Hero(hero::Message::ViewProjects));
        assert_eq!(app.panels.active(), Panel::Overview);
    }

    #[test]
    fn upload_opens_a_single_picker() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::Upload));
        assert!(app.picker.is_open());

        // A second click while the dialog is up is ignored.
        let _ = app.update(Message::Gallery(gallery::Message::Upload));
        assert!(app.picker.is_open());
    }

    #[test]
    fn picker_result_adds_batch_and_resets_picker() {
        let mut app = app();
        let token = app.picker.begin();
        assert!(token.is_some());

        let _ = app.update(Message::SelectionRead {
            token,
            selection: selection(&["a.png", "b.png"]),
        });

        assert_eq!(app.gallery.len(), 2);
        assert!(!app.picker.is_open());
        assert_eq!(app.panels.active(), Panel::Gallery);
    }

    #[test]
    fn cancelled_picker_changes_nothing_but_the_picker() {
        let mut app = app();
        let token = app.picker.begin();

        let _ = app.update(Message::SelectionRead {
            token,
            selection: Selection::empty(SelectionOrigin::Picker),
        });

        assert!(app.gallery.is_empty());
        assert!(!app.picker.is_open());
        assert_eq!(app.panels.active(), Panel::Overview);
    }

    #[test]
    fn unreadable_files_are_reported() {
        let mut app = app();
        let mut batch = selection(&["ok.png"]);
        batch.files.push(SelectedFile::unreadable(
            "gone.png",
            crate::error::Error::Io("vanished".into()),
        ));

        let _ = app.update(Message::SelectionRead {
            token: None,
            selection: batch,
        });

        assert_eq!(app.gallery.len(), 1);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn remove_and_clear_update_the_gallery() {
        let mut app = app();
        let _ = app.update(Message::SelectionRead {
            token: None,
            selection: selection(&["a.png", "b.png", "c.png"]),
        });
        let first = app.gallery.images()[0].key();

        let _ = app.update(Message::Gallery(gallery::Message::Remove(first)));
        assert_eq!(app.gallery.len(), 2);
        assert!(app.gallery.get(first).is_none());

        let _ = app.update(Message::Gallery(gallery::Message::Clear));
        assert!(app.gallery.is_empty());
        assert_eq!(app.gallery.ledger().live(), 0);
    }

    #[test]
    fn dropping_a_non_image_warns() {
        let mut app = app();
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/notes.txt")));
        assert!(app.gallery.is_empty());
        assert!(!app.drops.is_pending());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn a_multi_file_drop_becomes_one_batch_in_drop_order() {
        let mut app = app();
        let dropped: Vec<PathBuf> = ["a.png", "b.png", "c.png"]
            .iter()
            .map(|name| PathBuf::from("/tmp").join(name))
            .collect();

        for path in &dropped {
            let _ = app.update(Message::FileDropped(path.clone()));
        }
        assert!(app.gallery.is_empty());
        assert_eq!(app.drops.paths(), dropped.as_slice());

        let _ = app.update(Message::DropSettled);
        assert!(!app.drops.is_pending());

        // The read of the whole gesture comes back as one selection.
        let mut batch = selection(&["a.png", "b.png", "c.png"]);
        batch.origin = SelectionOrigin::Drop;
        let _ = app.update(Message::SelectionRead {
            token: None,
            selection: batch,
        });

        let names: Vec<&str> = app.gallery.images().iter().map(|image| image.name()).collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
        assert_eq!(app.panels.active(), Panel::Gallery);
    }

    #[test]
    fn settling_without_a_drop_does_nothing() {
        let mut app = app();
        let _ = app.update(Message::DropSettled);
        assert!(app.gallery.is_empty());
        assert!(!app.drops.is_pending());
    }

    #[test]
    fn view_projects_lands_on_the_overview_with_projects_last() {
        let mut app = app();
        let _ = app.update(Message::PanelShortcut(Panel::Journey));
        let _ = app.update(Message::Hero(hero::Message::ViewProjects));

        assert_eq!(app.panels.active(), Panel::Overview);
        assert_eq!(
            app.panels.layout().sections.last(),
            Some(&crate::ui::state::Section::Projects)
        );
    }

    #[test]
    fn copying_the_resume_confirms() {
        let mut app = app();
        let _ = app.update(Message::Footer(footer::Message::CopyResume));
        assert_eq!(app.notifications.visible_count(), 1);

        // Stale index: nothing to copy, nothing to confirm.
        let _ = app.update(Message::Footer(footer::Message::CopySocial(99)));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn contact_send_explains_nothing_was_sent() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::NameChanged("Ada".into())));
        let _ = app.update(Message::Contact(contact::Message::Send));
        assert_eq!(app.contact.name(), "Ada");
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn every_panel_renders() {
        let mut app = app();
        let _ = app.update(Message::SelectionRead {
            token: None,
            selection: selection(&["a.png"]),
        });
        for panel in Panel::ALL {
            let _ = app.update(Message::PanelShortcut(panel));
            let _element = app.view();
        }
    }
}

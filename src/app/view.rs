// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Navbar on top, then a scrollable column with the hero, the active panel's
//! heading and its sections, and the footer. Toasts float above everything.

use super::update::CONTENT_SCROLLABLE_ID;
use super::Message;
use crate::config::GalleryConfig;
use crate::content::PortfolioContent;
use crate::gallery::GalleryStore;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::state::{PanelLayout, Section};
use crate::ui::theming::ThemeMode;
use crate::ui::{contact, footer, gallery, hero, journey, navbar, overview};
use iced::widget::{Column, Container, Id, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub layout: &'a PanelLayout,
    pub gallery: &'a GalleryStore,
    pub picker_open: bool,
    pub contact: &'a contact::State,
    pub content: &'a PortfolioContent,
    pub gallery_config: &'a GalleryConfig,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        owner: &ctx.content.hero.name,
        active: ctx.layout.panel,
    })
    .map(Message::Navbar);

    let hero = hero::view(hero::ViewContext {
        i18n: ctx.i18n,
        hero: &ctx.content.hero,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Hero);

    let heading = Text::new(ctx.i18n.tr(ctx.layout.heading_key)).size(typography::TITLE_LG);

    let page = ctx
        .layout
        .sections
        .iter()
        .fold(
            Column::new()
                .spacing(spacing::LG)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .push(hero)
                .push(heading),
            |page, section| page.push(view_section(&ctx, *section)),
        )
        .push(
            footer::view(footer::ViewContext {
                i18n: ctx.i18n,
                socials: &ctx.content.socials,
                resume: &ctx.content.resume,
            })
            .map(Message::Footer),
        );

    let scrollable = Scrollable::new(
        Container::new(page)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing::LG),
    )
    .id(Id::new(CONTENT_SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Column::new().push(navbar).push(scrollable);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let content = ctx.content;
    match section {
        Section::About => overview::about(ctx.i18n, &content.about),
        Section::Skills => overview::skills(ctx.i18n, &content.skills),
        Section::Projects => overview::projects(ctx.i18n, &content.projects),
        Section::Milestones => journey::milestones(ctx.i18n, &content.milestones),
        Section::Contact => ctx.contact.view(ctx.i18n).map(Message::Contact),
        Section::Gallery => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            store: ctx.gallery,
            picker_open: ctx.picker_open,
            columns: ctx.gallery_config.columns(),
            thumbnail_height: ctx.gallery_config.thumbnail_height(),
        })
        .map(Message::Gallery),
    }
}

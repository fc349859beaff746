// SPDX-License-Identifier: MPL-2.0
//! Hero banner with the theme toggle.

use crate::content::Hero;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: &'a Hero,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
    ViewProjects,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.theme_mode.colors();

    let eyebrow = Text::new(ctx.hero.eyebrow.as_str())
        .size(typography::CAPTION)
        .color(colors.brand_primary);

    let headline = Column::new()
        .push(Text::new(ctx.hero.headline.as_str()).size(typography::DISPLAY))
        .push(
            Text::new(ctx.hero.highlight.as_str())
                .size(typography::DISPLAY)
                .color(colors.brand_primary),
        );

    let intro = Text::new(ctx.hero.intro.as_str())
        .size(typography::BODY_LG)
        .color(colors.text_secondary);

    let toggle = button(Text::new(ctx.i18n.tr(ctx.theme_mode.toggle_label_key())))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let projects = button(Text::new(ctx.i18n.tr("hero-view-projects")))
        .on_press(Message::ViewProjects)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::link);

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(projects);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(eyebrow)
        .push(headline)
        .push(intro)
        .push(actions);

    Container::new(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(styles::container::hero(ctx.theme_mode))
        .into()
}

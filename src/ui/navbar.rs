// SPDX-License-Identifier: MPL-2.0
//! Top bar: owner name and the panel tabs.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::Panel;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub owner: &'a str,
    pub active: Panel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectPanel(Panel),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = Panel::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, panel| row.push(tab(&ctx, panel)),
    );

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(Text::new(ctx.owner).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(tabs);

    container(bar)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn tab<'a>(ctx: &ViewContext<'a>, panel: Panel) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(panel.label_key())).size(typography::BODY);
    let style = if panel == ctx.active {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(label)
        .on_press(Message::SelectPanel(panel))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

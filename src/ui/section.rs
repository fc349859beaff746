// SPDX-License-Identifier: MPL-2.0
//! Titled card shared by every content section.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, Column, Container, Text};
use iced::{Element, Length};

/// Wraps `content` in a glass card under `title`.
pub fn build_section<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::glass)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Career timeline.

use crate::content::Milestone;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::section::build_section;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Background, Border, Element, Length, Theme};

pub fn milestones<'a, M: 'a>(i18n: &I18n, milestones: &'a [Milestone]) -> Element<'a, M> {
    let timeline = milestones.iter().fold(
        Column::new().spacing(spacing::LG),
        |column, milestone| column.push(milestone_row(milestone)),
    );

    build_section(i18n.tr("section-milestones"), timeline.into())
}

fn milestone_row<'a, M: 'a>(milestone: &'a Milestone) -> Element<'a, M> {
    let dot = Container::new(Text::new(""))
        .width(Length::Fixed(sizing::TIMELINE_DOT))
        .height(Length::Fixed(sizing::TIMELINE_DOT))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(milestone.period.as_str()).size(typography::CAPTION))
        .push(Text::new(milestone.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(milestone.description.as_str()).size(typography::BODY));

    Row::new()
        .spacing(spacing::MD)
        .push(Container::new(dot).padding([spacing::XXS, 0.0]))
        .push(text)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PortfolioContent;

    #[derive(Debug, Clone)]
    enum Never {}

    #[test]
    fn timeline_renders() {
        let i18n = I18n::default();
        let content = PortfolioContent::embedded().expect("embedded content");
        let _element: Element<'_, Never> = milestones(&i18n, &content.milestones);
    }
}

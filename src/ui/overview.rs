// SPDX-License-Identifier: MPL-2.0
//! About, skills and featured projects.

use crate::content::{About, Project};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::build_section;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

/// Projects per row of the project grid.
const PROJECT_COLUMNS: usize = 3;

pub fn about<'a, M: 'a>(i18n: &I18n, about: &'a About) -> Element<'a, M> {
    build_section(
        i18n.tr("section-about"),
        Text::new(about.text.as_str()).size(typography::BODY_LG).into(),
    )
}

pub fn skills<'a, M: 'a>(i18n: &I18n, skills: &'a [String]) -> Element<'a, M> {
    let chips = skills.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, skill| {
            row.push(
                Container::new(Text::new(skill.as_str()).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::chip),
            )
        },
    );

    build_section(i18n.tr("section-skills"), chips.wrap().into())
}

pub fn projects<'a, M: 'a>(i18n: &I18n, projects: &'a [Project]) -> Element<'a, M> {
    let grid = projects.chunks(PROJECT_COLUMNS).fold(
        Column::new().spacing(spacing::MD),
        |grid, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, project| {
                row.push(project_card(project))
            });
            grid.push(row)
        },
    );

    build_section(i18n.tr("section-projects"), grid.into())
}

fn project_card<'a, M: 'a>(project: &'a Project) -> Element<'a, M> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(project.description.as_str()).size(typography::BODY))
        .push(Text::new(project.stack.as_str()).size(typography::CAPTION));

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(sizing::PROJECT_CARD_MIN_HEIGHT))
        .style(styles::container::card)
        .into()
}

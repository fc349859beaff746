// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! The form only captures what the visitor types. Sending is not wired to
//! any service: the parent logs the request and tells the visitor nothing
//! was sent.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::build_section;
use crate::ui::styles;
use iced::widget::{button, pick_list, text_editor, text_input, Column, Text};
use iced::{Element, Length};
use std::fmt;

/// Kind of project a visitor asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    WebApp,
    MobileApp,
    DesignSystem,
    Consulting,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::WebApp,
        ProjectCategory::MobileApp,
        ProjectCategory::DesignSystem,
        ProjectCategory::Consulting,
        ProjectCategory::Other,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "contact-category-web-app",
            ProjectCategory::MobileApp => "contact-category-mobile-app",
            ProjectCategory::DesignSystem => "contact-category-design-system",
            ProjectCategory::Consulting => "contact-category-consulting",
            ProjectCategory::Other => "contact-category-other",
        }
    }
}

/// Localized entry of the category picker.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CategoryOption {
    category: ProjectCategory,
    label: String,
}

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Field values typed so far.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    category: Option<ProjectCategory>,
    message: text_editor::Content,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    CategorySelected(ProjectCategory),
    MessageEdited(text_editor::Action),
    Send,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The visitor pressed "Send". Carries the category and message length
    /// for logging; field contents stay in the form.
    SendRequested {
        category: Option<ProjectCategory>,
        message_chars: usize,
    },
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Event::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                Event::None
            }
            Message::CategorySelected(category) => {
                self.category = Some(category);
                Event::None
            }
            Message::MessageEdited(action) => {
                self.message.perform(action);
                Event::None
            }
            Message::Send => Event::SendRequested {
                category: self.category,
                message_chars: self.message_text().trim().chars().count(),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn category(&self) -> Option<ProjectCategory> {
        self.category
    }

    #[must_use]
    pub fn message_text(&self) -> String {
        self.message.text()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let options: Vec<CategoryOption> = ProjectCategory::ALL
            .into_iter()
            .map(|category| CategoryOption {
                category,
                label: i18n.tr(category.label_key()),
            })
            .collect();
        let selected = options
            .iter()
            .find(|option| Some(option.category) == self.category)
            .cloned();

        let name = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input(Message::NameChanged)
            .padding(spacing::XS);

        let email = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::XS);

        let category = pick_list(options, selected, |option| {
            Message::CategorySelected(option.category)
        })
        .placeholder(i18n.tr("contact-category-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill);

        let message = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .on_action(Message::MessageEdited)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::FORM_MESSAGE_HEIGHT));

        let send = button(Text::new(i18n.tr("contact-send-button")))
            .on_press(Message::Send)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        let form = Column::new()
            .spacing(spacing::SM)
            .push(field(i18n.tr("contact-name-label"), name.into()))
            .push(field(i18n.tr("contact-email-label"), email.into()))
            .push(field(i18n.tr("contact-category-label"), category.into()))
            .push(field(i18n.tr("contact-message-label"), message.into()))
            .push(send)
            .push(Text::new(i18n.tr("contact-offline-hint")).size(typography::CAPTION));

        build_section(i18n.tr("section-contact"), form.into())
    }
}

fn field<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(input)
        .into()
}

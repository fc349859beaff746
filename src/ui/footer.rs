// SPDX-License-Identifier: MPL-2.0
//! Footer with the social links and the résumé reference.
//!
//! Both are references to things outside the application. Clicking one asks
//! the parent to copy the reference to the clipboard.

use crate::content::{Resume, SocialLink};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub socials: &'a [SocialLink],
    pub resume: &'a Resume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Index into the social links.
    CopySocial(usize),
    CopyResume,
}

/// What the parent should copy, and how to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub label: String,
    pub reference: String,
}

/// Resolves a footer message against the links it was rendered from.
/// Returns `None` for an index that no longer exists.
#[must_use]
pub fn resolve(message: &Message, socials: &[SocialLink], resume: &Resume) -> Option<CopyRequest> {
    match message {
        Message::CopySocial(index) => socials.get(*index).map(|link| CopyRequest {
            label: link.label.clone(),
            reference: link.url.clone(),
        }),
        Message::CopyResume => Some(CopyRequest {
            label: String::new(),
            reference: resume.reference.clone(),
        }),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let links = ctx.socials.iter().enumerate().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, (index, link)| {
            row.push(
                button(Text::new(link.label.as_str()).size(typography::BODY_SM))
                    .on_press(Message::CopySocial(index))
                    .style(styles::button::link),
            )
        },
    );

    let resume = button(Text::new(ctx.i18n.tr("footer-resume-button")).size(typography::BODY_SM))
        .on_press(Message::CopyResume)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(resume);

    container(bar)
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socials() -> Vec<SocialLink> {
        vec![SocialLink {
            label: "GitHub".into(),
            url: "https://github.com/example".into(),
        }]
    }

    fn resume() -> Resume {
        Resume {
            reference: "cv.pdf".into(),
        }
    }

    #[test]
    fn social_resolves_to_its_url() {
        let request = resolve(&Message::CopySocial(0), &socials(), &resume());
        assert_eq!(
            request,
            Some(CopyRequest {
                label: "GitHub".into(),
                reference: "https://github.com/example".into(),
            })
        );
    }

    #[test]
    fn stale_index_resolves_to_nothing() {
        assert_eq!(resolve(&Message::CopySocial(5), &socials(), &resume()), None);
    }

    #[test]
    fn resume_resolves_to_reference() {
        let request = resolve(&Message::CopyResume, &socials(), &resume()).expect("resume");
        assert_eq!(request.reference, "cv.pdf");
    }

    #[test]
    fn footer_renders() {
        let i18n = I18n::default();
        let socials = socials();
        let resume = resume();
        let _element = view(ViewContext {
            i18n: &i18n,
            socials: &socials,
            resume: &resume,
        });
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery panel: upload control, count label and the image grid.

use crate::gallery::{GalleryStore, RecordKey, UploadedImage};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section::build_section;
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a GalleryStore,
    /// A picker dialog is open; the upload button is disabled meanwhile.
    pub picker_open: bool,
    pub columns: u16,
    pub thumbnail_height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Upload,
    Remove(RecordKey),
    Clear,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut upload = button(Text::new(ctx.i18n.tr("gallery-upload-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if !ctx.picker_open {
        upload = upload.on_press(Message::Upload);
    }

    let mut clear = button(Text::new(ctx.i18n.tr("gallery-clear-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);
    if !ctx.store.is_empty() {
        clear = clear.on_press(Message::Clear);
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(upload)
        .push(Text::new(ctx.store.count().label(ctx.i18n)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(clear);

    let body: Element<'a, Message> = if ctx.store.is_empty() {
        Text::new(ctx.i18n.tr("gallery-empty-hint"))
            .size(typography::BODY_SM)
            .into()
    } else {
        grid(&ctx)
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body);

    build_section(ctx.i18n.tr("section-gallery"), content.into())
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(ctx.columns.max(1));

    ctx.store
        .images()
        .chunks(columns)
        .fold(Column::new().spacing(spacing::MD), |grid, chunk| {
            let mut row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, item| {
                row.push(card(ctx, item))
            });
            // Pad the last row so cards keep the same width.
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            grid.push(row)
        })
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, item: &'a UploadedImage) -> Element<'a, Message> {
    let preview = image(item.preview().handle().clone())
        .width(Length::Fill)
        .height(Length::Fixed(f32::from(ctx.thumbnail_height)))
        .content_fit(ContentFit::Cover);

    let remove = button(Text::new(ctx.i18n.tr("gallery-remove-button")).size(typography::CAPTION))
        .on_press(Message::Remove(item.key()))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::danger);

    let caption = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(item.name())
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(remove);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(preview)
        .push(caption)
        .push(Text::new(details(ctx.i18n, item)).size(typography::CAPTION));

    Container::new(body)
        .padding(spacing::XS)
        .width(Length::FillPortion(1))
        .style(styles::container::card)
        .into()
}

/// "1920 × 1080 · 245 KB · 2024-05-01 14:32", skipping unknown parts.
fn details(i18n: &I18n, item: &UploadedImage) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some((width, height)) = item.dimensions() {
        parts.push(i18n.tr_with_args(
            "gallery-image-dimensions",
            &[
                ("width", width.to_string().as_str()),
                ("height", height.to_string().as_str()),
            ],
        ));
    }
    parts.push(i18n.tr_with_args(
        "gallery-image-size",
        &[("size", format_size(item.size_bytes()).as_str())],
    ));
    if let Some(modified) = item.modified() {
        parts.push(modified.format("%Y-%m-%d %H:%M").to_string());
    }
    parts.join(" · ")
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{} KB", b / KB),
        b => format!("{b} B"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{SelectedFile, Selection, SelectionOrigin};

    fn store_with(names: &[&str]) -> GalleryStore {
        let mut store = GalleryStore::new();
        store.add_images(Selection::new(
            SelectionOrigin::Picker,
            names
                .iter()
                .map(|name| SelectedFile::in_memory(*name, None, vec![0; 2048]))
                .collect(),
        ));
        store
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }

    #[test]
    fn details_skip_unknown_dimensions_and_date() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let store = store_with(&["raw.bin"]);
        assert_eq!(details(&i18n, &store.images()[0]), "2 KB");
    }

    #[test]
    fn gallery_renders_empty_and_filled() {
        let i18n = I18n::default();
        for store in [GalleryStore::new(), store_with(&["a.png", "b.png", "c.png", "d.png"])] {
            let _element = view(ViewContext {
                i18n: &i18n,
                store: &store,
                picker_open: false,
                columns: 3,
                thumbnail_height: 180,
            });
        }
    }
}

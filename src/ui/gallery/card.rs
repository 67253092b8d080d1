// SPDX-License-Identifier: MPL-2.0
//! One result card of the gallery grid.

use super::component::{Message, Thumbnail};
use crate::archive::ImageResult;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(
    result: &'a ImageResult,
    thumbnail: Option<&'a Thumbnail>,
    i18n: &I18n,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Loading) => placeholder(i18n.tr("gallery-thumbnail-loading")),
        Some(Thumbnail::Failed) | None => placeholder(i18n.tr("gallery-no-preview")),
    };

    let details = Column::new()
        .spacing(spacing::XXS)
        .padding([spacing::XS, spacing::SM])
        .push(
            Text::new(result.title.as_str())
                .size(typography::TITLE_SM)
                .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
        )
        .push(
            Text::new(result.display_date())
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    button(Column::new().push(preview).push(details))
        .on_press(Message::ImageSelected(result.id.clone()))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY_SM)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}

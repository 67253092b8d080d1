// SPDX-License-Identifier: MPL-2.0
//! Landing screen with the hero text and the way into the gallery.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    ExploreGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenGallery,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ExploreGallery => Event::OpenGallery,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let eyebrow = Text::new(ctx.i18n.tr("home-eyebrow"))
        .size(typography::BODY_SM)
        .color(palette::CYAN_400);

    let headline = Text::new(ctx.i18n.tr("home-title"))
        .size(typography::DISPLAY)
        .align_x(Horizontal::Center);

    let tagline = Text::new(ctx.i18n.tr("home-subtitle"))
        .size(typography::TITLE_SM)
        .color(palette::GRAY_200)
        .align_x(Horizontal::Center);

    let cta = button(Text::new(ctx.i18n.tr("home-explore-button")).size(typography::TITLE_SM))
        .on_press(Message::ExploreGallery)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::DESCRIPTION_MAX_WIDTH)
        .push(eyebrow)
        .push(headline)
        .push(tagline)
        .push(Container::new(cta).padding([spacing::LG, 0.0]));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

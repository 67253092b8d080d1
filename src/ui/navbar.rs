// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the home and gallery screens.
//!
//! Holds the app name, the Home/Gallery links (the active one highlighted)
//! and the theme mode toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Top-level sections reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Gallery,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    Open(Section),
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Section),
    ChangeTheme(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message, theme_mode: ThemeMode) -> Event {
    match message {
        Message::Open(section) => Event::Navigate(section),
        Message::CycleTheme => Event::ChangeTheme(theme_mode.next()),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("app-name"))
        .size(typography::TITLE_MD)
        .color(palette::CYAN_400);

    let link = |section: Section, key: &str| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::Open(section))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::nav_link(ctx.active == section))
    };

    let theme_toggle = button(Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY_SM))
        .on_press(Message::CycleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_link(false));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(link(Section::Home, "navbar-home"))
        .push(link(Section::Gallery, "navbar-gallery"))
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_navigate_to_their_section() {
        assert_eq!(
            update(Message::Open(Section::Gallery), ThemeMode::System),
            Event::Navigate(Section::Gallery)
        );
        assert_eq!(
            update(Message::Open(Section::Home), ThemeMode::System),
            Event::Navigate(Section::Home)
        );
    }

    #[test]
    fn theme_toggle_requests_next_mode() {
        assert_eq!(
            update(Message::CycleTheme, ThemeMode::Light),
            Event::ChangeTheme(ThemeMode::Dark)
        );
    }
}

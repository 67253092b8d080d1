// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::image_viewer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub viewer: Option<&'a image_viewer::State>,
    pub notifications: &'a Manager,
    pub fullscreen: bool,
    pub theme_mode: ThemeMode,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext { i18n: ctx.i18n }).map(Message::Home),
        Screen::Gallery => ctx.gallery.view(ctx.i18n).map(Message::Gallery),
        Screen::Viewer => match ctx.viewer {
            Some(viewer) => viewer.view(ctx.i18n).map(Message::ImageViewer),
            // Navigation never shows the viewer screen without state.
            None => Container::new(Column::new()).into(),
        },
    };

    let page: Element<'_, Message> = if ctx.fullscreen {
        current_view
    } else {
        let navbar_view = navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            active: ctx.screen.section(),
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Navbar);

        Column::new()
            .push(navbar_view)
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report side effects as `Effect` values; the handlers here turn
//! them into navigation, notifications or asynchronous `Task`s.

use super::screen::{Route, Screen};
use super::Message;
use crate::archive::{AssetFetcher, SearchClient};
use crate::config::{self, Config};
use crate::ui::gallery;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::image_viewer::{self, Opening};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::state::PanZoomConfig;
use crate::ui::theming::ThemeMode;
use iced::{event, keyboard, window, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub screen: &'a mut Screen,
    pub gallery: &'a mut gallery::State,
    pub viewer: &'a mut Option<image_viewer::State>,
    pub search_client: &'a SearchClient,
    pub asset_fetcher: &'a AssetFetcher,
    pub notifications: &'a mut notifications::Manager,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub theme_mode: &'a mut ThemeMode,
}

/// Switches to the screen `route` points at.
pub fn handle_navigation(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    match route {
        Route::Home => {
            let task = leave_viewer(ctx);
            *ctx.screen = Screen::Home;
            task
        }
        Route::Gallery => {
            let task = leave_viewer(ctx);
            *ctx.screen = Screen::Gallery;
            let effect = ctx.gallery.mount();
            let focus = iced::widget::operation::focus(iced::widget::Id::new(gallery::SEARCH_INPUT_ID));
            Task::batch([task, focus, apply_gallery_effect(ctx, effect)])
        }
        Route::Viewer(handoff) => match image_viewer::open(handoff, PanZoomConfig::default()) {
            Opening::Show(state, effect) => {
                tracing::debug!(id = %state.handoff().id, "opening viewer");
                *ctx.viewer = Some(state);
                *ctx.screen = Screen::Viewer;
                apply_viewer_effect(ctx, effect)
            }
            Opening::Redirect => handle_navigation(ctx, Route::Gallery),
        },
    }
}

/// Drops the viewer state and restores the windowed mode if needed.
fn leave_viewer(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.viewer = None;
    update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.theme_mode) {
        NavbarEvent::Navigate(section) => handle_navigation(ctx, section.into()),
        NavbarEvent::ChangeTheme(mode) => {
            apply_theme_mode(ctx, mode);
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::OpenGallery => handle_navigation(ctx, Route::Gallery),
    }
}

/// Applies the new theme mode and persists it.
fn apply_theme_mode(ctx: &mut UpdateContext<'_>, mode: ThemeMode) {
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    if let Err(err) = config::save(ctx.config) {
        tracing::warn!(error = %err, "failed to save theme preference");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.handle_message(message);
    apply_gallery_effect(ctx, effect)
}

fn apply_gallery_effect(ctx: &mut UpdateContext<'_>, effect: gallery::Effect) -> Task<Message> {
    match effect {
        gallery::Effect::None => Task::none(),
        gallery::Effect::Search(request) => {
            tracing::info!(request = request.id.value(), query = %request.query, "searching archive");
            let client = ctx.search_client.clone();
            let gallery::SearchRequest { id, query } = request;
            Task::perform(async move { client.search(&query).await }, move |result| {
                Message::Gallery(gallery::Message::SearchCompleted {
                    request: id,
                    result,
                })
            })
        }
        gallery::Effect::FetchThumbnails(downloads) => {
            tracing::debug!(count = downloads.len(), "downloading thumbnails");
            let fetcher = ctx.asset_fetcher;
            Task::batch(downloads.into_iter().map(|(id, url)| {
                let fetcher = fetcher.clone();
                Task::perform(async move { fetcher.fetch(&url).await }, move |result| {
                    Message::Gallery(gallery::Message::ThumbnailLoaded { id, result })
                })
            }))
        }
        gallery::Effect::OpenViewer(handoff) => handle_navigation(ctx, Route::Viewer(Some(handoff))),
        gallery::Effect::ShowErrorNotification { key } => {
            ctx.notifications.push(Notification::error(key));
            Task::none()
        }
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: image_viewer::Message,
) -> Task<Message> {
    let Some(viewer) = ctx.viewer.as_mut() else {
        tracing::debug!("viewer message received without an open viewer");
        return Task::none();
    };
    let effect = viewer.handle_message(message);
    apply_viewer_effect(ctx, effect)
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: image_viewer::Effect) -> Task<Message> {
    match effect {
        image_viewer::Effect::None => Task::none(),
        image_viewer::Effect::BackToGallery => handle_navigation(ctx, Route::Gallery),
        image_viewer::Effect::ToggleFullscreen => {
            let desired = ctx
                .viewer
                .as_ref()
                .is_some_and(image_viewer::State::is_fullscreen);
            let task = update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), desired);
            sync_viewer_fullscreen(ctx);
            task
        }
        image_viewer::Effect::ExitFullscreen => {
            let task = update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false);
            sync_viewer_fullscreen(ctx);
            task
        }
        image_viewer::Effect::FetchImage { id, url } => {
            tracing::info!(id, "downloading full image");
            let fetcher = ctx.asset_fetcher.clone();
            Task::perform(async move { fetcher.fetch(&url).await }, move |result| {
                Message::ImageViewer(image_viewer::Message::ImageLoaded { id, result })
            })
        }
        image_viewer::Effect::ShowErrorNotification { key } => {
            ctx.notifications.push(Notification::error(key));
            Task::none()
        }
    }
}

/// The window mode only changes once a window id is known.
fn sync_viewer_fullscreen(ctx: &mut UpdateContext<'_>) {
    if let Some(viewer) = ctx.viewer.as_mut() {
        viewer.set_fullscreen(*ctx.fullscreen);
    }
}

/// Routes native events: remembers the window and forwards keys to the viewer.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: event::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    let is_key_press = matches!(
        event,
        event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
    );
    if *ctx.screen == Screen::Viewer && is_key_press {
        return handle_viewer_message(ctx, image_viewer::Message::RawEvent(event));
    }
    Task::none()
}

/// Advances animations and expires notifications.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    ctx.gallery.tick();
    if let Some(viewer) = ctx.viewer.as_mut() {
        viewer.tick();
    }
    Task::none()
}

/// Updates fullscreen mode to the desired state.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        tracing::debug!("no window id yet, ignoring fullscreen change");
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home, gallery and
//! viewer screens.
//!
//! The `App` struct wires together the screens, localization and settings,
//! and translates component effects into side effects like archive requests,
//! window mode changes or config persistence.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Route, Screen};

use crate::archive::{AssetFetcher, SearchClient};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::image_viewer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    gallery: gallery::State,
    /// Present only while the viewer screen is shown.
    viewer: Option<image_viewer::State>,
    search_client: SearchClient,
    asset_fetcher: AssetFetcher,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    fullscreen: bool,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("query", &self.gallery.search().query())
            .field("viewer_open", &self.viewer.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), &Flags::default())
    }
}

impl App {
    /// Initializes application state from the on-disk config and `Flags`.
    ///
    /// A `--query` flag opens the gallery directly and starts that search.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(config, &flags);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = if flags.query.is_some() {
            app.update(Message::Navigate(Route::Gallery))
        } else {
            Task::none()
        };
        (app, task)
    }

    /// Builds the application from an already loaded config.
    fn with_config(config: Config, flags: &Flags) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let initial_query = flags
            .query
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
            .unwrap_or(config.search.default_query())
            .to_string();
        let timeout = config.search.timeout();

        Self {
            i18n,
            screen: Screen::Home,
            gallery: gallery::State::new(initial_query),
            viewer: None,
            search_client: SearchClient::from_config(&config.search),
            asset_fetcher: AssetFetcher::new(timeout),
            notifications: notifications::Manager::new(),
            fullscreen: false,
            window_id: None,
            theme_mode: config.general.theme_mode,
            config,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (&self.screen, &self.viewer) {
            (Screen::Viewer, Some(viewer)) if !viewer.handoff().title.is_empty() => {
                format!("{} - {app_name}", viewer.handoff().title)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_loading = self.gallery.search().is_loading()
            || self
                .viewer
                .as_ref()
                .is_some_and(image_viewer::State::is_loading);
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(is_loading, self.notifications.has_expiring());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            screen: &mut self.screen,
            gallery: &mut self.gallery,
            viewer: &mut self.viewer,
            search_client: &self.search_client,
            asset_fetcher: &self.asset_fetcher,
            notifications: &mut self.notifications,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            theme_mode: &mut self.theme_mode,
        };

        match message {
            Message::Navigate(route) => update::handle_navigation(&mut ctx, route),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, &home_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::ImageViewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, event)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            viewer: self.viewer.as_ref(),
            notifications: &self.notifications,
            fullscreen: self.fullscreen,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::ImageResult;
    use crate::error::{FailureCause, SearchError};
    use crate::ui::image_viewer::ViewerHandoff;
    use crate::ui::navbar;
    use std::time::{Duration, Instant};

    fn app_with_query(query: &str) -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            query: Some(query.to_string()),
            config_dir: None,
        };
        App::with_config(Config::default(), &flags)
    }

    fn result(id: &str, title: &str) -> ImageResult {
        ImageResult::new(
            id,
            title,
            "A spiral galaxy",
            "2009-05-12T00:00:00Z",
            format!("https://images-assets.nasa.gov/image/{id}/{id}~thumb.jpg"),
        )
    }

    fn pending_request(app: &App) -> gallery::RequestId {
        app.gallery
            .search()
            .latest_request()
            .expect("a search should be in flight")
    }

    #[test]
    fn starts_on_home_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.viewer.is_none());
        assert_eq!(app.gallery.search().phase(), gallery::Phase::Idle);
    }

    #[test]
    fn query_flag_seeds_gallery_query() {
        let app = app_with_query("  andromeda ");
        assert_eq!(app.gallery.search().query(), "andromeda");
    }

    #[test]
    fn blank_query_flag_uses_configured_default() {
        let app = app_with_query("   ");
        assert_eq!(
            app.gallery.search().query(),
            crate::config::DEFAULT_QUERY
        );
    }

    #[test]
    fn navigating_to_gallery_starts_initial_search_once() {
        let mut app = app_with_query("andromeda");
        let _ = app.update(Message::Navigate(Route::Gallery));
        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.gallery.search().is_loading());
        let first = pending_request(&app);

        let _ = app.update(Message::Navigate(Route::Home));
        let _ = app.update(Message::Navigate(Route::Gallery));
        assert_eq!(pending_request(&app), first);
    }

    #[test]
    fn navbar_links_switch_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Open(navbar::Section::Gallery)));
        assert_eq!(app.screen, Screen::Gallery);
        let _ = app.update(Message::Navbar(navbar::Message::Open(navbar::Section::Home)));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn home_call_to_action_opens_gallery() {
        let mut app = App::default();
        let _ = app.update(Message::Home(crate::ui::home::Message::ExploreGallery));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn failed_search_shows_exactly_one_error_notification() {
        let mut app = app_with_query("andromeda");
        let _ = app.update(Message::Navigate(Route::Gallery));
        let request = pending_request(&app);

        let _ = app.update(Message::Gallery(gallery::Message::SearchCompleted {
            request,
            result: Err(SearchError::RequestFailed(FailureCause::Network("connection refused".into()))),
        }));

        let keys: Vec<_> = app
            .notifications
            .all()
            .map(|notification| notification.message_key().to_string())
            .collect();
        assert_eq!(keys, vec!["notification-search-failed".to_string()]);
        assert!(!app.gallery.search().is_loading());
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let mut app = app_with_query("andromeda");
        let _ = app.update(Message::Navigate(Route::Gallery));
        let first = pending_request(&app);

        let _ = app.update(Message::Gallery(gallery::Message::QueryChanged(
            "orion".to_string(),
        )));
        let _ = app.update(Message::Gallery(gallery::Message::SubmitSearch));
        let second = pending_request(&app);
        assert_ne!(first, second);

        let _ = app.update(Message::Gallery(gallery::Message::SearchCompleted {
            request: first,
            result: Ok(vec![result("PIA00001", "Andromeda")]),
        }));
        assert!(app.gallery.search().is_loading());
        assert!(app.gallery.search().results().is_empty());

        let _ = app.update(Message::Gallery(gallery::Message::SearchCompleted {
            request: second,
            result: Ok(vec![result("PIA00002", "Orion Nebula")]),
        }));
        assert_eq!(app.gallery.search().results()[0].id, "PIA00002");
    }

    #[test]
    fn selecting_result_opens_viewer_with_handoff() {
        let mut app = app_with_query("andromeda");
        let _ = app.update(Message::Navigate(Route::Gallery));
        let request = pending_request(&app);
        let _ = app.update(Message::Gallery(gallery::Message::SearchCompleted {
            request,
            result: Ok(vec![result("PIA12345", "Andromeda Galaxy")]),
        }));

        let _ = app.update(Message::Gallery(gallery::Message::ImageSelected(
            "PIA12345".to_string(),
        )));

        assert_eq!(app.screen, Screen::Viewer);
        let viewer = app.viewer.as_ref().expect("viewer should be open");
        assert_eq!(viewer.handoff().id, "PIA12345");
        assert_eq!(viewer.handoff().title, "Andromeda Galaxy");
        assert!(viewer.is_loading());
        assert_eq!(app.title(), "Andromeda Galaxy - DeepZoomer");
    }

    #[test]
    fn viewer_without_handoff_redirects_to_gallery() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Route::Viewer(None)));
        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.viewer.is_none());
    }

    #[test]
    fn closing_viewer_returns_to_gallery() {
        let mut app = App::default();
        let handoff = ViewerHandoff {
            image_url: String::new(),
            title: "Pillars of Creation".to_string(),
            description: String::new(),
            id: "PIA00003".to_string(),
        };
        let _ = app.update(Message::Navigate(Route::Viewer(Some(handoff))));
        assert_eq!(app.screen, Screen::Viewer);

        let _ = app.update(Message::ImageViewer(image_viewer::Message::Close));
        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.viewer.is_none());
    }

    fn fail_pending_search(app: &mut App) {
        let request = pending_request(app);
        let _ = app.update(Message::Gallery(gallery::Message::SearchCompleted {
            request,
            result: Err(SearchError::RequestFailed(FailureCause::Status(503))),
        }));
    }

    fn open_viewer(app: &mut App) {
        let handoff = ViewerHandoff {
            image_url: String::new(),
            title: "Crab Nebula".to_string(),
            description: String::new(),
            id: "PIA00004".to_string(),
        };
        let _ = app.update(Message::Navigate(Route::Viewer(Some(handoff))));
    }

    #[test]
    fn search_failure_notifications_expire() {
        let mut app = app_with_query("andromeda");
        let _ = app.update(Message::Navigate(Route::Gallery));
        fail_pending_search(&mut app);
        for _ in 0..4 {
            let _ = app.update(Message::Gallery(gallery::Message::SubmitSearch));
            fail_pending_search(&mut app);
        }
        assert_eq!(app.notifications.all().count(), 5);
        assert!(app.notifications.has_expiring());

        let later = Instant::now() + Duration::from_secs(600);
        for _ in 0..3 {
            let _ = app.update(Message::Tick(later));
        }

        assert_eq!(app.notifications.all().count(), 0);
        assert!(!app.notifications.has_expiring());
    }

    #[test]
    fn fullscreen_toggle_waits_for_a_window() {
        let mut app = App::default();
        open_viewer(&mut app);

        let _ = app.update(Message::ImageViewer(image_viewer::Message::ToggleFullscreen));
        assert!(!app.fullscreen);
        assert!(!app.viewer.as_ref().is_some_and(image_viewer::State::is_fullscreen));

        app.window_id = Some(iced::window::Id::unique());
        let _ = app.update(Message::ImageViewer(image_viewer::Message::ToggleFullscreen));
        assert!(app.fullscreen);
        assert!(app.viewer.as_ref().is_some_and(image_viewer::State::is_fullscreen));

        let _ = app.update(Message::ImageViewer(image_viewer::Message::ToggleFullscreen));
        assert!(!app.fullscreen);
        assert!(!app.viewer.as_ref().is_some_and(image_viewer::State::is_fullscreen));
    }

    #[test]
    fn viewer_messages_without_viewer_are_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::ImageViewer(image_viewer::Message::ZoomIn));
        assert_eq!(app.screen, Screen::Home);
    }
}

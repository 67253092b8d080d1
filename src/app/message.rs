// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::screen::Route;
use crate::ui::gallery;
use crate::ui::home;
use crate::ui::image_viewer;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::{event, window};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Navbar(navbar::Message),
    Home(home::Message),
    Gallery(gallery::Message),
    ImageViewer(image_viewer::Message),
    Notification(notifications::NotificationMessage),
    /// Native keyboard or window event not captured by a widget.
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant), // Periodic tick for spinners and toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional search query; opens the gallery directly on startup.
    pub query: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DEEP_ZOOMER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

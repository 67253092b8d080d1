// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! - [`notification`] - `Notification` record with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - rendering of the visible notifications
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-search-failed"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Warnings disappear after 5s and errors after 8s, unless dismissed
//! earlier. At most 3 are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;

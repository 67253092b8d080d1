// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, handles its messages and reports side effects to
//! the application, which performs them.
//!
//! # Screens
//!
//! - [`home`] - Landing hero with the call to explore the gallery
//! - [`gallery`] - Archive search and result grid
//! - [`image_viewer`] - Pan/zoom viewer for one selected image
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Pan/zoom and drag interaction state
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod image_viewer;
pub mod navbar;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;

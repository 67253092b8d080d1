// SPDX-License-Identifier: MPL-2.0
//! `deep_zoomer` is a desktop explorer for the NASA image archive built with
//! the Iced GUI framework.
//!
//! It searches the archive, shows the hits as a thumbnail gallery and opens a
//! selected image in a pan/zoom viewer. Strings are localized with Fluent and
//! user preferences persist in a TOML config file.

#![doc(html_root_url = "https://docs.rs/deep_zoomer/0.1.0")]

pub mod app;
pub mod archive;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Access to the remote image archive: searching and asset download.

pub mod asset;
pub mod client;
pub mod model;

pub use asset::{AssetFetcher, ImageData};
pub use client::SearchClient;
pub use model::ImageResult;

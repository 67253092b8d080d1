// SPDX-License-Identifier: MPL-2.0
//! Downloading and decoding of thumbnails and full images.

use super::client::http_client;
use crate::error::{AssetError, FailureCause};
use iced::widget::image;
use std::time::Duration;

/// Largest asset body accepted, in bytes.
const MAX_ASSET_BYTES: usize = 256 * 1024 * 1024;
/// Upper bound on the buffer reserved from a `Content-Length` header.
const MAX_PREALLOCATED_BYTES: usize = 1024 * 1024;

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes an encoded image (JPEG, PNG, ...) into RGBA pixels.
pub fn decode(bytes: &[u8]) -> Result<ImageData, AssetError> {
    let decoded =
        image_rs::load_from_memory(bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Fetches image assets linked from search results.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    timeout: Duration,
}

impl AssetFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Downloads `url` and decodes it off the async runtime.
    pub async fn fetch(&self, url: &str) -> Result<ImageData, AssetError> {
        let bytes = self.download(url).await.map_err(|cause| {
            tracing::warn!(url, error = %cause, "asset download failed");
            AssetError::Fetch(cause)
        })?;

        let size = bytes.len();
        let data = tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| AssetError::Decode(e.to_string()))?
            .inspect_err(|err| tracing::warn!(url, error = %err, "asset decode failed"))?;

        tracing::debug!(url, size, width = data.width, height = data.height, "asset loaded");
        Ok(data)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FailureCause> {
        use futures_util::StreamExt;

        let parsed = reqwest::Url::parse(url).map_err(|e| FailureCause::InvalidUrl(e.to_string()))?;
        let client = http_client(self.timeout)?;

        let response = client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FailureCause::Status(status.as_u16()));
        }

        let mut body = Vec::with_capacity(initial_capacity(response.content_length()));
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if body.len() + chunk.len() > MAX_ASSET_BYTES {
                return Err(FailureCause::Malformed(format!(
                    "asset larger than {MAX_ASSET_BYTES} bytes"
                )));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

/// Buffer size to reserve for a body announced as `content_length` bytes.
fn initial_capacity(content_length: Option<u64>) -> usize {
    content_length
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(0)
        .min(MAX_PREALLOCATED_BYTES)
}

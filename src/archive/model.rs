// SPDX-License-Identifier: MPL-2.0
//! Search hit records and the wire format they are parsed from.
//!
//! The archive answers with a `collection.items` array in which every item
//! carries a list of metadata records (`data`) and a list of linked assets
//! (`links`). Only the first entry of each list is used.

use crate::error::FailureCause;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// One search hit, normalized from the archive response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Archive identifier (`nasa_id`). Never empty.
    pub id: String,
    pub title: String,
    /// May be empty.
    pub description: String,
    /// Creation timestamp as sent by the archive.
    pub date_created: String,
    /// URL of the first linked asset; empty when the item had none.
    pub thumbnail_url: String,
}

impl ImageResult {
    /// Builds a result from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date_created: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date_created: date_created.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }

    /// Whether a displayable asset was linked to this hit.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail_url.trim().is_empty()
    }

    /// Calendar date of `date_created`, if it parses.
    ///
    /// The archive sends RFC 3339 timestamps; a bare `YYYY-MM-DD` prefix is
    /// accepted as a fallback.
    #[must_use]
    pub fn created_on(&self) -> Option<NaiveDate> {
        let raw = self.date_created.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.date_naive());
        }
        raw.get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    }

    /// Date shown under the card title; falls back to the raw string.
    #[must_use]
    pub fn display_date(&self) -> String {
        match self.created_on() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.date_created.clone(),
        }
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    collection: Option<Collection>,
}

#[derive(Debug, Deserialize)]
struct Collection {
    #[serde(default)]
    items: Option<Vec<Item>>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    data: Vec<ItemData>,
    #[serde(default)]
    links: Option<Vec<ItemLink>>,
}

#[derive(Debug, Deserialize)]
struct ItemData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    nasa_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemLink {
    #[serde(default)]
    href: Option<String>,
}

impl Item {
    fn into_result(self) -> Option<ImageResult> {
        let thumbnail_url = self
            .links
            .and_then(|links| links.into_iter().next())
            .and_then(|link| link.href)
            .unwrap_or_default();
        let data = self.data.into_iter().next()?;
        let id = data.nasa_id.filter(|id| !id.trim().is_empty())?;

        Some(ImageResult {
            id,
            title: data.title.unwrap_or_default(),
            description: data.description.unwrap_or_default(),
            date_created: data.date_created.unwrap_or_default(),
            thumbnail_url,
        })
    }
}

/// Parses a search response body into results, in server order.
///
/// A body without `collection.items` yields no results. Items lacking a
/// metadata record or an identifier are skipped.
pub fn parse_search_response(body: &[u8]) -> Result<Vec<ImageResult>, FailureCause> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    let items = response
        .collection
        .and_then(|collection| collection.items)
        .unwrap_or_default();

    let total = items.len();
    let results: Vec<ImageResult> = items.into_iter().filter_map(Item::into_result).collect();
    if results.len() < total {
        tracing::debug!(
            skipped = total - results.len(),
            "dropped search items without metadata or identifier"
        );
    }
    Ok(results)
}

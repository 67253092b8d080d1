// SPDX-License-Identifier: MPL-2.0
//! Search state machine of the gallery.
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok(non-empty)──▶ Loaded
//!                     │  ──ok(empty)────────▶ Empty
//!                     └──err────────────────▶ Failed
//! Loaded | Empty | Failed ──submit──▶ Loading
//! ```
//!
//! Every submission gets a fresh [`RequestId`]. Only the completion carrying
//! the latest id is applied; earlier ones are stale and dropped.

use crate::archive::ImageResult;
use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No search issued yet.
    #[default]
    Idle,
    Loading,
    /// Last search returned at least one result.
    Loaded,
    /// Last search succeeded with no results.
    Empty,
    /// Last search failed; earlier results, if any, are still shown.
    Failed,
}

/// Sequence number of a submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A search the gallery wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: RequestId,
    /// Trimmed, never empty.
    pub query: String,
}

/// What applying a completion did.
#[derive(Debug, Clone)]
pub enum Completion {
    /// Not the latest request; nothing changed.
    Stale,
    Loaded,
    Empty,
    Failed(SearchError),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<ImageResult>,
    phase: Phase,
    last_request: u64,
}

impl SearchState {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Id of the most recently issued request, if any.
    #[must_use]
    pub fn latest_request(&self) -> Option<RequestId> {
        (self.last_request > 0).then_some(RequestId(self.last_request))
    }

    /// Replaces the query text. Nothing else changes.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Starts a search for the current query.
    ///
    /// Blank queries are ignored: no request, no state change.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }

        self.last_request += 1;
        self.phase = Phase::Loading;
        Some(SearchRequest {
            id: RequestId(self.last_request),
            query: query.to_string(),
        })
    }

    /// Applies the outcome of request `id`.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<Vec<ImageResult>, SearchError>,
    ) -> Completion {
        if id.0 != self.last_request {
            return Completion::Stale;
        }

        match result {
            Ok(results) if results.is_empty() => {
                self.results.clear();
                self.phase = Phase::Empty;
                Completion::Empty
            }
            Ok(results) => {
                self.results = results;
                self.phase = Phase::Loaded;
                Completion::Loaded
            }
            Err(err) => {
                self.phase = Phase::Failed;
                Completion::Failed(err)
            }
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ImageResult> {
        self.results.iter().find(|result| result.id == id)
    }
}

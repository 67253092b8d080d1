// SPDX-License-Identifier: MPL-2.0
//! Search results gallery.
//!
//! The gallery owns the query, the current result set and the search state
//! machine. It never performs I/O itself: searches and thumbnail downloads
//! are returned as [`Effect`]s for the application to run, and their
//! outcomes come back as [`Message`]s.

mod card;
pub mod component;
pub mod state;

pub use component::{columns_for_width, Body, Effect, Message, State, Thumbnail, SEARCH_INPUT_ID};
pub use state::{Phase, RequestId, SearchRequest, SearchState};

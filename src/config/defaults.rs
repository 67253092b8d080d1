// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Search**: Archive endpoint, page size and initial query
//! - **Pan/Zoom**: Scale bounds and zoom steps of the viewer surface

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Search endpoint of the NASA Image and Video Library.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://images-api.nasa.gov/search";

/// Query issued when the gallery is first shown.
pub const DEFAULT_QUERY: &str = "nebula";

/// Number of results requested per search.
pub const SEARCH_PAGE_SIZE: u32 = 24;

/// Media type filter sent with every search.
pub const SEARCH_MEDIA_TYPE: &str = "image";

/// Default HTTP timeout for search and asset requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Pan/Zoom Defaults
// ==========================================================================

/// Scale applied when an image is first shown and after a reset.
pub const INITIAL_SCALE: f32 = 1.0;

/// Smallest allowed scale.
pub const MIN_SCALE: f32 = 0.5;

/// Largest allowed scale.
pub const MAX_SCALE: f32 = 10.0;

/// Zoom step per mouse wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Zoom step applied on double-click.
pub const DOUBLE_CLICK_ZOOM_STEP: f32 = 0.7;

/// Zoom step applied by the zoom-in/zoom-out buttons.
pub const BUTTON_ZOOM_STEP: f32 = 0.5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE <= INITIAL_SCALE);
    assert!(INITIAL_SCALE <= MAX_SCALE);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(DOUBLE_CLICK_ZOOM_STEP > 0.0);
    assert!(BUTTON_ZOOM_STEP > 0.0);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(SEARCH_PAGE_SIZE > 0);
};

// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept apart from the widgets that render it.

pub mod drag;
pub mod pan_zoom;

pub use drag::DragState;
pub use pan_zoom::{PanZoom, PanZoomConfig, PanZoomSurface, Transform};

// SPDX-License-Identifier: MPL-2.0
//! Full-window viewer for one selected image.

pub mod component;
pub mod handoff;
pub mod surface;

pub use component::{open, Effect, ImageState, Message, Opening, State};
pub use handoff::ViewerHandoff;
pub use surface::SurfaceEvent;

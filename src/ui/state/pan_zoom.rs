// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom state of the viewer surface.
//!
//! The viewer only talks to the surface through the [`PanZoom`] trait
//! (`zoom_in`, `zoom_out`, `reset`, `transform`). Pointer input (wheel,
//! double-click, drag) is fed by the canvas that draws the image.
//!
//! Offsets are measured from the viewport center to the content center, in
//! logical pixels. Zooming is multiplicative: a step `s` multiplies the scale
//! by `e^s`, keeping the point under the focus fixed on screen.

use super::drag::DragState;
use crate::config::{
    BUTTON_ZOOM_STEP, DOUBLE_CLICK_ZOOM_STEP, INITIAL_SCALE, MAX_SCALE, MIN_SCALE,
    WHEEL_ZOOM_STEP,
};
use iced::{Point, Rectangle, Size, Vector};

/// Tunables of a pan/zoom surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanZoomConfig {
    pub initial_scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Step per wheel notch.
    pub wheel_step: f32,
    pub double_click_step: f32,
    /// Step of the zoom-in/zoom-out controls.
    pub button_step: f32,
    /// Center the content in the viewport on first display and reset;
    /// otherwise it is anchored to the top-left corner.
    pub center_on_init: bool,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            initial_scale: INITIAL_SCALE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_step: WHEEL_ZOOM_STEP,
            double_click_step: DOUBLE_CLICK_ZOOM_STEP,
            button_step: BUTTON_ZOOM_STEP,
            center_on_init: true,
        }
    }
}

impl PanZoomConfig {
    #[must_use]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Current scale and pan offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Vector,
}

/// Narrow pan/zoom capability used by the viewer controls.
pub trait PanZoom {
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
    fn reset(&mut self);
    fn transform(&self) -> Transform;
}

/// Pan/zoom state backing the image canvas.
#[derive(Debug, Clone)]
pub struct PanZoomSurface {
    config: PanZoomConfig,
    scale: f32,
    offset: Vector,
    drag: DragState,
}

impl Default for PanZoomSurface {
    fn default() -> Self {
        Self::new(PanZoomConfig::default())
    }
}

impl PanZoomSurface {
    #[must_use]
    pub fn new(config: PanZoomConfig) -> Self {
        Self {
            scale: config.clamp_scale(config.initial_scale),
            offset: Vector::ZERO,
            drag: DragState::default(),
            config,
        }
    }

    /// Multiplies the scale by `e^step` keeping `focus` fixed on screen.
    ///
    /// `focus` is relative to the viewport center. Returns whether the
    /// transform changed.
    pub fn zoom_by(&mut self, step: f32, focus: Vector) -> bool {
        let old_scale = self.scale;
        let new_scale = self.config.clamp_scale(old_scale * step.exp());
        if (new_scale - old_scale).abs() <= f32::EPSILON {
            return false;
        }

        let ratio = new_scale / old_scale;
        self.offset = focus - (focus - self.offset) * ratio;
        self.scale = new_scale;
        true
    }

    /// Applies a wheel movement of `notches` (positive zooms in).
    pub fn on_wheel(&mut self, notches: f32, focus: Vector) -> bool {
        if notches == 0.0 {
            return false;
        }
        self.zoom_by(notches * self.config.wheel_step, focus)
    }

    pub fn on_double_click(&mut self, focus: Vector) -> bool {
        self.zoom_by(self.config.double_click_step, focus)
    }

    pub fn start_drag(&mut self, position: Point) {
        self.drag.start(position, self.offset);
    }

    /// Pans to follow the cursor. Returns whether a drag was in progress.
    pub fn drag_to(&mut self, position: Point) -> bool {
        match self.drag.calculate_offset(position) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Screen rectangle covered by content of `content_size` drawn inside
    /// `viewport` with the current transform.
    ///
    /// At scale 1.0 the content is fitted inside the viewport, preserving its
    /// aspect ratio.
    #[must_use]
    pub fn content_bounds(&self, viewport: Rectangle, content_size: Size) -> Rectangle {
        let fitted = fit_contain(viewport.size(), content_size);
        let size = Size::new(fitted.width * self.scale, fitted.height * self.scale);

        let anchor = if self.config.center_on_init {
            viewport.center()
        } else {
            Point::new(
                viewport.x + fitted.width / 2.0 * self.scale,
                viewport.y + fitted.height / 2.0 * self.scale,
            )
        };
        let center = anchor + self.offset;

        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

impl PanZoom for PanZoomSurface {
    fn zoom_in(&mut self) {
        self.zoom_by(self.config.button_step, Vector::ZERO);
    }

    fn zoom_out(&mut self) {
        self.zoom_by(-self.config.button_step, Vector::ZERO);
    }

    fn reset(&mut self) {
        self.scale = self.config.clamp_scale(self.config.initial_scale);
        self.offset = Vector::ZERO;
        self.drag.stop();
    }

    fn transform(&self) -> Transform {
        Transform {
            scale: self.scale,
            offset: self.offset,
        }
    }
}

/// Largest size with the aspect ratio of `content` that fits in `bounds`.
#[must_use]
pub fn fit_contain(bounds: Size, content: Size) -> Size {
    if content.width <= 0.0 || content.height <= 0.0 {
        return Size::ZERO;
    }
    let factor = (bounds.width / content.width).min(bounds.height / content.height);
    Size::new(content.width * factor, content.height * factor)
}

// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the viewed image with the current pan/zoom transform.
//!
//! The canvas keeps no transform of its own: pointer input is published as
//! [`SurfaceEvent`]s, applied by the viewer to its [`PanZoomSurface`], and
//! the next frame is drawn from the updated state.

use crate::archive::ImageData;
use crate::ui::state::PanZoomSurface;
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::{Duration, Instant};

/// Two presses closer than this form a double-click.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(350);

/// Pixel distance treated as one wheel notch on touchpads.
const PIXELS_PER_NOTCH: f32 = 50.0;

/// Pointer input on the surface, in canvas-local coordinates.
///
/// Focus vectors are relative to the center of the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Wheel { notches: f32, focus: Vector },
    DoubleClick { focus: Vector },
    DragStarted(Point),
    DragMoved(Point),
    DragEnded,
}

/// Converts a scroll delta into wheel notches; positive zooms in.
#[must_use]
pub fn wheel_notches(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
    }
}

fn focus_from_center(position: Point, bounds: Rectangle) -> Vector {
    Vector::new(position.x - bounds.width / 2.0, position.y - bounds.height / 2.0)
}

fn local_position(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    cursor
        .position()
        .map(|position| Point::new(position.x - bounds.x, position.y - bounds.y))
}

#[derive(Debug, Default)]
pub struct SurfaceState {
    last_press: Option<Instant>,
}

impl SurfaceState {
    /// Records a press at `now`; returns whether it completes a double-click.
    fn register_press(&mut self, now: Instant) -> bool {
        match self.last_press.take() {
            Some(previous) if now.duration_since(previous) <= DOUBLE_CLICK_THRESHOLD => true,
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }
}

pub struct ImageSurface<'a> {
    image: &'a ImageData,
    pan_zoom: &'a PanZoomSurface,
}

impl<'a> ImageSurface<'a> {
    pub fn new(image: &'a ImageData, pan_zoom: &'a PanZoomSurface) -> Self {
        Self { image, pan_zoom }
    }

    fn image_size(&self) -> Size {
        Size::new(self.image.width as f32, self.image.height as f32)
    }
}

impl<Message> canvas::Program<Message> for ImageSurface<'_>
where
    Message: From<SurfaceEvent>,
{
    type State = SurfaceState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let publish = |event: SurfaceEvent| Some(Action::publish(Message::from(event)).and_capture());

        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let position = cursor.position_in(bounds)?;
                let notches = wheel_notches(*delta);
                if notches == 0.0 {
                    return None;
                }
                publish(SurfaceEvent::Wheel {
                    notches,
                    focus: focus_from_center(position, bounds),
                })
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                if state.register_press(Instant::now()) {
                    publish(SurfaceEvent::DoubleClick {
                        focus: focus_from_center(position, bounds),
                    })
                } else {
                    publish(SurfaceEvent::DragStarted(position))
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.pan_zoom.is_dragging() => {
                let position = local_position(cursor, bounds)?;
                publish(SurfaceEvent::DragMoved(position))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft)
                if self.pan_zoom.is_dragging() =>
            {
                publish(SurfaceEvent::DragEnded)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = Rectangle::with_size(bounds.size());
        let target = self.pan_zoom.content_bounds(viewport, self.image_size());
        if target.width > 0.0 && target.height > 0.0 {
            frame.draw_image(target, &self.image.handle);
        }
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.pan_zoom.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.

use super::handoff::ViewerHandoff;
use super::surface::{ImageSurface, SurfaceEvent};
use crate::archive::ImageData;
use crate::error::AssetError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::{PanZoom, PanZoomConfig, PanZoomSurface};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, canvas, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, event, Element, Length};

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    Close,
    ImageLoaded {
        id: String,
        result: Result<ImageData, AssetError>,
    },
    Surface(SurfaceEvent),
    RawEvent(event::Event),
}

impl From<SurfaceEvent> for Message {
    fn from(event: SurfaceEvent) -> Self {
        Message::Surface(event)
    }
}

/// Side effects the application should perform after handling a viewer message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    BackToGallery,
    ToggleFullscreen,
    ExitFullscreen,
    FetchImage {
        id: String,
        url: String,
    },
    ShowErrorNotification {
        key: &'static str,
    },
}

/// Result of opening the viewer.
#[derive(Debug)]
pub enum Opening {
    Show(State, Effect),
    /// No payload was given; go back to the gallery.
    Redirect,
}

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(ImageData),
    /// The result had no image URL.
    Unavailable,
    Failed(&'static str),
}

#[derive(Debug)]
pub struct State {
    handoff: ViewerHandoff,
    image: ImageState,
    pan_zoom: PanZoomSurface,
    is_fullscreen: bool,
    spinner_rotation: f32,
}

/// Opens the viewer for `handoff`.
///
/// The image download starts right away; an empty URL skips it and shows
/// the placeholder.
pub fn open(handoff: Option<ViewerHandoff>, config: PanZoomConfig) -> Opening {
    let Some(handoff) = handoff else {
        tracing::debug!("viewer opened without a selection, redirecting to gallery");
        return Opening::Redirect;
    };

    let (image, effect) = if handoff.has_image() {
        (
            ImageState::Loading,
            Effect::FetchImage {
                id: handoff.id.clone(),
                url: handoff.image_url.clone(),
            },
        )
    } else {
        (ImageState::Unavailable, Effect::None)
    };

    let state = State {
        handoff,
        image,
        pan_zoom: PanZoomSurface::new(config),
        is_fullscreen: false,
        spinner_rotation: 0.0,
    };
    Opening::Show(state, effect)
}

impl State {
    #[must_use]
    pub fn handoff(&self) -> &ViewerHandoff {
        &self.handoff
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn pan_zoom(&self) -> &PanZoomSurface {
        &self.pan_zoom
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Aligns the fullscreen flag with the actual window mode.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.is_fullscreen = fullscreen;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.image, ImageState::Loading)
    }

    pub fn tick(&mut self) -> bool {
        if self.is_loading() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
            true
        } else {
            false
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ZoomIn => {
                self.pan_zoom.zoom_in();
                Effect::None
            }
            Message::ZoomOut => {
                self.pan_zoom.zoom_out();
                Effect::None
            }
            Message::ResetZoom => {
                self.pan_zoom.reset();
                Effect::None
            }
            Message::ToggleFullscreen => {
                self.is_fullscreen = !self.is_fullscreen;
                Effect::ToggleFullscreen
            }
            Message::Close => Effect::BackToGallery,
            Message::ImageLoaded { id, result } => self.on_image_loaded(id, result),
            Message::Surface(event) => {
                self.on_surface_event(event);
                Effect::None
            }
            Message::RawEvent(event) => self.on_raw_event(&event),
        }
    }

    fn on_image_loaded(&mut self, id: String, result: Result<ImageData, AssetError>) -> Effect {
        if id != self.handoff.id {
            tracing::debug!(id, current = %self.handoff.id, "ignoring image for another selection");
            return Effect::None;
        }

        match result {
            Ok(data) => {
                self.image = ImageState::Ready(data);
                self.pan_zoom.reset();
                Effect::None
            }
            Err(err) => {
                let key = err.i18n_key();
                self.image = ImageState::Failed(key);
                Effect::ShowErrorNotification { key }
            }
        }
    }

    fn on_surface_event(&mut self, event: SurfaceEvent) {
        if !matches!(self.image, ImageState::Ready(_)) {
            return;
        }
        match event {
            SurfaceEvent::Wheel { notches, focus } => {
                self.pan_zoom.on_wheel(notches, focus);
            }
            SurfaceEvent::DoubleClick { focus } => {
                self.pan_zoom.end_drag();
                self.pan_zoom.on_double_click(focus);
            }
            SurfaceEvent::DragStarted(position) => self.pan_zoom.start_drag(position),
            SurfaceEvent::DragMoved(position) => {
                self.pan_zoom.drag_to(position);
            }
            SurfaceEvent::DragEnded => self.pan_zoom.end_drag(),
        }
    }

    fn on_raw_event(&mut self, event: &event::Event) -> Effect {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
            return Effect::None;
        };
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return Effect::None;
        }
        self.on_key(key)
    }

    fn on_key(&mut self, key: &Key) -> Effect {
        match key.as_ref() {
            Key::Character("+" | "=") => self.handle_message(Message::ZoomIn),
            Key::Character("-" | "_") => self.handle_message(Message::ZoomOut),
            Key::Character("0") => self.handle_message(Message::ResetZoom),
            Key::Character("f" | "F") | Key::Named(Named::F11) => {
                self.handle_message(Message::ToggleFullscreen)
            }
            Key::Named(Named::Escape) if self.is_fullscreen => {
                self.is_fullscreen = false;
                Effect::ExitFullscreen
            }
            Key::Named(Named::Escape) => Effect::BackToGallery,
            _ => Effect::None,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let surface: Element<'a, Message> = match &self.image {
            ImageState::Ready(data) => canvas(ImageSurface::new(data, &self.pan_zoom))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            ImageState::Loading => centered(
                AnimatedSpinner::new(palette::ACCENT_400, self.spinner_rotation).into_element(),
            ),
            ImageState::Unavailable => centered(
                Text::new(i18n.tr("viewer-no-image"))
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_200)
                    .into(),
            ),
            ImageState::Failed(key) => centered(
                Text::new(i18n.tr(key))
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500)
                    .into(),
            ),
        };

        let backdrop = Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::viewer_backdrop);

        let top_bar = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(self.header(i18n))
            .push(Space::new().width(Length::Fill))
            .push(self.controls(i18n));

        let mut overlay = Column::new()
            .padding(spacing::MD)
            .spacing(spacing::SM)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(top_bar)
            .push(Space::new().height(Length::Fill));

        if self.handoff.has_description() {
            let description = scrollable(
                Text::new(self.handoff.description.as_str()).size(typography::BODY),
            )
            .height(Length::Shrink);
            overlay = overlay.push(
                Container::new(description)
                    .padding(spacing::SM)
                    .max_width(sizing::DESCRIPTION_MAX_WIDTH)
                    .max_height(sizing::DESCRIPTION_MAX_HEIGHT)
                    .style(styles::container::overlay_panel),
            );
        }

        if matches!(self.image, ImageState::Ready(_)) {
            overlay = overlay.push(
                Container::new(
                    Container::new(Text::new(i18n.tr("viewer-hint")).size(typography::BODY_SM))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::container::overlay_panel),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
            );
        }

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(overlay)
            .into()
    }

    fn header<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(self.handoff.title.as_str()).size(typography::TITLE_MD);
        let id = Text::new(i18n.tr_with_args("viewer-nasa-id", &[("id", self.handoff.id.as_str())]))
            .size(typography::CAPTION)
            .color(palette::GRAY_200);

        Container::new(Column::new().spacing(spacing::XXS).push(title).push(id))
            .padding(spacing::SM)
            .max_width(sizing::DESCRIPTION_MAX_WIDTH)
            .style(styles::container::overlay_panel)
            .into()
    }

    fn controls<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let scale = format!("{:.0}%", self.pan_zoom.transform().scale * 100.0);
        let fullscreen_key = if self.is_fullscreen {
            "viewer-exit-fullscreen"
        } else {
            "viewer-fullscreen"
        };

        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(control("-".to_string(), Message::ZoomOut))
            .push(
                Container::new(Text::new(scale).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::overlay_panel),
            )
            .push(control("+".to_string(), Message::ZoomIn))
            .push(control(i18n.tr("viewer-reset"), Message::ResetZoom))
            .push(control(i18n.tr(fullscreen_key), Message::ToggleFullscreen))
            .push(control(i18n.tr("viewer-close"), Message::Close))
            .into()
    }
}

fn control<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay_control)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (search, explore).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::ACCENT_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::LG
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Navbar link. `selected` marks the link of the current screen.
pub fn nav_link(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let (background, text_color) = match (selected, status) {
            (true, _) => (Some(palette::ACCENT_500), WHITE),
            (false, button::Status::Hovered) => (
                Some(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::ACCENT_400
                }),
                text,
            ),
            (false, _) => (None, text),
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Floating viewer control over the image.
pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::SPACE_950
        })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Gallery card; the whole card is clickable.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.weak.color;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
        _ => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        },
    };

    button::Style {
        background: Some(Background::Color(base)),
        text_color: theme.palette().text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::LG
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

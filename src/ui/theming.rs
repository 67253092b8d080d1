// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the resulting Iced themes.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Next mode of the navbar toggle: System, Light, Dark, System...
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// i18n key of the toggle label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "navbar-theme-light",
            ThemeMode::Dark => "navbar-theme-dark",
            ThemeMode::System => "navbar-theme-system",
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::custom("Deep Space".to_string(), dark_palette())
        } else {
            Theme::Light
        }
    }
}

fn dark_palette() -> Palette {
    Palette {
        background: palette::SPACE_900,
        text: palette::WHITE,
        primary: palette::ACCENT_400,
        success: palette::SUCCESS_500,
        warning: palette::WARNING_500,
        danger: palette::ERROR_500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let start = ThemeMode::System;
        assert_eq!(start.next(), ThemeMode::Light);
        assert_eq!(start.next().next(), ThemeMode::Dark);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn dark_mode_uses_space_background() {
        let theme = ThemeMode::Dark.theme();
        assert_eq!(theme.palette().background, palette::SPACE_900);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let value = toml::Value::try_from(ThemeMode::Dark).expect("serialize");
        assert_eq!(value.as_str(), Some("dark"));
    }
}

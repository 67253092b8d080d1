// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the application.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Gallery grid breakpoints
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use deep_zoomer::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::SPACE_950
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.76, 0.8);

    // Deep space backgrounds
    pub const SPACE_950: Color = Color::from_rgb(0.02, 0.03, 0.07);
    pub const SPACE_900: Color = Color::from_rgb(0.05, 0.07, 0.13);
    pub const SPACE_800: Color = Color::from_rgb(0.09, 0.11, 0.2);

    // Accent (nebula violet to cyan)
    pub const ACCENT_400: Color = Color::from_rgb(0.55, 0.45, 0.98);
    pub const ACCENT_500: Color = Color::from_rgb(0.43, 0.33, 0.9);
    pub const CYAN_400: Color = Color::from_rgb(0.3, 0.8, 0.95);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const SPINNER: f32 = 48.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const THUMBNAIL_HEIGHT: f32 = 200.0;
    pub const SEARCH_MAX_WIDTH: f32 = 640.0;
    pub const DESCRIPTION_MAX_WIDTH: f32 = 720.0;
    pub const DESCRIPTION_MAX_HEIGHT: f32 = 128.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Layout Breakpoints
// ============================================================================

pub mod layout {
    //! Gallery column count by available width: one column below `SM`,
    //! two below `MD`, three below `LG`, four above.

    pub const SM: f32 = 640.0;
    pub const MD: f32 = 1024.0;
    pub const LG: f32 = 1280.0;
    pub const MAX_COLUMNS: usize = 4;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline on the home screen
    pub const DISPLAY: f32 = 44.0;

    /// Large title - screen headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - app name, viewer title
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - card titles
    pub const TITLE_SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Dates, identifiers
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::SPACE_950,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::SPACE_950,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::SPACE_950,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(layout::SM < layout::MD);
    assert!(layout::MD < layout::LG);
    assert!(layout::MAX_COLUMNS == 4);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}

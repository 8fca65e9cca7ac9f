// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors, neutral scales and skill badge colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent card background
let card_bg = Color {
    a: opacity::SURFACE,
    ..palette::NEUTRAL_800
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Dark surfaces
    pub const NEUTRAL_950: Color = Color::from_rgb(0.039, 0.039, 0.039);
    pub const NEUTRAL_900: Color = Color::from_rgb(0.090, 0.090, 0.090);
    pub const NEUTRAL_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
    pub const NEUTRAL_700: Color = Color::from_rgb(0.251, 0.251, 0.251);

    // Light-mode particle color (#333333)
    pub const PARTICLE_DARK: Color = Color::from_rgb(0.2, 0.2, 0.2);

    // Brand colors (blue scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.576, 0.773, 0.992);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);

    // Skill badge colors (600 shades)
    pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const INDIGO_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const YELLOW_600: Color = Color::from_rgb(0.792, 0.541, 0.016);
    pub const TEAL_600: Color = Color::from_rgb(0.051, 0.580, 0.533);
    pub const PINK_600: Color = Color::from_rgb(0.859, 0.153, 0.467);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Cards and panels floating over the particle layer
    pub const SURFACE: f32 = 0.92;

    /// Base alpha of particle links in dark mode
    pub const LINK_DARK: f32 = 0.3;

    /// Base alpha of particle links in light mode
    pub const LINK_LIGHT: f32 = 0.8;
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
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Header
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const NAV_TAB_WIDTH: f32 = 112.0;
    pub const NAV_TAB_HEIGHT: f32 = 36.0;

    // Content
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const ARTICLE_MAX_WIDTH: f32 = 820.0;
    pub const CARD_WIDTH: f32 = 330.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
    pub const SEARCH_WIDTH: f32 = 320.0;
    pub const TIMELINE_DOT: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: Hero headline
    //! - Titles: Page and section headings
    //! - Body: Primary content text
    //! - Caption: Badges, dates

    /// Hero headline on the About page
    pub const DISPLAY: f32 = 40.0;

    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, logo
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Active skill chip ring
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
    assert!(opacity::LINK_LIGHT > opacity::LINK_DARK);

    // Sizing validation
    assert!(sizing::NAV_TAB_HEIGHT < sizing::HEADER_HEIGHT);
    assert!(sizing::ARTICLE_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
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

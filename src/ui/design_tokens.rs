// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent navigation surface
let nav_bg = Color {
    a: opacity::NAV_SURFACE,
    ..palette::WHITE
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
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover caption scrim over grid tiles.
    pub const CAPTION_SCRIM: f32 = 0.5;
    /// Navigation bar surface over the page.
    pub const NAV_SURFACE: f32 = 0.9;
    /// Lightbox backdrop.
    pub const LIGHTBOX_BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 24.0;

    /// Height of the navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    // Dark-mode switch, regular (inline navigation) variant
    pub const TOGGLE_TRACK_WIDTH: f32 = 56.0;
    pub const TOGGLE_TRACK_HEIGHT: f32 = 28.0;
    pub const TOGGLE_KNOB: f32 = 24.0;

    // Dark-mode switch, compact (narrow navigation) variant
    pub const TOGGLE_TRACK_WIDTH_COMPACT: f32 = 48.0;
    pub const TOGGLE_TRACK_HEIGHT_COMPACT: f32 = 24.0;
    pub const TOGGLE_KNOB_COMPACT: f32 = 20.0;

    /// Maximum width of the lightbox image.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 896.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Brand label in the navigation bar
    pub const BRAND: f32 = 20.0;

    /// Lightbox photo title
    pub const TITLE_MD: f32 = 20.0;

    /// Grid caption title
    pub const TITLE_SM: f32 = 18.0;

    /// Mobile menu entries
    pub const BODY_LG: f32 = 16.0;

    /// Navigation category buttons
    pub const BODY: f32 = 14.0;

    /// Descriptions
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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
    assert!(opacity::CAPTION_SCRIM > 0.0 && opacity::CAPTION_SCRIM < 1.0);
    assert!(opacity::NAV_SURFACE > 0.0 && opacity::NAV_SURFACE < 1.0);

    // Toggle knob must fit inside its track
    assert!(sizing::TOGGLE_KNOB < sizing::TOGGLE_TRACK_HEIGHT);
    assert!(sizing::TOGGLE_KNOB_COMPACT < sizing::TOGGLE_TRACK_HEIGHT_COMPACT);
    assert!(sizing::TOGGLE_TRACK_WIDTH_COMPACT < sizing::TOGGLE_TRACK_WIDTH);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
};

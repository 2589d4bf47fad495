// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens.

## Organization

- **Palette**: Monochrome color ramp
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font and font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Scrim drawn over the home slideshow image
let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

//! Centralized design tokens for the whole interface.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale ramp, darkest to lightest
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2); // body text
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4); // secondary text
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6); // labels
    pub const GRAY_200: Color = Color::from_rgb(0.88, 0.88, 0.88); // separators
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.94); // row rules
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Edge navigation zones when hovered
    pub const EDGE_HOVER: f32 = 0.05;

    /// Scrim over the home slideshow image, keeps white text readable
    pub const SCRIM: f32 = 0.4;

    /// Inactive slide indicators, hovered buttons
    pub const DIMMED: f32 = 0.6;

    /// Hovered navigation links
    pub const HOVER: f32 = 0.7;

    /// De-emphasized text over imagery
    pub const SOFT: f32 = 0.9;

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
    /// Diameter of a slide indicator dot
    pub const INDICATOR_DOT: f32 = 8.0;

    /// Height of a separator line
    pub const HAIRLINE: f32 = 1.0;

    /// Maximum width of the gallery image area
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

    /// Maximum width of the project info block on the home screen
    pub const HOME_INFO_MAX_WIDTH: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for consistent text hierarchy.
    //!
    //! - Display: the home slide title
    //! - Titles: wordmark, panel headings
    //! - Body: primary content text
    //! - Caption: ordinals, small info

    use iced::Font;

    /// Preferred interface typeface, falls back to the system default.
    pub const FONT_NAME: &str = "Archivo";
    pub const FONT: Font = Font::with_name(FONT_NAME);

    /// Display - Home slide title
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Wordmark on the home screen, panel headings
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Wordmark on the project screen, close glyphs
    pub const TITLE_MD: f32 = 24.0;

    /// Large body - Panel body text, detail values
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Navigation links, locations
    pub const BODY: f32 = 14.0;

    /// Small body - Image counter
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Slide ordinals
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Separators, indicator outlines
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const FULL: f32 = 9999.0; // Circular dots
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    assert!(opacity::EDGE_HOVER < opacity::SCRIM);
    assert!(opacity::SCRIM < opacity::DIMMED);
    assert!(opacity::DIMMED < opacity::HOVER);
    assert!(opacity::HOVER < opacity::SOFT);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Color validation
    assert!(palette::GRAY_800.r < palette::GRAY_400.r);
    assert!(palette::GRAY_400.r < palette::GRAY_100.r);
};

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants used to render the chip, grouped the same way as the W3C
Design Tokens categories.

## Organization

- **Palette**: Chip surface, text and accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Chip and control sizes
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Shadow**: Elevation of the floating chip

## Examples

```
use iced_chip::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A translucent chip background
let background = Color {
    a: opacity::SURFACE,
    ..palette::SURFACE
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

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Default chip background.
    pub const SURFACE: Color = Color::from_rgb(0.16, 0.17, 0.2);
    /// Secondary text on the chip (subtitle).
    pub const TEXT_MUTED: Color = Color::from_rgb(0.75, 0.76, 0.8);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Primary buttons and the progress indicator.
    pub const ACCENT: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Chip background - slightly translucent over the window content
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Icon and progress indicator size.
    pub const ICON: f32 = 24.0;

    /// Smallest scale reached by the icon pulse.
    pub const PULSE_MIN_SCALE: f32 = 0.8;

    /// Full pulse cycle, in milliseconds.
    pub const PULSE_PERIOD_MS: u64 = 1_000;

    /// Action button height.
    pub const BUTTON_HEIGHT: f32 = 32.0;

    /// Width of the chip body.
    pub const CHIP_WIDTH: f32 = 360.0;

    /// Height of the chip body with title and subtitle, before buttons.
    pub const CHIP_HEIGHT: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Chip title
    pub const TITLE: f32 = 16.0;

    /// Chip subtitle and button labels
    pub const BODY: f32 = 14.0;

    /// Glyph-based icons
    pub const ICON: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
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

    /// Floating chip elevation.
    pub const CHIP: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::PULSE_MIN_SCALE > 0.0 && sizing::PULSE_MIN_SCALE < 1.0);
    assert!(sizing::PULSE_PERIOD_MS > 0);
    assert!(sizing::CHIP_HEIGHT > sizing::ICON + 2.0 * spacing::SM);
    assert!(sizing::CHIP_WIDTH > sizing::CHIP_HEIGHT);

    // Typography validation
    assert!(typography::TITLE > typography::BODY);
};

// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the rail demo.
//!
//! Dark surfaces with an amber accent. Token colors identify the three token
//! kinds in reaction diagrams.
//!
//! ```
//! use focus_rail::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let glow = Color { a: 0.25, ..palette::AMBER_500 };
//! assert!(spacing::MD > spacing::SM);
//! # let _ = glow;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Page background, #0a0a0c.
    pub const BACKGROUND: Color = Color::from_rgb(0.039, 0.039, 0.047);
    pub const NEUTRAL_900: Color = Color::from_rgb(0.09, 0.09, 0.09);
    pub const NEUTRAL_800: Color = Color::from_rgb(0.15, 0.15, 0.15);
    pub const NEUTRAL_400: Color = Color::from_rgb(0.64, 0.64, 0.64);
    pub const NEUTRAL_200: Color = Color::from_rgb(0.9, 0.9, 0.9);

    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.78);
    pub const AMBER_300: Color = Color::from_rgb(0.988, 0.827, 0.302);
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.62, 0.043);

    pub const TOKEN_BASE: Color = AMBER_400;
    pub const TOKEN_NEUTRON: Color = Color::from_rgb(0.376, 0.647, 0.98);
    pub const TOKEN_PROTON: Color = Color::from_rgb(0.957, 0.447, 0.714);
}

pub mod opacity {
    pub const BORDER: f32 = 0.15;
    pub const SURFACE: f32 = 0.9;
    pub const GLOW: f32 = 0.25;
    pub const RING: f32 = 0.3;
}

// ============================================================================
// Spacing Scale (4px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Base card width; side cards are scaled down from this.
    pub const CARD_WIDTH: f32 = 280.0;
    /// Cards keep a 3:4 aspect ratio.
    pub const CARD_HEIGHT: f32 = CARD_WIDTH * 4.0 / 3.0;
    pub const STAGE_HEIGHT: f32 = 420.0;
    pub const TOKEN_SIZE: f32 = 56.0;
    /// Height of the scroll-driven explainer, in multiples of the viewport.
    pub const SCROLL_TRACK_SCREENS: f32 = 4.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::BORDER > 0.0 && opacity::BORDER < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::STAGE_HEIGHT >= sizing::CARD_HEIGHT);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};

// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**: border width scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    // Brand colors (green scale, the Tujiinue identity color)
    pub const PRIMARY_400: Color = Color::from_rgb(0.204, 0.827, 0.6);
    pub const PRIMARY_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const PRIMARY_600: Color = Color::from_rgb(0.02, 0.588, 0.412);
    pub const PRIMARY_700: Color = Color::from_rgb(0.016, 0.471, 0.341);

    // Accent (the hero highlight yellow)
    pub const ACCENT_400: Color = Color::from_rgb(0.98, 0.8, 0.082);

    // Semantic colors, one per notification kind
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.247, 0.369);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.62, 0.043);
    pub const INFO_500: Color = Color::from_rgb(0.055, 0.647, 0.914);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Fixed width of a toast card.
    pub const TOAST_WIDTH: f32 = 340.0;
    /// Maximum width of page content before it stops growing.
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;
    /// Width of a form input column.
    pub const FORM_WIDTH: f32 = 420.0;
}

pub mod typography {
    pub const HERO: f32 = 40.0;
    pub const TITLE: f32 = 28.0;
    pub const SUBTITLE: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_colors_are_distinct() {
        let colors = [
            palette::SUCCESS_500,
            palette::ERROR_500,
            palette::WARNING_500,
            palette::INFO_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
            spacing::XXL,
        ];
        assert!(scale.windows(2).all(|w| w[0] < w[1]));
    }
}

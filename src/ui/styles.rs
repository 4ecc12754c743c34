// SPDX-License-Identifier: MPL-2.0
//! Shared widget style functions.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Color, Theme};

/// Filled call-to-action button in the brand color.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Disabled => Color {
            a: 0.5,
            ..palette::PRIMARY_600
        },
        button::Status::Active => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined secondary button.
pub fn outline_button(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(Color {
            a: 0.1,
            ..palette::PRIMARY_500
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base_text,
        border: iced::Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

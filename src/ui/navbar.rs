// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown at the top of every screen.

use crate::app::Screen;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Container, Row},
    Color, Element, Length, Theme,
};

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Switch to the selected screen.
    Navigate(Screen),
    /// Flip between the light and dark appearance.
    ToggleTheme,
}

/// Render the navigation bar with the active screen highlighted.
///
/// `dark` selects the theme toggle glyph: a moon invites switching to
/// dark mode, a sun invites switching back.
pub fn view(active: Screen, dark: bool) -> Element<'static, Message> {
    let brand = text("Tujiinue Mashinani")
        .size(typography::SUBTITLE)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_600),
        });

    let mut items = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for screen in Screen::ALL {
        let is_active = screen == active;
        let item = button(text(screen.label()).size(typography::BODY))
            .on_press(Message::Navigate(screen))
            .padding([spacing::XXS, spacing::SM])
            .style(move |theme: &Theme, status| nav_button_style(theme, status, is_active));
        items = items.push(item);
    }

    let glyph = if dark { "\u{2600}" } else { "\u{263E}" };
    let theme_toggle = button(text(glyph).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| theme_toggle_style(theme, status, dark));

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(items)
        .push(theme_toggle);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(navbar_container_style)
        .into()
}

fn navbar_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        shadow: shadow::MD,
        ..Default::default()
    }
}

fn theme_toggle_style(theme: &Theme, status: button::Status, dark: bool) -> button::Style {
    // The sun glyph carries the accent yellow, like the original site
    let text_color = if dark {
        palette::ACCENT_400
    } else {
        theme.extended_palette().background.base.text
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(Color {
            a: 0.15,
            ..palette::PRIMARY_500
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn nav_button_style(theme: &Theme, status: button::Status, is_active: bool) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;

    let (background, text_color) = if is_active {
        (
            Some(iced::Background::Color(palette::PRIMARY_600)),
            palette::WHITE,
        )
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => (
                Some(iced::Background::Color(Color {
                    a: 0.15,
                    ..palette::PRIMARY_500
                })),
                base_text,
            ),
            _ => (None, base_text),
        }
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

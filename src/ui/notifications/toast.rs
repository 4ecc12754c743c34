// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are solid cards in the color of their kind with white text
//! and a dismiss button.

use super::center::{Message, NotificationCenter};
use super::notification::Notification;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// Elements are `'static`: the card owns its strings, so the overlay
    /// can be built from a transient borrow of the center.
    pub fn view(notification: &Notification) -> Element<'static, Message> {
        let kind = notification.kind();
        let card_color = kind.color();

        let heading = Text::new(kind.label())
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let message_widget = Text::new(notification.message().to_owned())
            .size(typography::CAPTION)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            });

        let body = Column::new()
            .spacing(spacing::XXS)
            .push(heading)
            .push(message_widget);

        let notification_id = notification.id();
        let dismiss_button = button(text("\u{2715}").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [heading + message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(card_color))
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Positions toasts in the top-right corner, oldest first, stacked
    /// vertically. The surrounding UI stacks this over the page content.
    pub fn view_overlay(center: &NotificationCenter) -> Element<'static, Message> {
        let toasts: Vec<Element<'static, Message>> =
            center.active().map(Self::view).collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Solid card in the kind's color, independent of the active theme.
fn toast_container_style(card_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(card_color)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dismiss button over the colored card: white glyph, a translucent
/// white wash on hover and press.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Programs screen: the cards describing each outreach program.

use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{container, text, Column, Container, Row},
    Element, Length, Theme,
};

const PROGRAMS: [(&str, &str); 3] = [
    (
        "Health Education",
        "Workshops on hygiene, disease prevention, and nutrition",
    ),
    (
        "Community Outreach",
        "Pads donation as a way of communal menstrual health management",
    ),
    (
        "Youth Empowerment",
        "Appreciating talent and empowering youths through prizes in tournaments",
    ),
];

/// Renders the programs screen.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let title = text("Our Programs").size(typography::TITLE);
    let subtitle = text("Creating impact where it matters most").size(typography::BODY);

    let mut cards = Row::new().spacing(spacing::MD);
    for (name, description) in PROGRAMS {
        cards = cards.push(program_card(name, description));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(cards);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn program_card<'a, Message: 'a>(name: &'a str, description: &'a str) -> Element<'a, Message> {
    let name_text = text(name)
        .size(typography::SUBTITLE)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_600),
        });

    let card = Column::new()
        .spacing(spacing::XS)
        .push(name_text)
        .push(text(description).size(typography::CAPTION));

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: palette::PRIMARY_400,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        })
        .into()
}

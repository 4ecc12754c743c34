// SPDX-License-Identifier: MPL-2.0
//! About screen: mission statement and impact numbers.

use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{container, text, Column, Container, Row},
    Element, Length, Theme,
};

const MISSION: &str = "Tujiinue Mashinani is an outreach grassroots movement dedicated to \
empowering local communities across Kenya through education, awareness campaigns, and \
sustainable development initiatives.";

const FOUNDING: &str = "Founded in 2020, we've reached over 50,000 people in 12 counties, \
focusing on health education, environmental conservation, and economic empowerment.";

const STATS: [(&str, &str); 4] = [
    ("50K+", "People Reached"),
    ("12", "Counties"),
    ("200+", "Workshops"),
    ("15", "Local Partners"),
];

/// Renders the about screen.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let title = text("Who We Are").size(typography::TITLE);
    let subtitle = text("Making a difference in Kenyan communities").size(typography::BODY);

    let mission_heading = text("Our Mission")
        .size(typography::SUBTITLE)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_600),
        });

    let mut stats_row = Row::new().spacing(spacing::MD);
    for (value, label) in STATS {
        stats_row = stats_row.push(stat_card(value, label));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(mission_heading)
        .push(text(MISSION).size(typography::BODY))
        .push(text(FOUNDING).size(typography::BODY))
        .push(stats_row);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn stat_card<'a, Message: 'a>(value: &'a str, label: &'a str) -> Element<'a, Message> {
    let value_text = text(value)
        .size(typography::TITLE)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_600),
        });

    let card = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(value_text)
        .push(text(label).size(typography::CAPTION));

    Container::new(card)
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        })
        .into()
}

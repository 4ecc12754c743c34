// SPDX-License-Identifier: MPL-2.0
//! FAQ screen with expandable question/answer items.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container, Row},
    Element, Length, Theme,
};

const ITEMS: [(&str, &str); 4] = [
    (
        "How can I get involved with Tujiinue Mashinani?",
        "We welcome volunteers! You can join our programs, help organize events, or \
         contribute your skills. Visit our 'Get Involved' page to learn more.",
    ),
    (
        "Where does Tujiinue Mashinani operate?",
        "We currently work in 12 counties across Kenya, with plans to expand. Our focus \
         is on underserved rural and urban communities.",
    ),
    (
        "How is our organization funded?",
        "We rely on grants, donations, and partnerships with local businesses and \
         international NGOs. All donations go directly to our programs.",
    ),
    (
        "Can I request a workshop for my community?",
        "Absolutely! We prioritize communities that reach out to us. Contact our team \
         with details about your community's needs.",
    ),
];

/// FAQ screen state: which item is expanded, if any.
#[derive(Debug, Default)]
pub struct State {
    expanded: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Toggle an item open or closed.
    Toggle(usize),
}

/// Processes an FAQ message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Toggle(index) => {
            state.expanded = if state.expanded == Some(index) {
                None
            } else {
                Some(index)
            };
        }
    }
}

/// Renders the FAQ screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let title = text("Frequently Asked Questions").size(typography::TITLE);
    let subtitle = text("Get answers to common questions").size(typography::BODY);

    let mut items = Column::new().spacing(spacing::XS);
    for (index, (question, answer)) in ITEMS.into_iter().enumerate() {
        items = items.push(faq_item(index, question, answer, state.expanded == Some(index)));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(items);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn faq_item<'a>(
    index: usize,
    question: &'a str,
    answer: &'a str,
    expanded: bool,
) -> Element<'a, Message> {
    let chevron = if expanded { "\u{25B4}" } else { "\u{25BE}" };
    let header_row = Row::new()
        .push(Container::new(text(question).size(typography::BODY)).width(Length::Fill))
        .push(
            text(chevron)
                .size(typography::BODY)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_600),
                }),
        );

    let header = button(header_row)
        .on_press(Message::Toggle(index))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(header_button_style);

    let mut item = Column::new().push(header);
    if expanded {
        item = item.push(
            Container::new(text(answer).size(typography::CAPTION))
                .padding([spacing::SM, spacing::SM]),
        );
    }

    Container::new(item)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            border: iced::Border {
                color: theme.extended_palette().background.strong.color,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn header_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.extended_palette().background.base.text,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: crate::ui::design_tokens::shadow::NONE,
        snap: true,
    }
}

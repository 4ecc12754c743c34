// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen under the navbar, with the toast overlay
//! stacked on top of everything.

use super::{Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{about, contact, faq, home, navbar, programs};
use chrono::Datelike;
use iced::{
    alignment::Horizontal,
    widget::{scrollable, text, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub home: &'a home::State,
    pub faq: &'a faq::State,
    pub contact: &'a contact::State,
    /// Whether the effective theme is dark, for the navbar toggle glyph.
    pub dark: bool,
}

/// Renders the current screen with the toast overlay on top.
///
/// The overlay is built by the caller from the notification center and
/// owns its content, so it carries no borrow of the center.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    toast_overlay: Element<'a, Message>,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.screen {
        Screen::Home => home::view(ctx.home).map(Message::Home),
        Screen::About => about::view(),
        Screen::Programs => programs::view(),
        Screen::Faq => faq::view(ctx.faq).map(Message::Faq),
        Screen::Contact => contact::view(ctx.contact).map(Message::Contact),
    };

    let page = Column::new()
        .push(navbar::view(ctx.screen, ctx.dark).map(Message::Navbar))
        .push(
            scrollable(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer());

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(toast_overlay)
        .into()
}

fn footer() -> Element<'static, Message> {
    let year = chrono::Local::now().year();
    let line = text(format!(
        "\u{00A9} {year} Tujiinue Mashinani. All rights reserved."
    ))
    .size(typography::CAPTION);

    Container::new(line)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::SM)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero banner and the newsletter subscription form.

use crate::app::Screen;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Notifier, NotifierError};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, text_input, Column, Container, Row},
    Element, Length, Theme,
};

/// Home screen state: the newsletter form input.
#[derive(Debug, Default)]
pub struct State {
    email: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Subscribe,
    ExplorePrograms,
    JoinUs,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Processes a home screen message.
///
/// The notifier is injected by the application; emission failures bubble
/// up so the caller can surface them.
pub fn update(
    state: &mut State,
    message: Message,
    notifier: &Notifier,
) -> Result<Event, NotifierError> {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            Ok(Event::None)
        }
        Message::Subscribe => {
            let email = state.email.trim();
            if email.is_empty() {
                notifier.error("please enter your email address")?;
            } else if !looks_like_email(email) {
                notifier.error("please enter a valid email address")?;
            } else {
                notifier.success("thank you for subscribing to our newsletter")?;
                state.email.clear();
            }
            Ok(Event::None)
        }
        Message::ExplorePrograms => Ok(Event::Navigate(Screen::Programs)),
        Message::JoinUs => Ok(Event::Navigate(Screen::Contact)),
    }
}

/// Minimal plausibility check; real validation belongs to the (absent)
/// mailing list backend.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Renders the home screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let hero = hero();
    let newsletter = newsletter(state);

    let content = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .push(hero)
        .push(newsletter);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

fn hero() -> Element<'static, Message> {
    // Two-tone headline: the middle word carries the accent color
    let title = Row::new()
        .push(text("Empowering ").size(typography::HERO).style(
            |_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::PRIMARY_600),
            },
        ))
        .push(text("Kenyan").size(typography::HERO).style(
            |_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::ACCENT_400),
            },
        ))
        .push(text(" Communities").size(typography::HERO).style(
            |_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::PRIMARY_600),
            },
        ));

    let tagline = text("Education \u{2022} Awareness \u{2022} Sustainable Development")
        .size(typography::SUBTITLE)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(text("Our Programs").size(typography::BODY))
                .on_press(Message::ExplorePrograms)
                .padding([spacing::SM, spacing::LG])
                .style(styles::primary_button),
        )
        .push(
            button(text("Join Us").size(typography::BODY))
                .on_press(Message::JoinUs)
                .padding([spacing::SM, spacing::LG])
                .style(styles::outline_button),
        );

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(tagline)
        .push(actions)
        .into()
}

fn newsletter(state: &State) -> Element<'_, Message> {
    let heading = text("Stay Connected").size(typography::TITLE);
    let blurb = text(
        "Subscribe to our newsletter for updates on our programs and community impact.",
    )
    .size(typography::BODY);

    let input = text_input("Your email address", &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Subscribe)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH));

    let subscribe = button(text("Subscribe").size(typography::BODY))
        .on_press(Message::Subscribe)
        .padding([spacing::SM, spacing::LG])
        .style(styles::primary_button);

    let form = Row::new().spacing(spacing::XS).push(input).push(subscribe);

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(blurb)
        .push(form)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{shared, Kind, NotificationCenter, Notifier};

    fn fixture() -> (crate::ui::notifications::SharedCenter, Notifier) {
        let center = shared(NotificationCenter::new());
        let notifier = Notifier::bound(&center);
        (center, notifier)
    }

    #[test]
    fn subscribe_with_valid_email_emits_success_and_clears() {
        let (center, notifier) = fixture();
        let mut state = State {
            email: "amina@example.org".to_string(),
        };

        update(&mut state, Message::Subscribe, &notifier).expect("bound notifier");

        let center = center.borrow();
        let active: Vec<_> = center.active().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind(), Kind::Success);
        assert_eq!(
            active[0].message(),
            "thank you for subscribing to our newsletter"
        );
        assert!(state.email.is_empty());
    }

    #[test]
    fn subscribe_with_empty_email_emits_error_and_keeps_input() {
        let (center, notifier) = fixture();
        let mut state = State::default();

        update(&mut state, Message::Subscribe, &notifier).expect("bound notifier");

        let center = center.borrow();
        assert_eq!(center.active().next().map(|n| n.kind()), Some(Kind::Error));
    }

    #[test]
    fn subscribe_with_implausible_email_emits_error() {
        let (center, notifier) = fixture();
        let mut state = State {
            email: "not-an-address".to_string(),
        };

        update(&mut state, Message::Subscribe, &notifier).expect("bound notifier");

        let center = center.borrow();
        assert_eq!(center.active().next().map(|n| n.kind()), Some(Kind::Error));
        assert_eq!(state.email, "not-an-address");
    }

    #[test]
    fn subscribe_without_center_fails_and_mutates_nothing() {
        let notifier = Notifier::unbound();
        let mut state = State {
            email: "amina@example.org".to_string(),
        };

        let result = update(&mut state, Message::Subscribe, &notifier);
        assert!(result.is_err());
        assert_eq!(state.email, "amina@example.org");
    }

    #[test]
    fn hero_buttons_navigate() {
        let (_center, notifier) = fixture();
        let mut state = State::default();

        let event = update(&mut state, Message::ExplorePrograms, &notifier).expect("no emission");
        assert!(matches!(event, Event::Navigate(Screen::Programs)));

        let event = update(&mut state, Message::JoinUs, &notifier).expect("no emission");
        assert!(matches!(event, Event::Navigate(Screen::Contact)));
    }

    #[test]
    fn email_plausibility_check() {
        assert!(looks_like_email("amina@example.org"));
        assert!(!looks_like_email("amina"));
        assert!(!looks_like_email("@example.org"));
        assert!(!looks_like_email("amina@example."));
        assert!(!looks_like_email("amina@examplecom"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Contact screen: message form with a mocked submission flow.
//!
//! There is no mail backend; submission resolves after a short delay so
//! the UI flow (disable button, then confirm with a toast) matches the
//! real experience.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Notifier, NotifierError};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, text_input, Column, Container, Row},
    Element, Length, Task,
};
use std::time::Duration;

/// Simulated round-trip time of the mocked submission.
const SUBMIT_DELAY_MS: u64 = 1500;

/// Contact form state.
#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    body: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyChanged(String),
    Submit,
    Submitted(Result<(), String>),
}

/// Outcome of a contact update: an optional follow-up task.
pub enum Action {
    None,
    Run(Task<Message>),
}

/// Processes a contact screen message.
pub fn update(
    state: &mut State,
    message: Message,
    notifier: &Notifier,
) -> Result<Action, NotifierError> {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            Ok(Action::None)
        }
        Message::EmailChanged(email) => {
            state.email = email;
            Ok(Action::None)
        }
        Message::BodyChanged(body) => {
            state.body = body;
            Ok(Action::None)
        }
        Message::Submit => {
            if state.submitting {
                notifier.info("your message is already on its way")?;
                return Ok(Action::None);
            }
            if state.name.trim().is_empty()
                || state.email.trim().is_empty()
                || state.body.trim().is_empty()
            {
                notifier.warning("please fill in all fields before sending")?;
                return Ok(Action::None);
            }

            state.submitting = true;
            Ok(Action::Run(submit_task()))
        }
        Message::Submitted(result) => {
            state.submitting = false;
            match result {
                Ok(()) => {
                    state.name.clear();
                    state.email.clear();
                    state.body.clear();
                    notifier.success("thank you for your feedback we appreciate you")?;
                }
                Err(reason) => {
                    log::warn!("contact submission failed: {reason}");
                    notifier.error("something went wrong, please try again later")?;
                }
            }
            Ok(Action::None)
        }
    }
}

/// Mock submission: resolves successfully after a fixed delay.
fn submit_task() -> Task<Message> {
    Task::future(async {
        tokio::time::sleep(Duration::from_millis(SUBMIT_DELAY_MS)).await;
        Message::Submitted(Ok(()))
    })
}

/// Renders the contact screen.
pub fn view(state: &State) -> Element<'_, Message> {
    let title = text("Get In Touch").size(typography::TITLE);
    let subtitle = text("We'd love to hear from you! Reach out through any of these channels.")
        .size(typography::BODY);

    let heading = text("Send Us a Message").size(typography::SUBTITLE);

    let name_input = text_input("Your Name", &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH));

    let email_input = text_input("Email Address", &state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH));

    let body_input = text_input("Your Message", &state.body)
        .on_input(Message::BodyChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH));

    let send_label = if state.submitting {
        "Sending..."
    } else {
        "Send Message"
    };
    let send = button(text(send_label).size(typography::BODY))
        .on_press_maybe((!state.submitting).then_some(Message::Submit))
        .padding([spacing::SM, spacing::LG])
        .style(styles::primary_button);

    let form = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(name_input)
        .push(email_input)
        .push(body_input)
        .push(send);

    let details = Row::new()
        .spacing(spacing::LG)
        .push(text("Nairobi, Kenya").size(typography::CAPTION))
        .push(text("info@tujiinuemashinani.org").size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(subtitle)
        .push(form)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::XL)
        .into()
}

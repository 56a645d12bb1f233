// SPDX-License-Identifier: MPL-2.0
//! Navigation bar above the scans.
//!
//! Holds the First / Previous / Next / Last buttons, the go-to input, the
//! position title and the Save button.

use crate::i18n::fluent::I18n;
use crate::session::Command;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub goto_input: &'a str,
    /// `"current/total"`.
    pub position: &'a str,
    /// No document exists yet for the displayed item.
    pub is_new: bool,
    pub has_items: bool,
    pub can_save: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    First,
    Previous,
    Next,
    Last,
    GotoInputChanged(String),
    GotoSubmitted,
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A navigation command to run on the session.
    Navigate(Command),
    /// The form should be collected and saved.
    SaveRequested,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, goto_input: &mut String) -> Event {
    match message {
        Message::First => Event::Navigate(Command::First),
        Message::Previous => Event::Navigate(Command::Previous),
        Message::Next => Event::Navigate(Command::Next),
        Message::Last => Event::Navigate(Command::Last),
        Message::GotoInputChanged(value) => {
            *goto_input = value;
            Event::None
        }
        Message::GotoSubmitted => Event::Navigate(Command::GoTo(goto_input.clone())),
        Message::Save => Event::SaveRequested,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let nav_button = |key: &str, message: Message| {
        let btn = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .padding(spacing::XS)
            .style(styles::button::navigation);
        if ctx.has_items {
            btn.on_press(message)
        } else {
            btn
        }
    };

    let goto_input = text_input(&ctx.i18n.tr("goto-placeholder"), ctx.goto_input)
        .on_input(Message::GotoInputChanged)
        .on_submit(Message::GotoSubmitted)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::GOTO_INPUT_WIDTH));

    let mut title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("position-title", &[("position", ctx.position)]),
            )
            .size(typography::TITLE_MD),
        );
    if ctx.is_new {
        title = title.push(
            Text::new(format!("({})", ctx.i18n.tr("position-new-record")))
                .size(typography::CAPTION),
        );
    }

    let save = button(Text::new(ctx.i18n.tr("action-save")).size(typography::BODY))
        .padding(spacing::XS)
        .style(styles::button::primary);
    let save = if ctx.can_save {
        save.on_press(Message::Save)
    } else {
        save
    };

    let bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(nav_button("action-first", Message::First))
        .push(nav_button("action-previous", Message::Previous))
        .push(nav_button("action-next", Message::Next))
        .push(nav_button("action-last", Message::Last))
        .push(Space::new().width(Length::Fixed(spacing::MD)))
        .push(goto_input)
        .push(nav_button("action-goto", Message::GotoSubmitted))
        .push(Space::new().width(Length::Fill))
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(save);

    Container::new(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are translated into the same navbar messages the
//! buttons emit, so both paths share one handler.

use super::Message;
use crate::ui::navbar;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes keyboard shortcuts to the navbar.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event {
            return shortcut(key, *modifiers).map(Message::Navbar);
        }
        None
    })
}

/// Maps a key press to the action it triggers, if any.
///
/// - `Ctrl+S` (`Cmd+S` on macOS): save
/// - `Alt+Left` / `Alt+Right`: previous / next
/// - `Alt+Home` / `Alt+End`: first / last
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<navbar::Message> {
    match key {
        Key::Character(c) if modifiers.command() && c.as_str().eq_ignore_ascii_case("s") => {
            Some(navbar::Message::Save)
        }
        Key::Named(named) if modifiers.alt() => match named {
            Named::ArrowLeft => Some(navbar::Message::Previous),
            Named::ArrowRight => Some(navbar::Message::Next),
            Named::Home => Some(navbar::Message::First),
            Named::End => Some(navbar::Message::Last),
            _ => None,
        },
        _ => None,
    }
}

/// Ticks while notifications are visible so they can auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

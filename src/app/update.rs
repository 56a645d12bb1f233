// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::navigation::Boundary;
use crate::session::{Command, Outcome};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar_message) => handle_navbar_message(app, navbar_message),
        Message::Form(form_message) => {
            app.form.update(form_message);
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
        }
        Message::Tick(_) => {
            app.notifications.tick();
        }
    }
    Task::none()
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) {
    match navbar::update(message, &mut app.goto_input) {
        NavbarEvent::None => {}
        NavbarEvent::Navigate(command) => run_command(app, command),
        NavbarEvent::SaveRequested => {
            let record = app.form.collect();
            run_command(app, Command::Save(record));
        }
    }
}

fn run_command(app: &mut App, command: Command) {
    let is_goto = matches!(command, Command::GoTo(_));

    match app.session.dispatch(command) {
        Ok(Outcome::Moved { transition, view }) => {
            app.notifications.clear_item_errors();
            match transition.boundary {
                Some(Boundary::First) => app
                    .notifications
                    .push(Notification::info("notification-boundary-first")),
                Some(Boundary::Last) => app
                    .notifications
                    .push(Notification::info("notification-boundary-last")),
                None => {}
            }
            if is_goto {
                app.goto_input.clear();
            }
            app.show(view);
        }
        Ok(Outcome::Saved { index, path }) => {
            tracing::debug!(index, path = %path.display(), "record saved");
            app.form.mark_saved();
            app.is_new = false;
            let file = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            app.notifications
                .push(Notification::success("notification-save-success").with_arg("file", file));
        }
        Err(err) => {
            app.notifications.push(Notification::from_error(&err));
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the editing [`Session`] to the widgets: it turns
//! navbar and form messages into session commands and pushes the resulting
//! record and scans back into the form and image panes.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::record::{discovery, RecordStore};
use crate::session::{Session, View};
use crate::ui::form::FormState;
use crate::ui::image_pane::ImagePanes;
use crate::ui::notifications::{self, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    form: FormState,
    images: ImagePanes,
    /// `"current/total"` of the displayed item.
    position: String,
    /// No document exists yet for the displayed item.
    is_new: bool,
    goto_input: String,
    /// Resolved from the configured mode at startup.
    theme: Theme,
    /// Display width of each scan, in pixels.
    image_width: u32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("is_new", &self.is_new)
            .field("has_changes", &self.form.has_changes())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 1000;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1720;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config file and opens the collection named by the flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags, &config);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the application from an already loaded config.
    ///
    /// The working root is the `--root` flag, then `[collection] root`, then
    /// the current directory.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut notifications = notifications::Manager::new();

        let root = flags
            .root
            .map(PathBuf::from)
            .or_else(|| config.collection.root.clone())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let store = RecordStore::new(root, config.collection.layout());

        let images_dir = store.images_dir();
        let total = match discovery::count_items(&images_dir) {
            Ok(total) => {
                if total == 0 {
                    notifications.push(
                        Notification::warning("notification-empty-collection")
                            .with_arg("path", images_dir.display().to_string()),
                    );
                }
                total
            }
            Err(err) => {
                tracing::warn!(dir = %images_dir.display(), error = %err, "cannot scan images");
                notifications.push(
                    Notification::warning("notification-collection-scan-error")
                        .with_arg("path", images_dir.display().to_string())
                        .with_arg("details", err.to_string()),
                );
                0
            }
        };

        let (session, view) = Session::open(store, total);
        let mut app = Self {
            i18n,
            images: ImagePanes::load(&view.images),
            form: FormState::new(&view.record),
            position: view.position.clone(),
            is_new: view.is_new,
            session,
            goto_input: String::new(),
            theme: config.general.theme_mode.theme(),
            image_width: config.display.image_width(),
            notifications,
        };
        if let Some(err) = &view.load_error {
            app.notifications.push(Notification::from_error(err));
        }
        app
    }

    /// Replaces the displayed item.
    fn show(&mut self, view: View) {
        if self.form.has_changes() {
            tracing::debug!(position = %self.position, "discarding unsaved edits");
        }
        self.form.populate(&view.record);
        self.images = ImagePanes::load(&view.images);
        self.position = view.position;
        self.is_new = view.is_new;

        if let Some(err) = &view.load_error {
            self.notifications.push(Notification::from_error(err));
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let position = self
            .i18n
            .tr_with_args("position-title", &[("position", self.position.as_str())]);

        if self.form.has_changes() {
            format!("*{position} - {app_name}")
        } else {
            format!("{position} - {app_name}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navbar: crate::ui::navbar::ViewContext {
                i18n: &self.i18n,
                goto_input: &self.goto_input,
                position: &self.position,
                is_new: self.is_new,
                has_items: !self.session.navigator().is_empty(),
                can_save: self.session.can_save(),
            },
            form: &self.form,
            images: &self.images,
            image_width: self.image_width,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Record};
    use crate::ui::{form, navbar};
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    fn collection(items: usize) -> TempDir {
        let dir = tempdir().expect("temp dir");
        let images = dir.path().join("cropped");
        fs::create_dir_all(&images).expect("create images dir");
        for n in 1..=items {
            fs::write(images.join(format!("{n}_recto_cropped.jpg")), b"x").expect("write");
            fs::write(images.join(format!("{n}_verso_cropped.jpg")), b"x").expect("write");
        }
        dir
    }

    fn app_for(root: &Path) -> App {
        App::with_config(
            Flags {
                lang: Some("en-US".into()),
                root: Some(root.display().to_string()),
                config_dir: None,
            },
            &Config::default(),
        )
    }

    fn nav(app: &mut App, message: navbar::Message) {
        let _ = app.update(Message::Navbar(message));
    }

    #[test]
    fn opens_on_first_item() {
        let dir = collection(3);
        let app = app_for(dir.path());

        assert_eq!(app.position, "1/3");
        assert!(app.is_new);
        assert_eq!(app.title(), "Image 1/3 - Recto Verso");
    }

    #[test]
    fn navigation_updates_position() {
        let dir = collection(5);
        let mut app = app_for(dir.path());

        nav(&mut app, navbar::Message::Next);
        nav(&mut app, navbar::Message::Next);
        nav(&mut app, navbar::Message::Previous);
        assert_eq!(app.position, "2/5");

        nav(&mut app, navbar::Message::Last);
        assert_eq!(app.position, "5/5");

        nav(&mut app, navbar::Message::First);
        assert_eq!(app.position, "1/5");
    }

    #[test]
    fn boundary_move_shows_info() {
        let dir = collection(2);
        let mut app = app_for(dir.path());

        nav(&mut app, navbar::Message::Previous);
        assert_eq!(app.position, "1/2");
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-boundary-first"));
    }

    #[test]
    fn repeated_boundary_moves_keep_a_single_toast() {
        let dir = collection(2);
        let mut app = app_for(dir.path());

        nav(&mut app, navbar::Message::Last);
        for _ in 0..30 {
            nav(&mut app, navbar::Message::Next);
        }

        assert_eq!(app.position, "2/2");
        assert_eq!(app.notifications.queued_count(), 0);
        let boundary_toasts = app
            .notifications
            .visible()
            .filter(|n| n.message_key() == "notification-boundary-last")
            .count();
        assert_eq!(boundary_toasts, 1);
    }

    #[test]
    fn theme_follows_configured_mode() {
        let dir = collection(1);
        let mut config = Config::default();
        config.general.theme_mode = crate::ui::theming::ThemeMode::Light;

        let app = App::with_config(
            Flags {
                lang: Some("en-US".into()),
                root: Some(dir.path().display().to_string()),
                config_dir: None,
            },
            &config,
        );

        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn edit_and_save_writes_document() {
        let dir = collection(2);
        let mut app = app_for(dir.path());

        let _ = app.update(Message::Form(form::Message::FieldChanged(
            Field::Emetteur,
            "Émile".into(),
        )));
        assert!(app.title().starts_with('*'));

        nav(&mut app, navbar::Message::Save);
        assert!(!app.title().starts_with('*'));
        assert!(!app.is_new);

        let written =
            fs::read_to_string(dir.path().join("metadata/1_metadata.json")).expect("read back");
        assert!(written.contains("\"Emetteur\":\"Émile\""));
    }

    #[test]
    fn saved_record_is_shown_again_after_navigation() {
        let dir = collection(2);
        let mut app = app_for(dir.path());

        let _ = app.update(Message::Form(form::Message::FieldChanged(
            Field::Date,
            "1917".into(),
        )));
        nav(&mut app, navbar::Message::Save);
        nav(&mut app, navbar::Message::Next);
        assert!(app.form.collect().is_blank());

        nav(&mut app, navbar::Message::Previous);
        assert_eq!(app.form.value(Field::Date), "1917");
    }

    #[test]
    fn invalid_goto_keeps_position_and_reports_error() {
        let dir = collection(5);
        let mut app = app_for(dir.path());

        nav(&mut app, navbar::Message::GotoInputChanged("abc".into()));
        nav(&mut app, navbar::Message::GotoSubmitted);
        assert_eq!(app.position, "1/5");

        nav(&mut app, navbar::Message::GotoInputChanged("9".into()));
        nav(&mut app, navbar::Message::GotoSubmitted);
        assert_eq!(app.position, "1/5");

        let keys: Vec<_> = app
            .notifications
            .visible()
            .map(|n| n.message_key().to_string())
            .collect();
        assert!(keys.contains(&"error-goto-not-a-number".to_string()));
        assert!(keys.contains(&"error-goto-out-of-range".to_string()));

        for _ in 0..10 {
            nav(&mut app, navbar::Message::GotoSubmitted);
        }
        assert_eq!(app.notifications.visible_count(), 2);
        assert_eq!(app.notifications.queued_count(), 0);

        nav(&mut app, navbar::Message::GotoInputChanged("3".into()));
        nav(&mut app, navbar::Message::GotoSubmitted);
        assert_eq!(app.position, "3/5");
        assert!(app.goto_input.is_empty());
    }

    #[test]
    fn malformed_document_blocks_save() {
        let dir = collection(1);
        let metadata = dir.path().join("metadata");
        fs::create_dir_all(&metadata).expect("create metadata dir");
        fs::write(metadata.join("1_metadata.json"), "{ broken").expect("write");

        let mut app = app_for(dir.path());
        assert!(!app.session.can_save());
        assert!(app.form.collect().is_blank());

        nav(&mut app, navbar::Message::Save);
        let on_disk = fs::read_to_string(metadata.join("1_metadata.json")).expect("read");
        assert_eq!(on_disk, "{ broken");
    }

    #[test]
    fn missing_image_directory_opens_empty() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_for(dir.path());

        assert_eq!(app.position, "0/0");
        assert!(app
            .notifications
            .visible()
            .any(|n| n.message_key() == "notification-collection-scan-error"));

        nav(&mut app, navbar::Message::Save);
        assert!(!dir.path().join("metadata").exists());
    }

    #[test]
    fn existing_document_populates_form() {
        let dir = collection(1);
        let store = RecordStore::new(dir.path(), Default::default());
        let mut record = Record::default();
        record.set(Field::Contenu, "Chère amie,\nà bientôt".into());
        store.write(0, &record).expect("write");

        let app = app_for(dir.path());
        assert!(!app.is_new);
        assert_eq!(app.form.collect(), record);
    }
}

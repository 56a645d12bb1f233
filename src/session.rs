// SPDX-License-Identifier: MPL-2.0
//! Editing session over one collection.
//!
//! The session owns the [`RecordStore`] and the [`Navigator`]. User actions
//! arrive as [`Command`]s and are routed to one handler each. Every
//! navigation step, clamped or not, reloads the record and image paths of the
//! resulting index so the form always reflects what is on disk.

use crate::error::{Error, Result};
use crate::navigation::{Navigator, Transition};
use crate::record::{ImagePair, Record, RecordStore};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Actions a user can trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    First,
    Previous,
    Next,
    Last,
    /// Jump to a 1-based position typed by the user.
    GoTo(String),
    /// Persist the given record at the current index.
    Save(Record),
}

/// Everything needed to display one item.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub index: usize,
    /// `"current/total"` position indicator.
    pub position: String,
    pub images: ImagePair,
    /// Record to show in the form. Blank when `load_error` is set.
    pub record: Record,
    /// True when no document exists yet for this item.
    pub is_new: bool,
    /// Set when the stored document could not be read.
    pub load_error: Option<Error>,
}

/// Result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Moved { transition: Transition, view: View },
    Saved { index: usize, path: PathBuf },
}

#[derive(Debug)]
pub struct Session {
    store: RecordStore,
    navigator: Navigator,
    /// Read failure of the current item; saving is refused while set so a
    /// blank form never overwrites an unreadable document.
    blocked: Option<Error>,
}

impl Session {
    /// Starts a session on the first item of a collection of `total` items.
    pub fn open(store: RecordStore, total: usize) -> (Self, View) {
        info!(root = %store.root().display(), total, "opening collection");
        let mut session = Self {
            store,
            navigator: Navigator::new(total),
            blocked: None,
        };
        let view = session.load_current();
        (session, view)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    /// Whether the current item may be saved.
    pub fn can_save(&self) -> bool {
        !self.navigator.is_empty() && self.blocked.is_none()
    }

    /// Routes a command to its handler.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::First => Ok(self.first()),
            Command::Previous => Ok(self.previous()),
            Command::Next => Ok(self.next()),
            Command::Last => Ok(self.last()),
            Command::GoTo(input) => self.goto(&input),
            Command::Save(record) => self.save(&record),
        }
    }

    pub fn first(&mut self) -> Outcome {
        let transition = self.navigator.first();
        self.after_transition(transition)
    }

    pub fn previous(&mut self) -> Outcome {
        let transition = self.navigator.previous();
        self.after_transition(transition)
    }

    pub fn next(&mut self) -> Outcome {
        let transition = self.navigator.next();
        self.after_transition(transition)
    }

    pub fn last(&mut self) -> Outcome {
        let transition = self.navigator.last();
        self.after_transition(transition)
    }

    pub fn goto(&mut self, input: &str) -> Result<Outcome> {
        let transition = self.navigator.goto(input).inspect_err(|err| {
            debug!(input, error = %err, "go-to rejected");
        })?;
        Ok(self.after_transition(transition))
    }

    /// Writes `record` at the current index.
    pub fn save(&mut self, record: &Record) -> Result<Outcome> {
        if self.navigator.is_empty() {
            return Err(Error::EmptyCollection);
        }
        if let Some(err) = &self.blocked {
            warn!(error = %err, "refusing to overwrite unreadable record");
            return Err(err.clone());
        }

        let index = self.navigator.current();
        let path = self.store.write(index, record)?;
        Ok(Outcome::Saved { index, path })
    }

    fn after_transition(&mut self, transition: Transition) -> Outcome {
        if let Some(boundary) = transition.boundary {
            debug!(?boundary, index = transition.to, "navigation clamped");
        }
        let view = self.load_current();
        Outcome::Moved { transition, view }
    }

    /// Reads the record and resolves the images of the current index.
    fn load_current(&mut self) -> View {
        let index = self.navigator.current();
        let (record, load_error) = match self.store.read(index) {
            Ok(record) => (record, None),
            Err(err) => {
                warn!(index, error = %err, "cannot read record");
                (Record::default(), Some(err))
            }
        };
        self.blocked = load_error.clone();

        View {
            index,
            position: self.navigator.position_label(),
            images: self.store.image_paths(index),
            is_new: load_error.is_none() && !self.store.exists(index),
            record,
            load_error,
        }
    }
}

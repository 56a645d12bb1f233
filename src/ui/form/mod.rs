// SPDX-License-Identifier: MPL-2.0
//! Metadata form for the displayed item.
//!
//! The form shows the eight fields of a [`Record`], grouped by section.
//! Single-line fields use `text_input`; `Texte` and `Contenu` use a
//! `text_editor`. The edited [`Record`] is the source of truth: editor
//! contents are only read back after an edit action, so text that the user
//! never touched is collected exactly as it was populated.

pub mod view;

pub use view::{view, ViewContext};

use crate::record::{Field, Record};
use iced::widget::text_editor;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    /// A single-line field has changed.
    FieldChanged(Field, String),
    /// An action was performed in a multi-line editor.
    Edit(Field, text_editor::Action),
}

/// Editable state of the form.
pub struct FormState {
    /// Current edited values.
    edited: Record,
    /// Values as last loaded or saved (for change detection).
    original: Record,
    texte: text_editor::Content,
    contenu: text_editor::Content,
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("edited", &self.edited)
            .field("original", &self.original)
            .finish_non_exhaustive()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&Record::default())
    }
}

impl FormState {
    pub fn new(record: &Record) -> Self {
        Self {
            edited: record.clone(),
            original: record.clone(),
            texte: text_editor::Content::with_text(&record.recto.texte),
            contenu: text_editor::Content::with_text(&record.verso.contenu),
        }
    }

    /// Replaces every field with the values of `record`.
    pub fn populate(&mut self, record: &Record) {
        *self = Self::new(record);
    }

    /// Returns the record currently shown in the form.
    pub fn collect(&self) -> Record {
        self.edited.clone()
    }

    pub fn value(&self, field: Field) -> &str {
        self.edited.get(field)
    }

    /// Editor content backing a multi-line field.
    pub fn editor(&self, field: Field) -> Option<&text_editor::Content> {
        match field {
            Field::Texte => Some(&self.texte),
            Field::Contenu => Some(&self.contenu),
            _ => None,
        }
    }

    /// Returns true if any field differs from the last populated or saved values.
    pub fn has_changes(&self) -> bool {
        self.edited != self.original
    }

    /// Makes the current values the new change-detection baseline.
    pub fn mark_saved(&mut self) {
        self.original = self.edited.clone();
    }

    /// Applies a form message. Returns true when a value changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::FieldChanged(field, value) => {
                if field.is_multiline() || self.edited.get(field) == value {
                    return false;
                }
                self.edited.set(field, value);
                true
            }
            Message::Edit(field, action) => {
                let is_edit = action.is_edit();
                let content = match field {
                    Field::Texte => &mut self.texte,
                    Field::Contenu => &mut self.contenu,
                    _ => return false,
                };
                content.perform(action);
                if !is_edit {
                    return false;
                }
                let text = content.text();
                self.edited.set(field, text);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        let mut record = Record::default();
        record.set(Field::Description, "Carte postale, Genève".into());
        record.set(Field::Texte, "Ligne 1\nLigne 2\r\n\nfin  ".into());
        record.set(Field::Emetteur, "Jeanne".into());
        record.set(Field::LieuEmetteur, "Lyon".into());
        record.set(Field::Destinataire, "Paul".into());
        record.set(Field::LieuDestinataire, "Zürich".into());
        record.set(Field::Date, "1er mai 1917".into());
        record.set(Field::Contenu, "Mon cher Paul,\n\n  Bises 😊".into());
        record
    }

    #[test]
    fn populate_then_collect_is_identity() {
        let mut form = FormState::default();
        let record = sample();

        form.populate(&record);
        assert_eq!(form.collect(), record);
        assert!(!form.has_changes());
    }

    #[test]
    fn populate_with_blank_record_clears_previous_values() {
        let mut form = FormState::new(&sample());
        form.populate(&Record::default());

        assert!(form.collect().is_blank());
        assert!(form.editor(Field::Texte).is_some());
        assert!(form.editor(Field::Date).is_none());
    }

    #[test]
    fn field_change_is_tracked() {
        let mut form = FormState::new(&sample());

        assert!(form.update(Message::FieldChanged(Field::Date, "2 mai 1917".into())));
        assert_eq!(form.value(Field::Date), "2 mai 1917");
        assert!(form.has_changes());

        form.mark_saved();
        assert!(!form.has_changes());
    }

    #[test]
    fn unchanged_value_is_not_a_change() {
        let mut form = FormState::new(&sample());
        assert!(!form.update(Message::FieldChanged(Field::Emetteur, "Jeanne".into())));
        assert!(!form.has_changes());
    }

    #[test]
    fn multiline_fields_ignore_single_line_messages() {
        let mut form = FormState::new(&sample());
        assert!(!form.update(Message::FieldChanged(Field::Texte, "other".into())));
        assert_eq!(form.value(Field::Texte), sample().recto.texte);
    }

    #[test]
    fn editor_edit_updates_value() {
        let mut form = FormState::new(&Record::default());
        let changed = form.update(Message::Edit(
            Field::Contenu,
            text_editor::Action::Edit(text_editor::Edit::Insert('A')),
        ));

        assert!(changed);
        assert_eq!(form.value(Field::Contenu), "A");
        assert!(form.has_changes());
    }

    #[test]
    fn editor_navigation_is_not_an_edit() {
        let record = sample();
        let mut form = FormState::new(&record);
        let changed = form.update(Message::Edit(
            Field::Texte,
            text_editor::Action::Move(text_editor::Motion::DocumentEnd),
        ));

        assert!(!changed);
        assert_eq!(form.collect(), record);
    }
}

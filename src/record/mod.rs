// SPDX-License-Identifier: MPL-2.0
//! Metadata records describing one recto/verso document.
//!
//! A [`Record`] always carries all eight text fields. Sections or keys missing
//! from a stored document are filled with empty strings while decoding, so the
//! rest of the application never deals with partially missing records.

pub mod discovery;
pub mod store;

pub use store::{RecordStore, StoreLayout};

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Front side of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recto {
    #[serde(rename = "Description", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Texte", deserialize_with = "null_as_default")]
    pub texte: String,
}

/// Back side of the document (postal side for letters and postcards).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Verso {
    #[serde(rename = "Emetteur", deserialize_with = "null_as_default")]
    pub emetteur: String,
    #[serde(rename = "Lieu Emetteur", deserialize_with = "null_as_default")]
    pub lieu_emetteur: String,
    #[serde(rename = "Destinataire", deserialize_with = "null_as_default")]
    pub destinataire: String,
    #[serde(rename = "Lieu Destinataire", deserialize_with = "null_as_default")]
    pub lieu_destinataire: String,
    #[serde(rename = "Date", deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "Contenu", deserialize_with = "null_as_default")]
    pub contenu: String,
}

/// The full metadata document of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub recto: Recto,
    #[serde(deserialize_with = "null_as_default")]
    pub verso: Verso,
}

/// Treats an explicit JSON `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which side of the document a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Recto,
    Verso,
}

impl Section {
    /// JSON key of the section.
    pub const fn key(self) -> &'static str {
        match self {
            Section::Recto => "recto",
            Section::Verso => "verso",
        }
    }

    /// i18n key of the section heading.
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Section::Recto => "section-recto",
            Section::Verso => "section-verso",
        }
    }
}

/// Identifies one of the eight text fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    Texte,
    Emetteur,
    LieuEmetteur,
    Destinataire,
    LieuDestinataire,
    Date,
    Contenu,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 8] = [
        Field::Description,
        Field::Texte,
        Field::Emetteur,
        Field::LieuEmetteur,
        Field::Destinataire,
        Field::LieuDestinataire,
        Field::Date,
        Field::Contenu,
    ];

    /// Fields of one section, in display order.
    pub fn in_section(section: Section) -> impl Iterator<Item = Field> {
        Self::ALL.into_iter().filter(move |f| f.section() == section)
    }

    /// JSON key of the field inside its section.
    pub const fn key(self) -> &'static str {
        match self {
            Field::Description => "Description",
            Field::Texte => "Texte",
            Field::Emetteur => "Emetteur",
            Field::LieuEmetteur => "Lieu Emetteur",
            Field::Destinataire => "Destinataire",
            Field::LieuDestinataire => "Lieu Destinataire",
            Field::Date => "Date",
            Field::Contenu => "Contenu",
        }
    }

    pub const fn section(self) -> Section {
        match self {
            Field::Description | Field::Texte => Section::Recto,
            _ => Section::Verso,
        }
    }

    /// i18n key of the field label.
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Field::Description => "field-description",
            Field::Texte => "field-texte",
            Field::Emetteur => "field-emetteur",
            Field::LieuEmetteur => "field-lieu-emetteur",
            Field::Destinataire => "field-destinataire",
            Field::LieuDestinataire => "field-lieu-destinataire",
            Field::Date => "field-date",
            Field::Contenu => "field-contenu",
        }
    }

    /// Whether the field is edited in a multi-line editor.
    pub const fn is_multiline(self) -> bool {
        matches!(self, Field::Texte | Field::Contenu)
    }
}

impl Record {
    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Description => &self.recto.description,
            Field::Texte => &self.recto.texte,
            Field::Emetteur => &self.verso.emetteur,
            Field::LieuEmetteur => &self.verso.lieu_emetteur,
            Field::Destinataire => &self.verso.destinataire,
            Field::LieuDestinataire => &self.verso.lieu_destinataire,
            Field::Date => &self.verso.date,
            Field::Contenu => &self.verso.contenu,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Description => &mut self.recto.description,
            Field::Texte => &mut self.recto.texte,
            Field::Emetteur => &mut self.verso.emetteur,
            Field::LieuEmetteur => &mut self.verso.lieu_emetteur,
            Field::Destinataire => &mut self.verso.destinataire,
            Field::LieuDestinataire => &mut self.verso.lieu_destinataire,
            Field::Date => &mut self.verso.date,
            Field::Contenu => &mut self.verso.contenu,
        };
        *slot = value;
    }

    /// Returns true when every field is empty.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Paths of the two scans of one item. Neither file is guaranteed to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePair {
    pub recto: PathBuf,
    pub verso: PathBuf,
}

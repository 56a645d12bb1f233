// SPDX-License-Identifier: MPL-2.0
//! File-backed record store.
//!
//! Items are addressed by a 0-based index while files on disk use 1-based
//! numbers: index `i` maps to `metadata/{i+1}_metadata.json` and to the scans
//! `cropped/{i+1}_recto_cropped.jpg` / `cropped/{i+1}_verso_cropped.jpg`.
//!
//! Writes replace the whole document through a temporary file renamed over
//! the target, so a reader never observes a half-written record.

use super::{ImagePair, Record};
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory names and file suffixes of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    pub images_dir: String,
    pub metadata_dir: String,
    pub recto_suffix: String,
    pub verso_suffix: String,
    pub metadata_suffix: String,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            images_dir: "cropped".into(),
            metadata_dir: "metadata".into(),
            recto_suffix: "_recto_cropped.jpg".into(),
            verso_suffix: "_verso_cropped.jpg".into(),
            metadata_suffix: "_metadata.json".into(),
        }
    }
}

/// Reads and writes the metadata documents of one collection.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
    layout: StoreLayout,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>, layout: StoreLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Working root containing the image and metadata directories.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    /// Directory holding the scans.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(&self.layout.images_dir)
    }

    /// Directory holding the metadata documents.
    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(&self.layout.metadata_dir)
    }

    /// Path of the metadata document for `index`.
    pub fn metadata_path(&self, index: usize) -> PathBuf {
        self.metadata_dir().join(format!(
            "{}{}",
            file_number(index),
            self.layout.metadata_suffix
        ))
    }

    /// Paths of the two scans for `index`. Existence is not checked.
    pub fn image_paths(&self, index: usize) -> ImagePair {
        let images_dir = self.images_dir();
        let number = file_number(index);
        ImagePair {
            recto: images_dir.join(format!("{}{}", number, self.layout.recto_suffix)),
            verso: images_dir.join(format!("{}{}", number, self.layout.verso_suffix)),
        }
    }

    /// Whether a metadata document exists for `index`.
    pub fn exists(&self, index: usize) -> bool {
        self.metadata_path(index).is_file()
    }

    /// Loads the record for `index`.
    ///
    /// A missing document yields an empty record. A document that cannot be
    /// decoded is reported as [`Error::MalformedRecord`].
    pub fn read(&self, index: usize) -> Result<Record> {
        let path = self.metadata_path(index);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no metadata yet, using empty record");
                return Ok(Record::default());
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|err| Error::MalformedRecord {
            path,
            reason: err.to_string(),
        })
    }

    /// Writes the whole record for `index`, replacing any previous document.
    ///
    /// Returns the path that was written.
    pub fn write(&self, index: usize, record: &Record) -> Result<PathBuf> {
        let path = self.metadata_path(index);
        let dir = self.metadata_dir();
        fs::create_dir_all(&dir)?;

        let content = serde_json::to_string(record)
            .map_err(|err| Error::Io(format!("cannot encode record: {err}")))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = dir.join(format!(".{file_name}.tmp"));

        if let Err(err) = fs::write(&temp_path, content) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        info!(path = %path.display(), "record saved");
        Ok(path)
    }
}

/// 1-based number used in file names.
fn file_number(index: usize) -> usize {
    index.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> RecordStore {
        RecordStore::new(dir, StoreLayout::default())
    }

    fn sample_record() -> Record {
        let mut record = Record::default();
        record.set(Field::Description, "Carte postale, vue du port".into());
        record.set(Field::Texte, "Souvenir de Marseille\n\n  — 1912  ".into());
        record.set(Field::Emetteur, "Émile".into());
        record.set(Field::LieuEmetteur, "Marseille".into());
        record.set(Field::Destinataire, "Mme Zoé Ménard".into());
        record.set(Field::LieuDestinataire, "Saint-Étienne".into());
        record.set(Field::Date, "".into());
        record.set(Field::Contenu, "Ma chère,\r\nje t'écris d'ici 🌊\n".into());
        record
    }

    #[test]
    fn paths_use_one_based_numbers() {
        let store = RecordStore::new("/data", StoreLayout::default());
        assert_eq!(
            store.metadata_path(0),
            PathBuf::from("/data/metadata/1_metadata.json")
        );
        let pair = store.image_paths(4);
        assert_eq!(pair.recto, PathBuf::from("/data/cropped/5_recto_cropped.jpg"));
        assert_eq!(pair.verso, PathBuf::from("/data/cropped/5_verso_cropped.jpg"));
    }

    #[test]
    fn custom_layout_changes_paths() {
        let layout = StoreLayout {
            images_dir: "scans".into(),
            metadata_dir: "notes".into(),
            recto_suffix: "_front.png".into(),
            verso_suffix: "_back.png".into(),
            metadata_suffix: ".json".into(),
        };
        let store = RecordStore::new("/data", layout);
        assert_eq!(store.metadata_path(1), PathBuf::from("/data/notes/2.json"));
        assert_eq!(
            store.image_paths(1).verso,
            PathBuf::from("/data/scans/2_back.png")
        );
    }

    #[test]
    fn read_missing_document_returns_empty_record() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        let record = store.read(7).expect("read");
        assert!(record.is_blank());
        assert!(!store.exists(7));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        let record = sample_record();

        store.write(2, &record).expect("write");
        assert!(store.exists(2));
        assert_eq!(store.read(2).expect("read"), record);
    }

    #[test]
    fn write_creates_metadata_directory() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        assert!(!store.metadata_dir().exists());

        let path = store.write(0, &Record::default()).expect("write");
        assert_eq!(path, dir.path().join("metadata").join("1_metadata.json"));
        assert!(path.is_file());
    }

    #[test]
    fn write_replaces_document_wholesale() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        fs::create_dir_all(store.metadata_dir()).expect("mkdir");
        fs::write(
            store.metadata_path(0),
            r#"{"recto": {"Description": "old", "Tampon": "x"}, "annexe": [1, 2]}"#,
        )
        .expect("seed");

        let mut record = Record::default();
        record.set(Field::Date, "3 mai 1915".into());
        store.write(0, &record).expect("write");

        let raw = fs::read_to_string(store.metadata_path(0)).expect("raw");
        assert!(!raw.contains("Tampon"));
        assert!(!raw.contains("annexe"));
        assert!(!raw.contains("old"));
        assert_eq!(store.read(0).expect("read"), record);
    }

    #[test]
    fn non_ascii_is_written_literally() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        let mut record = Record::default();
        record.set(Field::Emetteur, "Hélène Œhler".into());

        store.write(0, &record).expect("write");
        let raw = fs::read_to_string(store.metadata_path(0)).expect("raw");
        assert!(raw.contains("Hélène Œhler"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn write_leaves_no_temporary_file() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        store.write(0, &sample_record()).expect("write");

        let entries: Vec<_> = fs::read_dir(store.metadata_dir())
            .expect("list")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["1_metadata.json".to_string()]);
    }

    #[test]
    fn malformed_document_is_reported() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        fs::create_dir_all(store.metadata_dir()).expect("mkdir");
        fs::write(store.metadata_path(0), "{ not json").expect("seed");

        match store.read(0) {
            Err(Error::MalformedRecord { path, .. }) => {
                assert_eq!(path, store.metadata_path(0));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn wrong_value_type_is_reported_as_malformed() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        fs::create_dir_all(store.metadata_dir()).expect("mkdir");
        fs::write(store.metadata_path(0), r#"{"verso": {"Date": 1915}}"#).expect("seed");

        assert!(matches!(
            store.read(0),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn write_into_a_file_named_like_the_directory_fails() {
        let dir = tempdir().expect("temp dir");
        let store = store_in(dir.path());
        fs::write(store.metadata_dir(), b"not a directory").expect("seed");

        assert!(matches!(
            store.write(0, &Record::default()),
            Err(Error::Io(_))
        ));
    }
}

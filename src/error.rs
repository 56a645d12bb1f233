// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A metadata document exists but cannot be decoded into a record.
    MalformedRecord {
        path: PathBuf,
        reason: String,
    },
    /// The go-to input is not an integer.
    InvalidTarget(String),
    /// The go-to input is an integer outside `1..=total`.
    TargetOutOfRange {
        target: i64,
        total: usize,
    },
    /// There is no item to act on.
    EmptyCollection,
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::MalformedRecord { .. } => "error-malformed-record",
            Error::InvalidTarget(_) => "error-goto-not-a-number",
            Error::TargetOutOfRange { .. } => "error-goto-out-of-range",
            Error::EmptyCollection => "error-empty-collection",
        }
    }

    /// Returns the Fluent arguments matching [`Error::i18n_key`].
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Error::Io(message) | Error::Config(message) => vec![("details", message.clone())],
            Error::MalformedRecord { path, reason } => vec![
                ("path", path.display().to_string()),
                ("details", reason.clone()),
            ],
            Error::InvalidTarget(input) => vec![("input", input.clone())],
            Error::TargetOutOfRange { target, total } => {
                vec![("target", target.to_string()), ("total", total.to_string())]
            }
            Error::EmptyCollection => Vec::new(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::MalformedRecord { path, reason } => {
                write!(f, "Malformed record {}: {}", path.display(), reason)
            }
            Error::InvalidTarget(input) => write!(f, "Not an item number: {:?}", input),
            Error::TargetOutOfRange { target, total } => {
                write!(f, "Item {} is outside 1..={}", target, total)
            }
            Error::EmptyCollection => write!(f, "The collection is empty"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn malformed_record_mentions_path() {
        let err = Error::MalformedRecord {
            path: PathBuf::from("metadata/3_metadata.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        let shown = format!("{}", err);
        assert!(shown.contains("3_metadata.json"));
        assert!(shown.contains("line 1"));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let errors = [
            Error::Io(String::new()),
            Error::Config(String::new()),
            Error::MalformedRecord {
                path: PathBuf::new(),
                reason: String::new(),
            },
            Error::InvalidTarget(String::new()),
            Error::TargetOutOfRange {
                target: 0,
                total: 0,
            },
            Error::EmptyCollection,
        ];
        let mut keys: Vec<_> = errors.iter().map(Error::i18n_key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), errors.len());
    }

    #[test]
    fn out_of_range_args_carry_target_and_total() {
        let err = Error::TargetOutOfRange {
            target: 9,
            total: 5,
        };
        let args = err.i18n_args();
        assert!(args.contains(&("target", "9".to_string())));
        assert!(args.contains(&("total", "5".to_string())));
    }
}

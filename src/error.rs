//! Errors returned by the AMS model.

use parse_display::Display;

use crate::{AmsId, TrayIndex};

/// The kind of raw record that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(style = "snake_case")]
pub enum RecordKind {
    /// A filament tray record.
    Tray,
    /// An AMS unit record.
    Ams,
    /// The AMS section of a printer report.
    Report,
}

/// Possible errors returned by the AMS model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No filament tray is stored at the index.
    #[error("no filament tray at index {0}")]
    TrayNotFound(TrayIndex),

    /// No AMS unit is stored under the id.
    #[error("no AMS unit with id {0}")]
    AmsNotFound(AmsId),

    /// A raw record could not be parsed.
    #[error("invalid {kind} record: {reason}")]
    InvalidRecord {
        /// What the record was supposed to describe.
        kind: RecordKind,
        /// Why parsing failed.
        reason: String,
    },

    /// Some error occurred when (de)serializing a record.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this is a lookup miss on a tray index or AMS id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TrayNotFound(_) | Error::AmsNotFound(_))
    }

    pub(crate) fn invalid_record(kind: RecordKind, err: anyhow::Error) -> Self {
        Error::InvalidRecord {
            kind,
            reason: format!("{err:#}"),
        }
    }
}

/// Result type for the AMS model.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_found_errors() {
        assert!(Error::TrayNotFound(3).is_not_found());
        assert!(Error::AmsNotFound(1).is_not_found());
        assert!(!Error::invalid_record(RecordKind::Tray, anyhow::anyhow!("bad")).is_not_found());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::TrayNotFound(3).to_string(), "no filament tray at index 3");
        assert_eq!(Error::AmsNotFound(1).to_string(), "no AMS unit with id 1");
        assert_eq!(
            Error::invalid_record(RecordKind::Ams, anyhow::anyhow!("missing field `id`")).to_string(),
            "invalid ams record: missing field `id`"
        );
    }
}

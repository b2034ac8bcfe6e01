//! The record parser.

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::message::RawRecord;

/// Parse a raw record into one of the report types.
///
/// The record is rendered as pretty JSON first, so a failure can be logged
/// with the offending line highlighted. The caller decides how loudly to
/// report the returned error.
pub fn parse_record<T: DeserializeOwned>(record: &RawRecord) -> Result<T> {
    let payload = serde_json::to_string_pretty(record)?;

    match serde_json::from_str::<T>(&payload) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let message = err.to_string();
            tracing::debug!(
                "Error parsing record: {:?}",
                format_serde_error::SerdeError::new(payload, err)
            );
            anyhow::bail!(message)
        }
    }
}

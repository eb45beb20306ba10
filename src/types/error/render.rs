//! Canonical printable form of an [`Error`].

use core::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Error;

/// `chrono` format of the rendered timestamp (`dd-MM-yyyyTHH:mm:ss.fff`).
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%YT%H:%M:%S%.3f";

/// Snapshot of an [`Error`] as it appears in logs and problem documents.
///
/// Empty metadata, details and trace lines are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedError {
    pub code: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trace_lines: Vec<String>,
}

impl Error {
    /// Renders the error. The timestamp is the time of this call.
    #[must_use]
    pub fn render(&self) -> RenderedError {
        let mut details: Vec<String> = Vec::with_capacity(self.details.len());
        for detail in &self.details {
            if !details.contains(detail) {
                details.push(detail.clone());
            }
        }

        RenderedError {
            code: self.code().to_owned(),
            message: self.message().to_owned(),
            timestamp: self.timestamp().format(TIMESTAMP_FORMAT).to_string(),
            metadata: self
                .metadata
                .iter()
                .map(|(key, value)| format!("{}={}", key, metadata_text(value)))
                .collect(),
            details,
            trace_lines: self.trace_lines.to_vec(),
        }
    }
}

fn metadata_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.render()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.render().serialize(serializer)
    }
}

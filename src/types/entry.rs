//! The recorded entry struct.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::TIMESTAMP_FORMAT;

/// One timestamped text record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    timestamp: NaiveDateTime,
    text: String,
}

impl Entry {
    pub(crate) fn new(timestamp: NaiveDateTime, text: String) -> Self {
        Self { timestamp, text }
    }

    /// When the entry was appended.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The timestamp in ISO-8601 local form with microseconds.
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The text exactly as supplied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

//! All data types for the think-tool library.

pub mod entry;
pub mod error;
pub mod label;

pub use entry::Entry;
pub use error::{ThinkError, ThinkResult};
pub use label::{EntryLabel, Operation, Variant};

/// Characters of the appended text echoed back before truncating.
pub const PREVIEW_CHARS: usize = 50;

/// Appended to a confirmation whose preview was cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Timestamp rendering used in listings: ISO-8601 local time, microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

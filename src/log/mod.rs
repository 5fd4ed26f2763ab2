//! The entry log and its queries.

pub mod entry_log;
pub mod stats;

pub use entry_log::{EntryLog, LogState};
pub use stats::{LabeledStats, LogStats};

//! think-tool: an in-memory, ordered log of an agent's thoughts.
//!
//! The log records free-text entries with timestamps, lists them back in
//! order, clears them, and reports simple length statistics. The same log
//! backs both the "think" and "ponder" MCP tools; only the vocabulary
//! differs, see [`EntryLabel`].

pub mod clock;
pub mod log;
pub mod types;

// Re-export commonly used types at the crate root
pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use self::log::{EntryLog, LabeledStats, LogState, LogStats};
pub use types::{
    Entry, EntryLabel, Operation, ThinkError, ThinkResult, Variant, PREVIEW_CHARS,
    TIMESTAMP_FORMAT, TRUNCATION_MARKER,
};

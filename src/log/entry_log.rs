//! EntryLog: the ordered, in-memory record of one session's entries.

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::types::{Entry, EntryLabel, ThinkResult, PREVIEW_CHARS, TRUNCATION_MARKER};

use super::stats::LogStats;

/// Observable states of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogState {
    /// No entries recorded.
    Empty,
    /// At least one entry recorded.
    NonEmpty,
}

/// Ordered collection of timestamped text entries.
///
/// Insertion order is preserved for listing and for the longest-entry
/// report. Entries are never edited; the log only grows or is cleared.
pub struct EntryLog {
    label: EntryLabel,
    entries: Vec<Entry>,
    clock: Box<dyn Clock>,
}

impl EntryLog {
    /// Create an empty log timestamped by the system clock.
    pub fn new(label: EntryLabel) -> Self {
        Self::with_clock(label, SystemClock)
    }

    /// Create an empty log with a custom time source.
    pub fn with_clock(label: EntryLabel, clock: impl Clock + 'static) -> Self {
        Self {
            label,
            entries: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// The vocabulary this log presents itself with.
    pub fn label(&self) -> &EntryLabel {
        &self.label
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current state.
    pub fn state(&self) -> LogState {
        if self.entries.is_empty() {
            LogState::Empty
        } else {
            LogState::NonEmpty
        }
    }

    /// Record `text` and return a confirmation echoing at most
    /// [`PREVIEW_CHARS`] characters of it.
    pub fn append(&mut self, text: impl Into<String>) -> String {
        let text = text.into();
        let confirmation = format!("{} recorded: {}", self.label.title(), preview(&text));

        let entry = Entry::new(self.clock.now(), text);
        log::debug!(
            "{} #{} recorded ({} chars)",
            self.label.title(),
            self.entries.len() + 1,
            entry.char_len()
        );
        self.entries.push(entry);

        confirmation
    }

    /// Render every entry, numbered from 1, or the empty sentinel.
    pub fn list(&self) -> String {
        if self.entries.is_empty() {
            return self.label.empty_sentinel();
        }

        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{} #{} ({}):\n{}\n",
                    self.label.title(),
                    i + 1,
                    entry.timestamp_string(),
                    entry.text()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop every entry and report how many there were.
    pub fn clear(&mut self) -> String {
        let count = self.entries.len();
        self.entries = Vec::new();
        log::debug!("Cleared {count} {}", self.label.plural());
        format!("Cleared {count} recorded {}.", self.label.plural())
    }

    /// Length statistics, or `None` for an empty log.
    pub fn stats(&self) -> Option<LogStats> {
        LogStats::compute(&self.entries)
    }

    /// Stats rendered as pretty JSON, or the empty sentinel.
    pub fn stats_report(&self) -> ThinkResult<String> {
        match self.stats() {
            Some(stats) => stats.to_json_pretty(&self.label),
            None => Ok(self.label.empty_sentinel()),
        }
    }
}

impl fmt::Debug for EntryLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryLog")
            .field("label", &self.label)
            .field("entries", &self.entries.len())
            .finish()
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}

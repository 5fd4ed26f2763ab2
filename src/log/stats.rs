//! Descriptive statistics over recorded entries.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::{Entry, EntryLabel, ThinkResult};

/// Summary of a non-empty log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogStats {
    /// Number of entries.
    pub total: usize,
    /// Mean character length, rounded to 2 decimal places.
    pub average_length: f64,
    /// 1-based position of the first longest entry.
    pub longest_index: usize,
    /// Character length of that entry.
    pub longest_length: usize,
}

impl LogStats {
    /// Compute stats over `entries`, or `None` when there are none.
    ///
    /// Ties on the longest length resolve to the earliest entry.
    pub fn compute(entries: &[Entry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let mut total_chars = 0usize;
        let mut longest_index = 0usize;
        let mut longest_length = 0usize;
        for (i, entry) in entries.iter().enumerate() {
            let len = entry.char_len();
            total_chars += len;
            // Strict comparison keeps the first maximum.
            if len > longest_length {
                longest_index = i;
                longest_length = len;
            }
        }

        let average = total_chars as f64 / entries.len() as f64;
        Some(Self {
            total: entries.len(),
            average_length: round2(average),
            longest_index: longest_index + 1,
            longest_length,
        })
    }

    /// Pair these stats with a label for serialization.
    pub fn labeled<'a>(&'a self, label: &'a EntryLabel) -> LabeledStats<'a> {
        LabeledStats { stats: self, label }
    }

    /// Render as pretty-printed JSON using the label's key names.
    pub fn to_json_pretty(&self, label: &EntryLabel) -> ThinkResult<String> {
        Ok(serde_json::to_string_pretty(&self.labeled(label))?)
    }
}

/// [`LogStats`] keyed with one deployment's vocabulary.
///
/// Serializes as `total_*`, `average_length`, `longest_*_index`,
/// `longest_*_length`, in that order.
#[derive(Debug, Clone, Copy)]
pub struct LabeledStats<'a> {
    stats: &'a LogStats,
    label: &'a EntryLabel,
}

impl Serialize for LabeledStats<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(&self.label.total_key(), &self.stats.total)?;
        map.serialize_entry("average_length", &self.stats.average_length)?;
        map.serialize_entry(&self.label.longest_index_key(), &self.stats.longest_index)?;
        map.serialize_entry(&self.label.longest_length_key(), &self.stats.longest_length)?;
        map.end()
    }
}

/// Two decimal places, exact halves to even (1.125 -> 1.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

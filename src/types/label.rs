//! Display vocabulary for one deployment of the log.
//!
//! The "think" and "ponder" servers are the same log under different words.
//! Everything user-visible that differs between them (tool names, argument
//! name, headers, sentinel, stats keys) is derived from an [`EntryLabel`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThinkError;

/// The known deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `think` / `get_thoughts` / `clear_thoughts` / `get_thought_stats`.
    #[default]
    Think,
    /// `ponder` / `get_ponderings` / `clear_ponderings` / `get_pondering_stats`.
    Ponder,
}

impl Variant {
    /// Return the lowercase name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Think => "think",
            Self::Ponder => "ponder",
        }
    }

    /// Capitalised name used in startup messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Think => "Think",
            Self::Ponder => "Ponder",
        }
    }

    /// Server name reported to MCP clients by default.
    pub fn default_server_name(&self) -> &'static str {
        match self {
            Self::Think => "think-tool",
            Self::Ponder => "ponder-tool",
        }
    }

    /// The vocabulary for this variant.
    pub fn label(&self) -> EntryLabel {
        match self {
            Self::Think => EntryLabel::new("think", "thought", "thoughts", "Thought"),
            Self::Ponder => EntryLabel::new("ponder", "pondering", "ponderings", "Pondering"),
        }
    }
}

impl FromStr for Variant {
    type Err = ThinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "think" => Ok(Self::Think),
            "ponder" => Ok(Self::Ponder),
            _ => Err(ThinkError::UnknownVariant(s.to_string())),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The four operations every deployment exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Record one entry.
    Append,
    /// Render every entry in order.
    List,
    /// Drop every entry.
    Clear,
    /// Summarize entry lengths.
    Stats,
}

impl Operation {
    /// All operations, in the order tools are advertised.
    pub const ALL: [Operation; 4] = [
        Operation::Append,
        Operation::List,
        Operation::Clear,
        Operation::Stats,
    ];
}

/// Words used to present a log to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLabel {
    verb: String,
    noun: String,
    plural: String,
    title: String,
}

impl EntryLabel {
    /// Build a label from its four words, e.g. `("think", "thought", "thoughts", "Thought")`.
    pub fn new(
        verb: impl Into<String>,
        noun: impl Into<String>,
        plural: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            verb: verb.into(),
            noun: noun.into(),
            plural: plural.into(),
            title: title.into(),
        }
    }

    /// Name of the append tool (`think`).
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Singular noun, also the append argument name (`thought`).
    pub fn noun(&self) -> &str {
        &self.noun
    }

    /// Plural noun (`thoughts`).
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Capitalised noun used in headers and confirmations (`Thought`).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tool name for an operation.
    pub fn tool_name(&self, op: Operation) -> String {
        match op {
            Operation::Append => self.verb.clone(),
            Operation::List => format!("get_{}", self.plural),
            Operation::Clear => format!("clear_{}", self.plural),
            Operation::Stats => format!("get_{}_stats", self.noun),
        }
    }

    /// Resolve a tool name back to the operation it names.
    pub fn operation_for(&self, tool_name: &str) -> Option<Operation> {
        Operation::ALL
            .into_iter()
            .find(|op| self.tool_name(*op) == tool_name)
    }

    /// Informational reply for `list` and `stats` on an empty log.
    pub fn empty_sentinel(&self) -> String {
        format!("No {} have been recorded yet.", self.plural)
    }

    /// Stats key for the entry count.
    pub fn total_key(&self) -> String {
        format!("total_{}", self.plural)
    }

    /// Stats key for the position of the longest entry.
    pub fn longest_index_key(&self) -> String {
        format!("longest_{}_index", self.noun)
    }

    /// Stats key for the length of the longest entry.
    pub fn longest_length_key(&self) -> String {
        format!("longest_{}_length", self.noun)
    }
}

impl Default for EntryLabel {
    fn default() -> Self {
        Variant::default().label()
    }
}

impl From<Variant> for EntryLabel {
    fn from(variant: Variant) -> Self {
        variant.label()
    }
}

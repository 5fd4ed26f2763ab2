//! MCP tool implementations, one per log operation.

pub mod clear_entries;
pub mod entry_stats;
pub mod list_entries;
pub mod record_entry;
pub mod registry;

pub use registry::ToolRegistry;

//! Tool registration and dispatch.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::Value;

use think_tool::{EntryLabel, Operation};

use crate::session::SessionManager;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{clear_entries, entry_stats, list_entries, record_entry};

/// Registry of the four log tools, named by the session's label.
pub struct ToolRegistry;

impl ToolRegistry {
    /// List the tool definitions for `label`.
    pub fn list_tools(label: &EntryLabel) -> Vec<ToolDefinition> {
        Operation::ALL
            .into_iter()
            .map(|op| Self::definition(op, label))
            .collect()
    }

    /// Definition of one operation's tool.
    pub fn definition(op: Operation, label: &EntryLabel) -> ToolDefinition {
        match op {
            Operation::Append => record_entry::definition(label),
            Operation::List => list_entries::definition(label),
            Operation::Clear => clear_entries::definition(label),
            Operation::Stats => entry_stats::definition(label),
        }
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        session: &Arc<Mutex<SessionManager>>,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        let operation = {
            let mut session = session.lock().await;
            let op = session.label().operation_for(name);
            if op.is_some() {
                session.record_tool_call(name);
            }
            op
        };

        match operation {
            Some(Operation::Append) => record_entry::execute(args, session).await,
            Some(Operation::List) => list_entries::execute(args, session).await,
            Some(Operation::Clear) => clear_entries::execute(args, session).await,
            Some(Operation::Stats) => entry_stats::execute(args, session).await,
            None => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}

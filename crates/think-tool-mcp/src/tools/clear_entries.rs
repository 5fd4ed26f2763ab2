//! Tool: clear_thoughts / clear_ponderings: discard every entry.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use think_tool::{EntryLabel, Operation};

use crate::session::SessionManager;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

/// Return the tool definition for the clear tool of `label`.
pub fn definition(label: &EntryLabel) -> ToolDefinition {
    ToolDefinition {
        name: label.tool_name(Operation::Clear),
        description: Some(format!(
            "Clear all recorded {} from the current session. \
             Use this to start fresh if the thinking process needs to be reset.",
            label.plural()
        )),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Execute the clear tool.
pub async fn execute(
    _args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let mut session = session.lock().await;
    let reply = session.log_mut().clear();
    tracing::info!("{reply}");
    Ok(ToolCallResult::text(reply))
}

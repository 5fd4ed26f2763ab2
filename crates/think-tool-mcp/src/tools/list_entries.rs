//! Tool: get_thoughts / get_ponderings: list every entry in order.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use think_tool::{EntryLabel, Operation};

use crate::session::SessionManager;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

/// Return the tool definition for the list tool of `label`.
pub fn definition(label: &EntryLabel) -> ToolDefinition {
    ToolDefinition {
        name: label.tool_name(Operation::List),
        description: Some(format!(
            "Retrieve all {} recorded in the current session. \
             This tool helps review the thinking process that has occurred so far.",
            label.plural()
        )),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Execute the list tool.
pub async fn execute(
    _args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let session = session.lock().await;
    Ok(ToolCallResult::text(session.log().list()))
}

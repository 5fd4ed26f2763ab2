//! Tool: get_thought_stats / get_pondering_stats: length statistics.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use think_tool::{EntryLabel, Operation};

use crate::session::SessionManager;
use crate::types::{McpResult, ToolCallResult, ToolDefinition};

/// Return the tool definition for the stats tool of `label`.
pub fn definition(label: &EntryLabel) -> ToolDefinition {
    ToolDefinition {
        name: label.tool_name(Operation::Stats),
        description: Some(format!(
            "Get statistics about the {} recorded in the current session.",
            label.plural()
        )),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// Execute the stats tool. The report is pretty JSON, or the empty sentinel.
pub async fn execute(
    _args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let session = session.lock().await;
    let report = session.log().stats_report()?;
    Ok(ToolCallResult::text(report))
}

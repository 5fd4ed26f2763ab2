//! Tool: think / ponder: append one entry to the session log.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use think_tool::{EntryLabel, Operation};

use crate::session::SessionManager;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

/// Return the tool definition for the append tool of `label`.
pub fn definition(label: &EntryLabel) -> ToolDefinition {
    let verb = label.verb();
    let noun = label.noun();
    ToolDefinition {
        name: label.tool_name(Operation::Append),
        description: Some(format!(
            "Use this tool to {verb} about something. It will not obtain new information \
             or change anything, but just append the {noun} to the log. \
             Use it when complex reasoning or cache memory is needed."
        )),
        input_schema: json!({
            "type": "object",
            "properties": {
                noun: {
                    "type": "string",
                    "description": format!(
                        "A thought to {verb} about. This can be structured reasoning, \
                         step-by-step analysis, policy verification, or any other mental \
                         process that helps with problem-solving."
                    )
                }
            },
            "required": [noun]
        }),
    }
}

/// Execute the append tool.
pub async fn execute(
    args: Value,
    session: &Arc<Mutex<SessionManager>>,
) -> McpResult<ToolCallResult> {
    let mut session = session.lock().await;
    let noun = session.label().noun().to_string();

    let text = match args.get(&noun) {
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            return Err(McpError::InvalidParams(format!(
                "'{noun}' must be a string"
            )))
        }
        None => {
            return Err(McpError::InvalidParams(format!(
                "Missing required argument '{noun}'"
            )))
        }
    };

    Ok(ToolCallResult::text(session.log_mut().append(text)))
}

//! Message framing: JSON-RPC text to typed messages and back.

use serde_json::Value;

use crate::types::{
    JsonRpcError, JsonRpcMessage, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, McpError,
    McpResult,
};

/// Parse one JSON-RPC message.
///
/// A `method` with an `id` is a request, a `method` without one is a
/// notification; otherwise `result` or `error` mark a response.
pub fn parse_message(input: &str) -> McpResult<JsonRpcMessage> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| McpError::ParseError(e.to_string()))?;

    if !value.is_object() {
        return Err(McpError::InvalidRequest(
            "JSON-RPC message must be an object".to_string(),
        ));
    }

    let invalid = |e: serde_json::Error| McpError::InvalidRequest(e.to_string());

    if value.get("method").is_some() {
        if value.get("id").is_some() {
            let request: JsonRpcRequest = serde_json::from_value(value).map_err(invalid)?;
            return Ok(JsonRpcMessage::Request(request));
        }
        let notification: JsonRpcNotification = serde_json::from_value(value).map_err(invalid)?;
        return Ok(JsonRpcMessage::Notification(notification));
    }

    if value.get("result").is_some() {
        let response: JsonRpcResponse = serde_json::from_value(value).map_err(invalid)?;
        return Ok(JsonRpcMessage::Response(response));
    }

    if value.get("error").is_some() {
        let error: JsonRpcError = serde_json::from_value(value).map_err(invalid)?;
        return Ok(JsonRpcMessage::Error(error));
    }

    Err(McpError::InvalidRequest(
        "Message has neither 'method', 'result' nor 'error'".to_string(),
    ))
}

/// Serialize a response as one newline-terminated line.
pub fn frame_message(response: &Value) -> McpResult<String> {
    let mut line = serde_json::to_string(response)?;
    line.push('\n');
    Ok(line)
}

/// Serialize a response with a `Content-Length` header.
pub fn frame_with_header(response: &Value) -> McpResult<String> {
    let json = serde_json::to_string(response)?;
    Ok(format!("Content-Length: {}\r\n\r\n{json}", json.len()))
}

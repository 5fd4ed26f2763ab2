//! Phase 10: The stdio transport loop over in-memory streams.

use serde_json::Value;

use think_tool::Variant;
use think_tool_mcp::transport::StdioTransport;
use think_tool_mcp::types::{error_codes, McpError};
use think_tool_mcp::{build_handler, ServerConfig};

fn transport(variant: Variant) -> StdioTransport {
    let config = ServerConfig {
        variant,
        ..Default::default()
    };
    StdioTransport::new(build_handler(&config))
}

fn lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn framed(body: &str) -> String {
    format!("Content-Length: {}\r\n\r\n{body}", body.len())
}

/// Split `Content-Length` framed output back into bodies.
fn unframe(output: &[u8]) -> Vec<Value> {
    let mut rest = String::from_utf8_lossy(output).to_string();
    let mut bodies = Vec::new();
    while let Some(header_end) = rest.find("\r\n\r\n") {
        let len: usize = rest[..header_end]
            .trim_start_matches("Content-Length:")
            .trim()
            .parse()
            .unwrap();
        let start = header_end + 4;
        bodies.push(serde_json::from_str(&rest[start..start + len]).unwrap());
        rest = rest[start + len..].to_string();
    }
    bodies
}

#[tokio::test]
async fn test_newline_delimited_session() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"t","version":"1"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"think","arguments":{"thought":"over stdio"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_thought_stats","arguments":{}}}"#,
        "\n",
    );

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let responses = lines(&output);
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "think-tool");
    assert_eq!(
        responses[1]["result"]["content"][0]["text"],
        "Thought recorded: over stdio"
    );
    let stats: Value =
        serde_json::from_str(responses[2]["result"]["content"][0]["text"].as_str().unwrap())
            .unwrap();
    assert_eq!(stats["longest_thought_length"], 10);
}

#[tokio::test]
async fn test_content_length_session() {
    let mut input = framed(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);
    input.push_str(&framed(
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_ponderings"}}"#,
    ));

    let transport = transport(Variant::Ponder);
    let mut output = Vec::new();
    transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap();

    assert!(String::from_utf8_lossy(&output).starts_with("Content-Length: "));
    let responses = unframe(&output);
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["tools"][0]["name"], "ponder");
    assert_eq!(
        responses[1]["result"]["content"][0]["text"],
        "No ponderings have been recorded yet."
    );
}

#[tokio::test]
async fn test_extra_headers_ignored() {
    let body = r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#;
    let input = format!(
        "Content-Length: {}\r\nContent-Type: application/vscode-jsonrpc; charset=utf-8\r\n\r\n{body}",
        body.len()
    );

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let responses = unframe(&output);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 1);
}

#[tokio::test]
async fn test_parse_error_reported_with_null_id() {
    let input = "{not json}\n{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"ping\"}\n";

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let responses = lines(&output);
    assert_eq!(responses.len(), 2);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(responses[1]["id"], 5);
}

#[tokio::test]
async fn test_invalid_utf8_line_reported_and_skipped() {
    let mut input = b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"\xff\xfe\"}\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n");

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with(input.as_slice(), &mut output)
        .await
        .unwrap();

    let responses = lines(&output);
    assert_eq!(responses.len(), 2);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[0]["error"]["code"], error_codes::PARSE_ERROR);
    assert_eq!(responses[1]["id"], 2);
    assert!(responses[1]["result"].is_object());
}

#[tokio::test]
async fn test_non_object_is_invalid_request() {
    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with("[1,2,3]\n".as_bytes(), &mut output)
        .await
        .unwrap();

    let responses = lines(&output);
    assert_eq!(responses[0]["error"]["code"], error_codes::INVALID_REQUEST);
}

#[tokio::test]
async fn test_stops_after_shutdown() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"shutdown"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#,
        "\n",
    );

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let responses = lines(&output);
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 1);
    assert!(transport.handler().shutdown_requested());
}

#[tokio::test]
async fn test_oversized_frame_rejected() {
    let input = format!("Content-Length: {}\r\n\r\n", 9 * 1024 * 1024);

    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    let err = transport
        .run_with(input.as_bytes(), &mut output)
        .await
        .unwrap_err();

    assert!(matches!(err, McpError::ContentTooLarge { .. }));
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_invalid_content_length_rejected() {
    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    let err = transport
        .run_with("Content-Length: lots\r\n\r\n".as_bytes(), &mut output)
        .await
        .unwrap_err();

    assert!(matches!(err, McpError::ParseError(_)));
}

#[tokio::test]
async fn test_empty_input_ends_cleanly() {
    let transport = transport(Variant::Think);
    let mut output = Vec::new();
    transport.run_with(&b""[..], &mut output).await.unwrap();
    assert!(output.is_empty());
}

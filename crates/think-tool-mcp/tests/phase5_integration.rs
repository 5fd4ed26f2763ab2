//! Phase 5: The four log tools end to end through a mock client.

mod common;

use serde_json::{json, Value};

use think_tool::Variant;
use think_tool_mcp::types::error_codes;
use think_tool_mcp::types::mcp_error_codes;

use common::fixtures::create_client;

#[tokio::test]
async fn test_think_records_and_confirms() {
    let mut client = create_client(Variant::Think);
    client.initialize().await;

    let text = client
        .call_tool_text("think", Some(json!({ "thought": "Check the edge cases" })))
        .await;
    assert_eq!(text, "Thought recorded: Check the edge cases");
}

#[tokio::test]
async fn test_think_truncates_confirmation() {
    let mut client = create_client(Variant::Think);

    let long = "a".repeat(60);
    let text = client
        .call_tool_text("think", Some(json!({ "thought": long })))
        .await;
    assert_eq!(text, format!("Thought recorded: {}...", "a".repeat(50)));

    let listing = client.call_tool_text("get_thoughts", None).await;
    assert!(listing.contains(&"a".repeat(60)));
}

#[tokio::test]
async fn test_get_thoughts_lists_in_order() {
    let mut client = create_client(Variant::Think);

    for thought in ["first", "second", "third"] {
        client
            .call_tool("think", Some(json!({ "thought": thought })))
            .await;
    }

    let listing = client.call_tool_text("get_thoughts", None).await;
    assert_eq!(
        listing,
        "Thought #1 (2025-03-01T10:00:00.000000):\nfirst\n\n\
         Thought #2 (2025-03-01T10:00:01.000000):\nsecond\n\n\
         Thought #3 (2025-03-01T10:00:02.000000):\nthird\n"
    );
}

#[tokio::test]
async fn test_empty_log_sentinel() {
    let mut client = create_client(Variant::Think);

    assert_eq!(
        client.call_tool_text("get_thoughts", None).await,
        "No thoughts have been recorded yet."
    );
    assert_eq!(
        client.call_tool_text("get_thought_stats", None).await,
        "No thoughts have been recorded yet."
    );
}

#[tokio::test]
async fn test_stats_report() {
    let mut client = create_client(Variant::Think);

    for thought in ["abc", "abcde", "vwxyz", "ab"] {
        client
            .call_tool("think", Some(json!({ "thought": thought })))
            .await;
    }

    let text = client.call_tool_text("get_thought_stats", None).await;
    let stats: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(stats["total_thoughts"], 4);
    assert_eq!(stats["average_length"], 3.75);
    assert_eq!(stats["longest_thought_index"], 2);
    assert_eq!(stats["longest_thought_length"], 5);
    assert!(text.starts_with("{\n  \"total_thoughts\": 4,"));
}

#[tokio::test]
async fn test_clear_thoughts() {
    let mut client = create_client(Variant::Think);

    client
        .call_tool("think", Some(json!({ "thought": "one" })))
        .await;
    client
        .call_tool("think", Some(json!({ "thought": "two" })))
        .await;

    assert_eq!(
        client.call_tool_text("clear_thoughts", None).await,
        "Cleared 2 recorded thoughts."
    );
    assert_eq!(
        client.call_tool_text("get_thoughts", None).await,
        "No thoughts have been recorded yet."
    );
    assert_eq!(
        client.call_tool_text("clear_thoughts", None).await,
        "Cleared 0 recorded thoughts."
    );
}

#[tokio::test]
async fn test_ponder_deployment() {
    let mut client = create_client(Variant::Ponder);
    client.initialize().await;

    assert_eq!(
        client
            .call_tool_text("ponder", Some(json!({ "pondering": "why?" })))
            .await,
        "Pondering recorded: why?"
    );
    assert!(client
        .call_tool_text("get_ponderings", None)
        .await
        .starts_with("Pondering #1 ("));

    let stats: Value =
        serde_json::from_str(&client.call_tool_text("get_pondering_stats", None).await).unwrap();
    assert_eq!(stats["total_ponderings"], 1);
    assert_eq!(stats["longest_pondering_index"], 1);
    assert_eq!(stats["longest_pondering_length"], 4);

    assert_eq!(
        client.call_tool_text("clear_ponderings", None).await,
        "Cleared 1 recorded ponderings."
    );
}

#[tokio::test]
async fn test_other_variant_tools_not_found() {
    let mut client = create_client(Variant::Ponder);

    let response = client
        .call_tool("think", Some(json!({ "thought": "wrong server" })))
        .await;
    assert_eq!(response["error"]["code"], mcp_error_codes::TOOL_NOT_FOUND);
}

#[tokio::test]
async fn test_missing_argument_is_tool_error() {
    let mut client = create_client(Variant::Think);

    let response = client.call_tool("think", None).await;
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);
    assert!(response["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("'thought'"));

    // Nothing was recorded.
    assert_eq!(
        client.call_tool_text("get_thoughts", None).await,
        "No thoughts have been recorded yet."
    );
}

#[tokio::test]
async fn test_non_string_argument_is_tool_error() {
    let mut client = create_client(Variant::Think);

    let response = client
        .call_tool("think", Some(json!({ "thought": 42 })))
        .await;
    assert_eq!(response["result"]["isError"], true);
}

#[tokio::test]
async fn test_tools_call_without_params() {
    let mut client = create_client(Variant::Think);

    let response = client.request("tools/call", None).await;
    assert_eq!(response["error"]["code"], error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_read_tools_are_idempotent() {
    let mut client = create_client(Variant::Think);

    client
        .call_tool("think", Some(json!({ "thought": "stable" })))
        .await;

    let list_a = client.call_tool_text("get_thoughts", None).await;
    let list_b = client.call_tool_text("get_thoughts", None).await;
    assert_eq!(list_a, list_b);

    let stats_a = client.call_tool_text("get_thought_stats", None).await;
    let stats_b = client.call_tool_text("get_thought_stats", None).await;
    assert_eq!(stats_a, stats_b);
}

#[tokio::test]
async fn test_tool_calls_counted_in_session() {
    let mut client = create_client(Variant::Think);

    client
        .call_tool("think", Some(json!({ "thought": "x" })))
        .await;
    client.call_tool("get_thoughts", None).await;
    client.call_tool("no_such_tool", None).await;

    let session = client.handler().session().lock().await;
    assert_eq!(session.tool_calls(), 2);
    assert_eq!(session.log().len(), 1);
}

#[tokio::test]
async fn test_shutdown_reports_session_summary() {
    let mut client = create_client(Variant::Ponder);

    client
        .call_tool("ponder", Some(json!({ "pondering": "x" })))
        .await;
    client.shutdown().await;

    assert_eq!(client.handler().server_name(), "ponder-tool");
    let session = client.handler().session().lock().await;
    assert!(session
        .summary()
        .starts_with("1 ponderings recorded, 1 tool calls over "));
}

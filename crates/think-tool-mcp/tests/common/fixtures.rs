//! Test fixtures: sessions with deterministic clocks.

use std::sync::Arc;
use tokio::sync::Mutex;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use think_tool::{SteppingClock, Variant};
use think_tool_mcp::protocol::ProtocolHandler;
use think_tool_mcp::session::SessionManager;

use super::mock_client::MockClient;

/// First timestamp handed out by test clocks.
pub fn test_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_micro_opt(10, 0, 0, 0)
        .unwrap()
}

/// A session whose clock advances one second per entry.
pub fn create_session(variant: Variant) -> Arc<Mutex<SessionManager>> {
    let clock = SteppingClock::new(test_start(), Duration::seconds(1));
    Arc::new(Mutex::new(SessionManager::with_clock(variant.label(), clock)))
}

/// A think session.
pub fn create_test_session() -> Arc<Mutex<SessionManager>> {
    create_session(Variant::Think)
}

/// A handler named after the variant's default server name.
pub fn create_handler(variant: Variant) -> ProtocolHandler {
    ProtocolHandler::new(create_session(variant), variant.default_server_name())
}

/// A mock client over a fresh handler.
pub fn create_client(variant: Variant) -> MockClient {
    MockClient::new(create_handler(variant))
}

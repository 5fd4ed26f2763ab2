//! think-tool MCP server: a reasoning scratchpad for LLMs.
//!
//! Exposes the think-tool entry log as four MCP tools over stdio. The
//! "think" deployment names them `think`, `get_thoughts`, `clear_thoughts`
//! and `get_thought_stats`; the "ponder" deployment uses the pondering
//! vocabulary for the same log.

pub mod config;
pub mod protocol;
pub mod session;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::ServerConfig;
pub use protocol::ProtocolHandler;
pub use session::SessionManager;
pub use transport::StdioTransport;

use std::sync::Arc;
use tokio::sync::Mutex;

/// Build the handler for `config` around a fresh, empty session.
pub fn build_handler(config: &ServerConfig) -> ProtocolHandler {
    let session = SessionManager::new(config.variant.label());
    ProtocolHandler::new(Arc::new(Mutex::new(session)), config.server_name())
}

//! MCP capability negotiation during initialization.

use think_tool::EntryLabel;

use crate::types::{ClientCapabilities, InitializeParams, InitializeResult, McpResult, MCP_VERSION};

/// Stored client capabilities after negotiation.
#[derive(Debug, Clone, Default)]
pub struct NegotiatedCapabilities {
    /// The client's declared capabilities.
    pub client: ClientCapabilities,
    /// Name of the connected client, once known.
    pub client_name: Option<String>,
    /// Whether the handshake is complete.
    pub initialized: bool,
}

impl NegotiatedCapabilities {
    /// Process an initialize request and return the result.
    pub fn negotiate(
        &mut self,
        params: InitializeParams,
        server_name: &str,
        label: &EntryLabel,
    ) -> McpResult<InitializeResult> {
        if params.protocol_version != MCP_VERSION {
            tracing::warn!(
                "Client requested protocol version {}, server supports {}. Proceeding with server version.",
                params.protocol_version,
                MCP_VERSION
            );
        }

        self.client = params.capabilities;

        tracing::info!(
            "Initialized with client: {} v{}",
            params.client_info.name,
            params.client_info.version
        );
        self.client_name = Some(params.client_info.name);

        Ok(InitializeResult::for_server(server_name, label))
    }

    /// Mark the handshake as complete (after receiving `initialized` notification).
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
        tracing::info!("MCP handshake complete");
    }
}

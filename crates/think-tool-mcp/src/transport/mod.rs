//! Transports carrying JSON-RPC between client and server.

pub mod framing;
pub mod stdio;

pub use stdio::StdioTransport;

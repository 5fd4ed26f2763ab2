//! JSON-RPC protocol handling: dispatch, negotiation, validation.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;

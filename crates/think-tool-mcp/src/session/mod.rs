//! Session management: the per-server entry log.

pub mod manager;

pub use manager::SessionManager;

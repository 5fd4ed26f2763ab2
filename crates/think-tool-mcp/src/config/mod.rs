//! Server configuration: file, environment and CLI layers.

pub mod loader;

pub use loader::{
    default_config_path, load_config, resolve_config, resolve_layers, ConfigOverrides,
    ServerConfig,
};

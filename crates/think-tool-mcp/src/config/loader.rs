//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use think_tool::Variant;

use crate::types::{McpError, McpResult};

/// Environment variable selecting the variant.
pub const VARIANT_ENV: &str = "THINK_TOOL_VARIANT";
/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "THINK_TOOL_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Which deployment to serve ("think" or "ponder").
    #[serde(default)]
    pub variant: Variant,
    /// Name reported to clients; defaults per variant.
    #[serde(default)]
    pub server_name: Option<String>,
    /// Transport type. Only "stdio" is supported.
    #[serde(default = "default_transport")]
    pub transport: String,
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_transport() -> String {
    "stdio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            server_name: None,
            transport: default_transport(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// The name reported in `serverInfo`.
    pub fn server_name(&self) -> String {
        self.server_name
            .clone()
            .unwrap_or_else(|| self.variant.default_server_name().to_string())
    }

    /// Reject settings the server cannot honour.
    pub fn validate(&self) -> McpResult<()> {
        if self.transport != "stdio" {
            return Err(McpError::Config(format!(
                "Unsupported transport '{}', only 'stdio' is available",
                self.transport
            )));
        }
        Ok(())
    }
}

/// Settings that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Variant name.
    pub variant: Option<String>,
    /// Server name.
    pub server_name: Option<String>,
    /// Log level.
    pub log_level: Option<String>,
    /// Config file to read.
    pub config_path: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Overrides taken from `THINK_TOOL_VARIANT` and `THINK_TOOL_CONFIG`.
    pub fn from_env() -> Self {
        Self {
            variant: std::env::var(VARIANT_ENV).ok(),
            config_path: std::env::var(CONFIG_ENV).ok().map(PathBuf::from),
            ..Default::default()
        }
    }

    /// Fill unset fields from `lower`.
    pub fn or(self, lower: ConfigOverrides) -> Self {
        Self {
            variant: self.variant.or(lower.variant),
            server_name: self.server_name.or(lower.server_name),
            log_level: self.log_level.or(lower.log_level),
            config_path: self.config_path.or(lower.config_path),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> McpResult<ServerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        McpError::Io(std::io::Error::other(format!(
            "Failed to read config file {}: {e}",
            path.display()
        )))
    })?;

    toml::from_str(&content).map_err(|e| McpError::Config(format!("Failed to parse config: {e}")))
}

/// `<config dir>/think-tool/config.toml`, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("think-tool").join("config.toml"))
}

/// Resolve the configuration using priority order:
/// 1. CLI flags
/// 2. THINK_TOOL_VARIANT / THINK_TOOL_CONFIG environment variables
/// 3. Config file (explicit path, else the default path when present)
/// 4. Built-in defaults
pub fn resolve_config(cli: ConfigOverrides) -> McpResult<ServerConfig> {
    let mut layers = cli.or(ConfigOverrides::from_env());
    if layers.config_path.is_none() {
        layers.config_path = default_config_path().filter(|p| p.exists());
    }
    resolve_layers(layers)
}

/// Apply already-merged overrides on top of the file named in them.
pub fn resolve_layers(overrides: ConfigOverrides) -> McpResult<ServerConfig> {
    let mut config = match &overrides.config_path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config(path)?
        }
        None => ServerConfig::default(),
    };

    if let Some(name) = overrides.variant {
        config.variant = name
            .parse()
            .map_err(|e: think_tool::ThinkError| McpError::Config(e.to_string()))?;
    }
    if let Some(name) = overrides.server_name {
        config.server_name = Some(name);
    }
    if let Some(level) = overrides.log_level {
        config.log_level = level;
    }

    config.validate()?;
    Ok(config)
}

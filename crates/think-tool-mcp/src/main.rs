//! think-tool MCP server: entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use think_tool_mcp::config::{resolve_config, ConfigOverrides};
use think_tool_mcp::tools::ToolRegistry;
use think_tool_mcp::{build_handler, StdioTransport};

#[derive(Parser)]
#[command(
    name = "think-tool-mcp",
    about = "MCP server giving LLMs a scratchpad to think (or ponder) out loud",
    version
)]
struct Cli {
    /// Deployment to serve: "think" or "ponder".
    #[arg(long, global = true)]
    variant: Option<String>,

    /// Server name reported to clients.
    #[arg(long, global = true)]
    name: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the tools over stdio (default).
    Serve,
    /// Print the tool definitions as JSON and exit.
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(ConfigOverrides {
        variant: cli.variant,
        server_name: cli.name,
        log_level: cli.log_level,
        config_path: cli.config,
    })?;

    // Initialize logging on stderr; stdout carries the protocol.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!(
                "Starting {} Tool MCP Server with {} transport...",
                config.variant.title(),
                config.transport
            );
            tracing::info!("Server name: {}", config.server_name());

            let handler = build_handler(&config);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Tools => {
            let tools = ToolRegistry::list_tools(&config.variant.label());
            println!("{}", serde_json::to_string_pretty(&tools)?);
        }
    }

    Ok(())
}

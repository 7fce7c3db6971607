use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::mcp::protocol::ListToolsResult;
use crate::mcp::{McpServer, ToolRegistry};

/// Build the MCP server described by `config`
#[inline]
pub fn build_server(config: &Config) -> McpServer {
    let tools = ToolRegistry::create_default().with_pretty_output(config.output.pretty);

    McpServer::new(
        config.server.name.clone(),
        config.server.version.clone(),
        tools,
    )
}

/// Serve MCP over stdio until stdin closes.
///
/// stdout carries protocol traffic only; everything else is logged to stderr.
#[inline]
pub async fn serve_mcp(config: &Config) -> Result<()> {
    let server = build_server(config);

    info!(
        "MCP server initialized with tools: {}",
        server
            .tools
            .list_tools()
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    server
        .serve_stdio()
        .await
        .context("MCP server failed")?;

    info!("MCP server stopped normally");
    Ok(())
}

/// Print the tool descriptors served by `tools/list`
#[inline]
pub fn print_tools() -> Result<()> {
    let result = ListToolsResult {
        tools: ToolRegistry::create_default().list_tools(),
    };

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize tool list")?;
    println!("{}", json);
    Ok(())
}

/// Print the effective configuration as TOML
#[inline]
pub fn show_config(config: &Config) -> Result<()> {
    let content = config
        .to_toml()
        .context("Failed to serialize configuration")?;

    println!("# Config file: {}", config.config_file_path().display());
    if !config.config_file_path().exists() {
        println!("# (file not found, showing defaults)");
    }
    print!("{}", content);
    Ok(())
}

/// Write the default configuration file unless one already exists
#[inline]
pub fn init_config(config: &Config) -> Result<()> {
    let config_path = config.config_file_path();
    if config_path.exists() {
        println!(
            "Configuration already exists at {}",
            config_path.display()
        );
        return Ok(());
    }

    Config {
        base_dir: config.base_dir.clone(),
        ..Config::default()
    }
    .save()
    .context("Failed to save configuration")?;

    println!("Configuration written to {}", config_path.display());
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context;
use character_counter_mcp::Result;
use character_counter_mcp::commands::{init_config, print_tools, serve_mcp, show_config};
use character_counter_mcp::config::{Config, get_config_dir};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "character-counter-mcp")]
#[command(about = "MCP server that counts characters and reports character statistics")]
#[command(version)]
struct Cli {
    /// Directory holding config.toml (defaults to ~/.character-counter-mcp)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server on stdio (default)
    Serve,
    /// Print the available tools as JSON
    Tools,
    /// Show or create the configuration file
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Write a default config.toml if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.logging.env_filter()?,
    };

    // stdout is reserved for protocol traffic
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => get_config_dir()?,
    };
    let config = Config::load(&config_dir).context("Failed to load configuration")?;

    init_tracing(&config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            serve_mcp(&config).await?;
        }
        Commands::Tools => {
            print_tools()?;
        }
        Commands::Config { show, init } => {
            if init {
                init_config(&config)?;
            }
            if show || !init {
                show_config(&config)?;
            }
        }
    }

    Ok(())
}

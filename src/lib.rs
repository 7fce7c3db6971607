use thiserror::Error;

pub type Result<T> = std::result::Result<T, CounterError>;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod analysis;
pub mod commands;
pub mod config;
pub mod mcp;

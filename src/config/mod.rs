// Configuration management module
// Handles the optional TOML configuration file and its defaults

pub mod settings;

#[cfg(test)]
mod tests;

pub use settings::{Config, ConfigError, LoggingConfig, OutputConfig, ServerConfig};

/// Get the default configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::default_dir()
}

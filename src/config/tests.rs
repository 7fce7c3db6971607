use super::*;
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn load_rejects_malformed_file() {
        let temp_dir = TempDir::new().expect("should create TempDir successfully");
        let invalid_toml = r#"
            [server
            name = "counter"
        "#;
        fs::write(temp_dir.path().join("config.toml"), invalid_toml)
            .expect("should write config file successfully");

        let err = Config::load(temp_dir.path()).expect_err("malformed toml");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("should create TempDir successfully");
        fs::write(
            temp_dir.path().join("config.toml"),
            "[server]\nversion = \"\"\n",
        )
        .expect("should write config file successfully");

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn load_reads_output_settings() {
        let temp_dir = TempDir::new().expect("should create TempDir successfully");
        fs::write(
            temp_dir.path().join("config.toml"),
            "[output]\npretty = false\n",
        )
        .expect("should write config file successfully");

        let config = Config::load(temp_dir.path()).expect("should load config successfully");
        assert!(!config.output.pretty);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn default_dir_is_named_after_server() {
        if let Ok(dir) = get_config_dir() {
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .expect("directory has a name");
            assert!(name.ends_with("character-counter-mcp"));
        }
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;
    use crate::CounterError;

    #[test]
    fn config_errors_surface_as_config_variant() {
        let mut config = Config::default();
        config.logging.filter = "character_counter_mcp=loud".to_string();

        let err: CounterError = config
            .logging
            .env_filter()
            .expect_err("unparsable filter")
            .into();
        assert!(matches!(
            err,
            CounterError::Config(ConfigError::InvalidLogFilter(_))
        ));
    }

    #[test]
    fn load_failures_surface_as_other_variant() {
        let temp_dir = TempDir::new().expect("should create TempDir successfully");
        fs::write(temp_dir.path().join("config.toml"), "[server\n")
            .expect("should write config file successfully");

        let err: CounterError = Config::load(temp_dir.path())
            .expect_err("malformed toml")
            .into();
        assert!(matches!(err, CounterError::Other(_)));
    }
}

use super::*;
use tempfile::TempDir;

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.server.name, "character-counter-mcp");
    assert_eq!(config.server.version, "1.0.0");
    assert!(config.output.pretty);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn config_validation() {
    let config = Config::default();
    assert!(config.validate().is_ok());

    let mut invalid_config = config.clone();
    invalid_config.server.name = "  ".to_string();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidServerName(_))
    ));

    let mut invalid_config = config.clone();
    invalid_config.server.version = String::new();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidServerVersion(_))
    ));

    let mut invalid_config = config;
    invalid_config.logging.filter = "character_counter_mcp=loud".to_string();
    assert!(matches!(
        invalid_config.validate(),
        Err(ConfigError::InvalidLogFilter(_))
    ));
}

#[test]
fn log_filter_accepts_directives() {
    let logging = LoggingConfig {
        filter: "warn,character_counter_mcp=debug".to_string(),
    };
    assert!(logging.env_filter().is_ok());
}

#[test]
fn toml_serialization() {
    let config = Config::default();
    let toml_str = config.to_toml().expect("should serialize toml correctly");
    let parsed_config: Config = toml::from_str(&toml_str).expect("should parse toml correctly");
    assert_eq!(config, parsed_config);
}

#[test]
fn partial_config_uses_defaults() {
    let partial_toml = r#"
        [server]
        name = "counter"
    "#;

    let config: Config = toml::from_str(partial_toml).expect("should parse toml correctly");
    assert_eq!(config.server.name, "counter");
    assert_eq!(config.server.version, "1.0.0");
    assert!(config.output.pretty);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn load_missing_config() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let config = Config::load(temp_dir.path()).expect("should load config successfully");

    assert_eq!(config.server, ServerConfig::default());
    assert_eq!(config.get_base_dir(), temp_dir.path());
}

#[test]
fn save_then_load() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let base_dir = temp_dir.path().join("nested");

    let config = Config {
        server: ServerConfig {
            name: "letters".to_string(),
            version: "2.1.0".to_string(),
        },
        output: OutputConfig { pretty: false },
        logging: LoggingConfig {
            filter: "debug".to_string(),
        },
        base_dir: base_dir.clone(),
    };
    config.save().expect("should save config successfully");
    assert!(config.config_file_path().exists());

    let loaded = Config::load(&base_dir).expect("should load config successfully");
    assert_eq!(loaded, config);
}

#[test]
fn save_rejects_invalid_config() {
    let temp_dir = TempDir::new().expect("should create TempDir successfully");
    let mut config = Config::load(temp_dir.path()).expect("should load config successfully");
    config.server.name = String::new();

    assert!(config.save().is_err());
    assert!(!config.config_file_path().exists());
}

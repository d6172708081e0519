mod types;

pub use types::{Config, GraphqlConfig, ServerConfig, StoreConfig};

use crate::error::{BlogqlError, Result};
use ::config::{Environment, File, FileFormat};
use std::fs;

/// Prefix for environment overrides, e.g. `BLOGQL__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "BLOGQL";

/// Load configuration from an optional TOML file layered under environment overrides
pub fn load_config(path: &str) -> Result<Config> {
    let source = ::config::Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = source.try_deserialize()?;
    validate(&config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    validate(config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| BlogqlError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    config.server.validate().map_err(BlogqlError::Config)?;
    config.graphql.validate().map_err(BlogqlError::Config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;

    // Tests that call `load_config` read the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_toml(contents: &str) -> NamedTempFile {
        let mut temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_valid_config() {
        let _guard = env_lock();
        let temp_file = write_toml(
            r#"
[server]
port = 5000
bind = "127.0.0.1"

[store]
seed = false

[graphql]
introspection = false
max_depth = 8
"#,
        );

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert!(!config.store.seed);
        assert!(!config.graphql.introspection);
        assert_eq!(config.graphql.max_depth, 8);
        assert_eq!(config.graphql.max_complexity, 256);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 4000);
        assert!(config.store.seed);
    }

    #[test]
    fn test_load_invalid_bind() {
        let _guard = env_lock();
        let temp_file = write_toml(
            r#"
[server]
bind = "not-an-address"
"#,
        );

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(BlogqlError::Config(_))));
    }

    #[test]
    fn test_save_and_load_config() {
        let _guard = env_lock();
        let mut config = Config::default();
        config.server.port = 4321;
        config.store.seed = false;

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded = load_config(path).unwrap();

        assert_eq!(loaded.server.port, 4321);
        assert!(!loaded.store.seed);
    }

    #[test]
    fn test_environment_overrides_missing_file() {
        let _guard = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        std::env::set_var("BLOGQL__SERVER__PORT", "8081");
        std::env::set_var("BLOGQL__STORE__SEED", "false");
        let config = load_config(path.to_str().unwrap());
        std::env::remove_var("BLOGQL__SERVER__PORT");
        std::env::remove_var("BLOGQL__STORE__SEED");

        let config = config.unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(!config.store.seed);
        assert_eq!(config.server.bind, "0.0.0.0");
    }

    #[test]
    fn test_environment_wins_over_file() {
        let _guard = env_lock();
        let temp_file = write_toml(
            r#"
[server]
port = 5000
"#,
        );

        std::env::set_var("BLOGQL__SERVER__PORT", "6000");
        let config = load_config(temp_file.path().to_str().unwrap());
        std::env::remove_var("BLOGQL__SERVER__PORT");

        assert_eq!(config.unwrap().server.port, 6000);
    }
}

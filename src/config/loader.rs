//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the upstream base URL.
pub const ENV_BASE_URL: &str = "SUPABASE_URL";

/// Environment variable naming the upstream service credential.
pub const ENV_SERVICE_KEY: &str = "SUPABASE_SERVICE_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// Layering: built-in defaults, then the optional TOML file, then the two
/// environment overrides, then semantic validation. With no file and no
/// environment this fails on the missing upstream values.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RelayConfig::default(),
    };

    apply_env(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay the process environment onto a loaded configuration.
fn apply_env(config: &mut RelayConfig) {
    if let Ok(value) = env::var(ENV_BASE_URL) {
        config.upstream.base_url = value;
    }
    if let Ok(value) = env::var(ENV_SERVICE_KEY) {
        config.upstream.service_key = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize the tests that
    // touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn missing_environment_fails_validation() {
        let _guard = lock_env();
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_SERVICE_KEY);

        match load_config(None) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn environment_supplies_the_upstream_values() {
        let _guard = lock_env();
        env::set_var(ENV_BASE_URL, "http://localhost:54321");
        env::set_var(ENV_SERVICE_KEY, "service-key");

        let config = load_config(None).unwrap();
        assert_eq!(config.upstream.base_url, "http://localhost:54321");
        assert_eq!(config.upstream.service_key, "service-key");

        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_SERVICE_KEY);
    }

    #[test]
    fn environment_overrides_file_values() {
        let _guard = lock_env();
        env::set_var(ENV_BASE_URL, "http://from-env:54321");
        env::set_var(ENV_SERVICE_KEY, "env-key");

        let mut config = RelayConfig::default();
        config.upstream.base_url = "http://from-file:54321".to_string();
        config.upstream.service_key = "file-key".to_string();
        apply_env(&mut config);

        assert_eq!(config.upstream.base_url, "http://from-env:54321");
        assert_eq!(config.upstream.service_key, "env-key");

        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_SERVICE_KEY);
    }

    #[test]
    fn config_file_loads_and_environment_overlays_it() {
        let _guard = lock_env();
        env::remove_var(ENV_BASE_URL);
        env::set_var(ENV_SERVICE_KEY, "env-key");

        let path = env::temp_dir().join(format!(
            "fridge-relay-loader-{}.toml",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:9200"

            [upstream]
            base_url = "http://from-file:54321"
            service_key = "file-key"
            "#,
        )
        .unwrap();

        let loaded = load_config(Some(path.as_path()));
        let _ = fs::remove_file(&path);
        let config = loaded.unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9200");
        assert_eq!(config.upstream.base_url, "http://from-file:54321");
        // Environment wins over the file.
        assert_eq!(config.upstream.service_key, "env-key");

        env::remove_var(ENV_SERVICE_KEY);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        // Read fails before the environment is consulted; no lock needed.
        let result = load_config(Some(Path::new("/nonexistent/fridge-relay.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

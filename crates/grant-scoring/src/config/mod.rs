use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scorer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub grants: GrantsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let config_dir = env::var("GRANT_CONFIG_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        if let Some(path) = &config_dir {
            if !path.is_dir() {
                return Err(ConfigError::GrantConfigDir { path: path.clone() });
            }
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            grants: GrantsConfig { config_dir },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where grant scoring configurations come from besides the built-ins.
#[derive(Debug, Clone, Default)]
pub struct GrantsConfig {
    pub config_dir: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    GrantConfigDir { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GrantConfigDir { path } => write!(
                f,
                "GRANT_CONFIG_DIR must point to a directory, got '{}'",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("GRANT_CONFIG_DIR");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert!(config.grants.config_dir.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_environment_and_grant_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let dir = env::temp_dir();
        env::set_var("APP_ENV", "CI");
        env::set_var("APP_LOG_LEVEL", "debug");
        env::set_var("GRANT_CONFIG_DIR", &dir);
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.grants.config_dir, Some(dir));
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    fn rejects_grant_dir_that_does_not_exist() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("GRANT_CONFIG_DIR", "/definitely/not/a/grant/dir");
        let result = AppConfig::load();
        reset_env();
        match result {
            Err(ConfigError::GrantConfigDir { path }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/a/grant/dir"))
            }
            other => panic!("expected grant dir error, got {other:?}"),
        }
    }
}

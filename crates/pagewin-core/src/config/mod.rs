//! Application configuration schemas.
//!
//! Sources are merged in order, later ones winning: `config/default`,
//! `config/{PAGEWIN_ENV}`, an explicit TOML file, then environment variables
//! prefixed `PAGEWIN__` (e.g. `PAGEWIN__PAGINATION__MAX_VISIBLE=7`). Every
//! file is optional and every field has a default, so with no files present
//! the built-in settings apply.

pub mod logging;
pub mod pagination;

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use self::logging::LoggingConfig;
use self::pagination::PaginationConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PAGEWIN";

/// Variable naming the environment overlay, e.g. `staging` for `config/staging`.
pub const APP_ENV_VAR: &str = "PAGEWIN_ENV";

/// Directory holding `default` and per-environment configuration files.
pub const CONFIG_DIR: &str = "config";

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default display constraints.
    #[serde(default)]
    #[validate(nested)]
    pub pagination: PaginationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the layered files, `path`, and the process
    /// environment.
    ///
    /// Missing files are not an error. Values that deserialize but fall
    /// outside their allowed ranges fail with a validation error.
    pub fn load(path: &str) -> AppResult<Self> {
        Self::load_with_env(path, None)
    }

    /// Load configuration, reading environment overrides from `env_vars`
    /// instead of the process environment when given.
    pub fn load_with_env(
        path: &str,
        env_vars: Option<config::Map<String, String>>,
    ) -> AppResult<Self> {
        let app_env = std::env::var(APP_ENV_VAR).unwrap_or_else(|_| "development".to_string());
        Self::load_layered(Path::new(CONFIG_DIR), &app_env, path, env_vars)
    }

    /// Load configuration from `config_dir/default`, `config_dir/{app_env}`,
    /// `path`, and environment overrides, in that order.
    pub fn load_layered(
        config_dir: &Path,
        app_env: &str,
        path: &str,
        env_vars: Option<config::Map<String, String>>,
    ) -> AppResult<Self> {
        let default_layer = config_dir.join("default");
        let env_layer = config_dir.join(app_env);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_layer.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_layer.to_string_lossy()).required(false))
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .source(env_vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        tracing::debug!(path, app_env, config = ?app, "Loaded configuration");
        Ok(app)
    }
}

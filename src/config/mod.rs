//! Environment-backed configuration.
//!
//! Both settings have defaults. Override with `RUBRIC_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

/// Scoring backend configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RUBRIC_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the scoring backend. Default: `http://127.0.0.1:5000`.
    pub backend_url: String,

    /// Route of the evaluation endpoint. Default: `/evaluate`.
    pub evaluate_route: String,
}

/// Default backend address used when `RUBRIC_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Default evaluation route used when `RUBRIC_EVALUATE_ROUTE` is not set.
pub const DEFAULT_EVALUATE_ROUTE: &str = "/evaluate";

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            evaluate_route: DEFAULT_EVALUATE_ROUTE.to_string(),
        }
    }
}

impl Config {
    const ENV_BACKEND_URL: &'static str = "RUBRIC_BACKEND_URL";
    const ENV_EVALUATE_ROUTE: &'static str = "RUBRIC_EVALUATE_ROUTE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend_url =
            Self::parse_string_from_env(Self::ENV_BACKEND_URL, defaults.backend_url);
        let evaluate_route =
            Self::parse_string_from_env(Self::ENV_EVALUATE_ROUTE, defaults.evaluate_route);

        let config = Self {
            backend_url,
            evaluate_route,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates URL scheme and route shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(ConfigError::InvalidBackendUrl {
                value: self.backend_url.clone(),
            });
        }

        if !self.evaluate_route.starts_with('/') {
            return Err(ConfigError::InvalidRoute {
                value: self.evaluate_route.clone(),
            });
        }

        Ok(())
    }

    /// Returns the full evaluation endpoint URL.
    pub fn evaluate_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_url.trim_end_matches('/'),
            self.evaluate_route
        )
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}

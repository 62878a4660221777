use std::str::FromStr;

use assetgate_core::validation::rules::RuleOptions;

/// Who validates request input.
///
/// Exactly one executor runs per request: either the method validation
/// interceptor wraps the asset entry points and the body/query extractors
/// only parse, or no interceptor is installed and the extractors validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Interceptor,
    Extractor,
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interceptor" => Ok(ValidationMode::Interceptor),
            "extractor" => Ok(ValidationMode::Extractor),
            other => Err(format!(
                "unknown validation mode '{other}' (expected 'interceptor' or 'extractor')"
            )),
        }
    }
}

/// Validation behaviour of the asset endpoints.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub mode: ValidationMode,
    /// Accept an expiration date equal to the effective date.
    pub allow_equal_dates: bool,
    /// Run the service's fail-fast checks in addition to the declarative ones.
    pub manual_checks: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            allow_equal_dates: true,
            manual_checks: true,
        }
    }
}

impl ValidationConfig {
    /// | Env Var             | Default       |
    /// |---------------------|---------------|
    /// | `VALIDATION_MODE`   | `interceptor` |
    /// | `ALLOW_EQUAL_DATES` | `true`        |
    /// | `MANUAL_CHECKS`     | `true`        |
    pub fn from_env() -> Self {
        let mode: ValidationMode = std::env::var("VALIDATION_MODE")
            .unwrap_or_else(|_| "interceptor".into())
            .parse()
            .unwrap_or_else(|e| panic!("VALIDATION_MODE is invalid: {e}"));

        let allow_equal_dates: bool = std::env::var("ALLOW_EQUAL_DATES")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("ALLOW_EQUAL_DATES must be true or false");

        let manual_checks: bool = std::env::var("MANUAL_CHECKS")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("MANUAL_CHECKS must be true or false");

        Self {
            mode,
            allow_equal_dates,
            manual_checks,
        }
    }

    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            allow_equal_dates: self.allow_equal_dates,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub validation: ValidationConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`ValidationConfig::from_env`] for the validation settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            validation: ValidationConfig::from_env(),
        }
    }
}

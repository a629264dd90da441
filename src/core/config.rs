//! Environment-sourced configuration
//!
//! All tunables are collected here with their defaults. A missing API key is
//! not fatal: the interpreter degrades to rule-based command parsing.

use std::env;

/// Settings for the OpenRouter chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer token for the endpoint; None degrades to fallback parsing
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Attempts per command, counting the first (minimum 1)
    pub max_retries: u32,
    pub rate_limit_per_minute: u32,
    pub rate_limit_per_day: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".into(),
            model: "deepseek/deepseek-chat-v3-0324:free".into(),
            max_retries: 3,
            rate_limit_per_minute: 50,
            rate_limit_per_day: 50,
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "AI Assistant Hub".into(),
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional: OPENROUTER_API_KEY, OPENROUTER_BASE_URL, OPENROUTER_MODEL,
    /// MAX_RETRIES, RATE_LIMIT_PER_MINUTE, RATE_LIMIT_PER_DAY, APP_NAME,
    /// DEBUG_MODE. Malformed numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = ApiConfig::default();
        let app_defaults = AppConfig::default();

        Self {
            api: ApiConfig {
                api_key: env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
                base_url: env::var("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
                model: env::var("OPENROUTER_MODEL").unwrap_or(defaults.model),
                max_retries: env_u32("MAX_RETRIES", defaults.max_retries),
                rate_limit_per_minute: env_u32(
                    "RATE_LIMIT_PER_MINUTE",
                    defaults.rate_limit_per_minute,
                ),
                rate_limit_per_day: env_u32("RATE_LIMIT_PER_DAY", defaults.rate_limit_per_day),
            },
            app: AppConfig {
                name: env::var("APP_NAME").unwrap_or(app_defaults.name),
                debug: env::var("DEBUG_MODE").map(|v| v == "true").unwrap_or(false),
            },
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.is_empty() {
            return Err("base_url must not be empty".into());
        }
        if self.api.max_retries == 0 {
            return Err("max_retries must be at least 1".into());
        }
        if self.api.rate_limit_per_minute == 0 || self.api.rate_limit_per_day == 0 {
            return Err("rate limits must be positive".into());
        }
        Ok(())
    }

    /// Names of required environment variables that are not set
    ///
    /// Used by the status surface; the crate itself treats all variables as
    /// optional.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api.api_key.is_none() {
            missing.push("OPENROUTER_API_KEY");
        }
        missing
    }
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.api.api_key.is_none());
        assert_eq!(config.api.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.api.max_retries, 3);
        assert_eq!(config.api.rate_limit_per_minute, 50);
        assert_eq!(config.api.rate_limit_per_day, 50);
        assert!(!config.app.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_u32_malformed_falls_back() {
        // Unique variable names so parallel tests cannot interfere
        std::env::set_var("HUB_TEST_MAX_RETRIES_BAD", "not-a-number");
        assert_eq!(env_u32("HUB_TEST_MAX_RETRIES_BAD", 3), 3);

        std::env::set_var("HUB_TEST_MAX_RETRIES_OK", "7");
        assert_eq!(env_u32("HUB_TEST_MAX_RETRIES_OK", 3), 7);

        assert_eq!(env_u32("HUB_TEST_MAX_RETRIES_UNSET", 5), 5);
    }

    #[test]
    fn test_validate_rejects_zero_retries() {
        let mut config = Config::default();
        config.api.max_retries = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Config::default();
        config.api.rate_limit_per_day = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_vars_reports_api_key() {
        let config = Config::default();
        assert_eq!(config.missing_vars(), vec!["OPENROUTER_API_KEY"]);

        let mut configured = Config::default();
        configured.api.api_key = Some("sk-test".into());
        assert!(configured.missing_vars().is_empty());
    }
}

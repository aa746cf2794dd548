//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every setting is optional; unset variables fall back to the defaults in
//! [`Config::default`].

use crate::directory::EditPolicy;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether `edit` re-validates its replacement (default: lenient)
    pub edit_policy: EditPolicy,

    /// Number of search results the demo logs at info level (default: 5)
    pub search_result_preview: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_EDIT_POLICY`: `lenient` or `strict` (default: lenient)
    /// - `SEARCH_RESULT_PREVIEW`: results logged per search (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let edit_policy = match env::var("CONTACT_EDIT_POLICY") {
            Ok(val) => val.parse::<EditPolicy>().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACT_EDIT_POLICY".to_string(),
                reason,
            })?,
            Err(_) => EditPolicy::default(),
        };

        let search_result_preview = Self::parse_env_usize("SEARCH_RESULT_PREVIEW", 5)?;

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.to_lowercase())
            .unwrap_or_else(|_| "error".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), log_level),
            });
        }

        Ok(Config {
            edit_policy,
            search_result_preview,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            edit_policy: EditPolicy::Lenient,
            search_result_preview: 5,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = ["CONTACT_EDIT_POLICY", "SEARCH_RESULT_PREVIEW", "LOG_LEVEL"];

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.edit_policy, EditPolicy::Lenient);
        assert_eq!(config.search_result_preview, 5);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_EDIT_POLICY", "strict");
        guard.set("SEARCH_RESULT_PREVIEW", "10");
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.edit_policy, EditPolicy::Strict);
        assert_eq!(config.search_result_preview, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_edit_policy() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_EDIT_POLICY", "paranoid");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_EDIT_POLICY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        let result = Config::parse_env_usize("TEST_USIZE_INVALID", 10);
        assert!(result.is_err());
    }
}

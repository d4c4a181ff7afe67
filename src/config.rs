//! Runtime configuration for the command line tool.
//!
//! Values come from the environment, optionally seeded from a `.env` file.

use std::error::Error;
use std::path::PathBuf;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Default ceiling for a single input, in bytes (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

pub const ENV_LOG_CONFIG: &str = "IPCHECK_LOG_CONFIG";
pub const ENV_MAX_INPUT_BYTES: &str = "IPCHECK_MAX_INPUT_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: PathBuf,
    /// Inputs larger than this are refused before any scanning.
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the configuration from the environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }

        if let Some(value) = lookup(ENV_MAX_INPUT_BYTES) {
            let max: usize = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_MAX_INPUT_BYTES} '{value}': {e}"))?;
            if max == 0 {
                return Err(format!("{ENV_MAX_INPUT_BYTES} must be greater than 0").into());
            }
            config.max_input_bytes = max;
        }

        Ok(config)
    }

    /// Refuse inputs above [`Config::max_input_bytes`].
    pub fn check_input_size(&self, name: &str, len: usize) -> Result<(), Box<dyn Error>> {
        if len > self.max_input_bytes {
            return Err(format!(
                "Input {name} is {len} bytes, limit is {} ({ENV_MAX_INPUT_BYTES})",
                self.max_input_bytes
            )
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_config, PathBuf::from("log4rs.yml"));
        assert_eq!(config.max_input_bytes, 1_048_576);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_LOG_CONFIG, "/etc/ipcheck/log.yml"),
            (ENV_MAX_INPUT_BYTES, " 4096 "),
        ]))
        .unwrap();
        assert_eq!(config.log_config, PathBuf::from("/etc/ipcheck/log.yml"));
        assert_eq!(config.max_input_bytes, 4096);
    }

    #[test]
    fn test_config_invalid_max() {
        assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_INPUT_BYTES, "lots")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_INPUT_BYTES, "0")])).is_err());
    }

    #[test]
    fn test_check_input_size() {
        let config = Config {
            max_input_bytes: 10,
            ..Config::default()
        };
        assert!(config.check_input_size("stdin", 10).is_ok());
        let err = config.check_input_size("stdin", 11).unwrap_err();
        assert!(err.to_string().contains("11 bytes"));
    }
}

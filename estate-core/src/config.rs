//! # Configuration
//!
//! A minimal string key/value store. Applications seed it with defaults
//! and then layer environment overrides on top:
//!
//! ```rust
//! use estate_core::EstateConfig;
//! let mut config = EstateConfig::new();
//!
//! config.set("http.port", "8080");
//! config.load_env("ESTATE__");
//!
//! assert!(config.has("http.port"));
//! ```
//!
//! Environment keys are normalized by stripping the prefix, lower-casing
//! and turning `__` into `.`, so `ESTATE__HTTP__PORT=9000` overrides
//! `http.port`.

use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, Default)]
pub struct EstateConfig {
    values: HashMap<String, String>,
}

impl EstateConfig {
    /// Create an empty config store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Parse a value, returning `None` when it is missing or malformed.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse::<T>().ok())
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Apply overrides from the process environment.
    pub fn load_env(&mut self, prefix: &str) {
        self.load_vars(prefix, std::env::vars());
    }

    pub fn load_vars<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EstateConfig;

    #[test]
    fn env_overrides_are_normalized() {
        let mut config = EstateConfig::new();
        config.set("http.port", "8080");

        config.load_vars(
            "ESTATE__",
            vec![
                ("ESTATE__HTTP__PORT".to_string(), "9000".to_string()),
                ("ESTATE__AUTH__BCRYPT__COST".to_string(), "4".to_string()),
                ("PATH".to_string(), "/usr/bin".to_string()),
            ],
        );

        assert_eq!(config.get("http.port"), Some("9000"));
        assert_eq!(config.get_parsed::<u32>("auth.bcrypt.cost"), Some(4));
        assert!(!config.has("path"));
    }

    #[test]
    fn malformed_values_parse_to_none() {
        let mut config = EstateConfig::new();
        config.set("http.port", "eighty");
        assert_eq!(config.get_parsed::<u16>("http.port"), None);
        assert_eq!(config.get_parsed::<u16>("missing"), None);
    }
}

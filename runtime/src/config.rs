//! Store configuration
//!
//! Configuration is plain data with builder-style setters. `from_env` reads
//! overrides from the process environment so binaries can tune a store
//! without recompiling.

use crate::error::ConfigError;

/// Environment variable overriding [`StoreConfig::history_capacity`]
pub const HISTORY_CAPACITY_ENV: &str = "ONEWAY_HISTORY_CAPACITY";

/// Default number of dispatched actions kept in the store history
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use oneway_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_history_capacity(8);
/// assert_eq!(config.history_capacity, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of dispatched actions retained by the store.
    ///
    /// Oldest actions are dropped first. `0` disables history.
    pub history_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(history_capacity: usize) -> Self {
        Self { history_capacity }
    }

    /// Set the history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Load configuration from the process environment
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but can not be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is present but can not be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(HISTORY_CAPACITY_ENV) {
            config.history_capacity =
                raw.trim()
                    .parse()
                    .map_err(|source| ConfigError::Invalid {
                        key: HISTORY_CAPACITY_ENV,
                        value: raw.clone(),
                        source,
                    })?;
        }

        Ok(config)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(
            StoreConfig::default().history_capacity,
            DEFAULT_HISTORY_CAPACITY
        );
    }

    #[test]
    fn test_lookup_without_overrides_uses_defaults() {
        let config = StoreConfig::from_lookup(|_| None);
        assert!(matches!(config, Ok(c) if c == StoreConfig::default()));
    }

    #[test]
    fn test_lookup_override() {
        let config = StoreConfig::from_lookup(|key| {
            (key == HISTORY_CAPACITY_ENV).then(|| " 3 ".to_string())
        });
        assert!(matches!(config, Ok(StoreConfig { history_capacity: 3 })));
    }

    #[test]
    fn test_lookup_invalid_value() {
        let result = StoreConfig::from_lookup(|_| Some("lots".to_string()));
        let Err(err) = result else {
            unreachable!("\"lots\" is not a capacity");
        };
        assert!(err.to_string().contains(HISTORY_CAPACITY_ENV));
        assert!(err.to_string().contains("lots"));
    }
}

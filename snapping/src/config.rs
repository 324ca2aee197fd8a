//! Controller configuration parsed from environment variables.

use std::time::Duration;

use crate::consts::{DEFAULT_LOAD_TIMEOUT_SECS, DEFAULT_VIEW_TIMEOUT_SECS};

/// Error returned by [`SnappingConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue { key: &'static str, value: String, expected: &'static str },
}

/// Which layers start out as feature snapping sources once layers load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialSources {
    /// Every candidate layer, even though its checkbox starts unchecked.
    #[default]
    All,
    /// No layer until its checkbox is checked.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnappingConfig {
    pub view_timeout: Duration,
    pub load_timeout: Duration,
    pub initial_sources: InitialSources,
}

impl Default for SnappingConfig {
    fn default() -> Self {
        Self {
            view_timeout: Duration::from_secs(DEFAULT_VIEW_TIMEOUT_SECS),
            load_timeout: Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS),
            initial_sources: InitialSources::default(),
        }
    }
}

impl SnappingConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SNAPPING_VIEW_TIMEOUT_SECS`: default 30
    /// - `SNAPPING_LOAD_TIMEOUT_SECS`: default 60
    /// - `SNAPPING_INITIAL_SOURCES`: `all` (default) or `none`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown initial-sources mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown initial-sources mode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let view_secs = parse_secs(lookup("SNAPPING_VIEW_TIMEOUT_SECS"), DEFAULT_VIEW_TIMEOUT_SECS);
        let load_secs = parse_secs(lookup("SNAPPING_LOAD_TIMEOUT_SECS"), DEFAULT_LOAD_TIMEOUT_SECS);
        let initial_sources = parse_initial_sources(lookup("SNAPPING_INITIAL_SOURCES").as_deref())?;

        Ok(Self {
            view_timeout: Duration::from_secs(view_secs),
            load_timeout: Duration::from_secs(load_secs),
            initial_sources,
        })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn parse_initial_sources(raw: Option<&str>) -> Result<InitialSources, ConfigError> {
    match raw.map(str::trim).unwrap_or("all") {
        "all" => Ok(InitialSources::All),
        "none" => Ok(InitialSources::None),
        other => Err(ConfigError::InvalidValue {
            key: "SNAPPING_INITIAL_SOURCES",
            value: other.to_owned(),
            expected: "'all' or 'none'",
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Configuration.
//!
//! Settings come from an optional YAML file and are then overridden by
//! environment variables:
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `CMSNIP_SUBSTITUTION` | `substitution` (`shared-text` or `per-occurrence`) |
//! | `CMSNIP_PAGE_LIMIT` | `page_limit` |
//!
//! Environment access goes through [`EnvReader`] so tests can supply a
//! [`MockEnv`] instead of mutating the process environment.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use cmsnip_seeker::Page;
use cmsnip_template::{SubstitutionMode, DEFAULT_STYLE_RESET};

use crate::error::ConfigError;
use crate::text::DEFAULT_TRUNCATE_LENGTH;

/// Variable overriding [`Config::substitution`].
pub const ENV_SUBSTITUTION: &str = "CMSNIP_SUBSTITUTION";

/// Variable overriding [`Config::page_limit`].
pub const ENV_PAGE_LIMIT: &str = "CMSNIP_PAGE_LIMIT";

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// CSS placed in the preview's `<style>` element.
    pub style_reset: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            style_reset: DEFAULT_STYLE_RESET.to_string(),
        }
    }
}

/// Runtime settings.
///
/// ```yaml
/// substitution: per-occurrence
/// page_limit: 10
/// truncate_length: 20
/// preview:
///   style_reset: "body { color: black; }"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How duplicate placeholders are substituted.
    pub substitution: SubstitutionMode,
    /// Records per page in list views.
    pub page_limit: usize,
    /// Characters kept when names are truncated in lists.
    pub truncate_length: usize,
    pub preview: PreviewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            substitution: SubstitutionMode::default(),
            page_limit: Page::default().limit(),
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    /// Parses a YAML document; missing keys take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads `path` (if given), applies environment overrides and validates.
    pub fn load(path: Option<&Path>, env: &impl EnvReader) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                log::debug!("loaded config from {}", path.display());
                Config::from_yaml(&source)?
            }
            None => Config::default(),
        };

        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `CMSNIP_*` overrides.
    pub fn apply_env(&mut self, env: &impl EnvReader) -> Result<(), ConfigError> {
        if let Some(value) = env.var(ENV_SUBSTITUTION) {
            self.substitution = value.parse().map_err(|err: cmsnip_template::ParseModeError| {
                ConfigError::InvalidEnv {
                    name: ENV_SUBSTITUTION.to_string(),
                    value: value.clone(),
                    reason: err.to_string(),
                }
            })?;
        }

        if let Some(value) = env.var(ENV_PAGE_LIMIT) {
            self.page_limit = value
                .trim()
                .parse()
                .map_err(|err: std::num::ParseIntError| ConfigError::InvalidEnv {
                    name: ENV_PAGE_LIMIT.to_string(),
                    value: value.clone(),
                    reason: err.to_string(),
                })?;
        }

        Ok(())
    }

    /// Rejects settings list views cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_limit == 0 {
            return Err(ConfigError::Invalid("page_limit must be at least 1".into()));
        }
        Ok(())
    }
}

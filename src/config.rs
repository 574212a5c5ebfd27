//! Configuration loading and parsing for `group-refresh.toml` files.
use serde::Deserialize;
use std::{fs, path::Path};

use crate::Result;

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "group-refresh.toml";

/// What to do when closing an up-to-date pull request fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseFailurePolicy {
    /// Return the error to the caller unchanged.
    #[default]
    Propagate,
    /// Classify the error exactly like a failed update.
    Classify,
}

/// Root configuration structure for `group-refresh.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct RefreshConfig {
    /// Handling of failures while closing a pull request (default: propagate)
    pub close_failure: CloseFailurePolicy,
}

impl RefreshConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!(
                "no config found at {}: using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

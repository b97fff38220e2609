//! Planner configuration.
//!
//! Settings are read from an optional JSON file; every field is optional
//! and falls back to its default. Command-line flags override file values.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::SearchConfig;

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("threads must be at least 1")]
    ZeroThreads,
}

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Worker threads for the search.
    pub threads: usize,
    /// Search time budget in milliseconds. `None` means unlimited.
    pub movetime_ms: Option<u64>,
    /// Maximum orderings to evaluate. `None` means unlimited.
    pub max_orderings: Option<u64>,
    /// Emit JSON instead of the text report.
    pub json: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            threads: 1,
            movetime_ms: None,
            max_orderings: None,
            json: false,
        }
    }
}

impl PlannerConfig {
    /// Loads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(())
    }

    /// The search limits described by this config.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            threads: self.threads,
            movetime: self.movetime_ms.map(Duration::from_millis),
            max_orderings: self.max_orderings,
        }
    }
}

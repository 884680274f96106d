//! App Configuration
//!
//! Compiled-in settings, overridable by `app-config.json` at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMBEDDED_CONFIG: &str = include_str!("../app-config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page heading
    pub title: String,
    /// How long an announcement stays in the live region
    pub announcement_clear_ms: u32,
    /// Ask before deleting a task
    pub confirm_before_delete: bool,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tasks".to_string(),
            announcement_clear_ms: 500,
            confirm_before_delete: true,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn logger_options(&self) -> rolling_logger::LoggerOptions {
        rolling_logger::LoggerOptions {
            level: self.log_level.clone(),
            capacity: self.log_capacity,
            ..Default::default()
        }
    }
}

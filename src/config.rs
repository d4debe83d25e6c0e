// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Logger configuration types and file parsing.
//!
//! A configuration file lists named loggers in JSON5, so comments and
//! trailing commas are accepted:
//!
//! ```json5
//! {
//!     loggers: [
//!         // request handling
//!         { title: "http", level: "info", direction: "stderr", enable_time: true },
//!         { title: "db", direction: "/var/log/app/db.log", enable_short_caller: true },
//!     ],
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Options for a single logger
///
/// Every field may be omitted. Empty strings select the defaults: stdout for
/// `direction`, `"--"` for `separator` and WARNING for `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Display label and registry key
    pub title: String,
    pub separator: String,
    /// Severity name, matched case-insensitively
    pub level: String,
    /// `"stdout"`, `"stderr"`, `""` or a file path
    pub direction: String,
    pub enable_date: bool,
    pub enable_time: bool,
    pub enable_labels: bool,
    pub enable_caller: bool,
    pub enable_short_caller: bool,
}

impl LoggerConfig {
    pub fn new(title: impl Into<String>) -> Self {
        LoggerConfig {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A set of loggers loaded together (JSON5 file format)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

impl LoggingConfig {
    /// Load configuration from a JSON5 file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON5 string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: LoggingConfig =
            json5::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration (JSON is valid JSON5)
    pub fn to_json5(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json5())
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))
    }

    /// Reject files that would fail registration part-way through
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (idx, logger) in self.loggers.iter().enumerate() {
            if let Some(prev_idx) = seen.insert(logger.title.as_str(), idx) {
                return Err(ConfigError::DuplicateTitle {
                    title: logger.title.clone(),
                    indices: (prev_idx, idx),
                });
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError(std::path::PathBuf, String),
    ParseError(String),
    DuplicateTitle {
        title: String,
        indices: (usize, usize),
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, msg) => {
                write!(
                    f,
                    "failed to read config file '{}': {}",
                    path.display(),
                    msg
                )
            }
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::DuplicateTitle { title, indices } => write!(
                f,
                "logger '{}' is defined twice (entries {} and {})",
                title, indices.0, indices.1
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

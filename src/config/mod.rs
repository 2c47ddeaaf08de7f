//! Monitor configuration.
//!
//! Every value has a built-in default, so a configuration file is optional.
//! When present it is read from `filecheck.toml` next to the executable:
//!
//! ```toml
//! [metric]
//! id = "1470:File Status:9"
//!
//! [state]
//! dir = "tmp"
//! file_prefix = ".filechecker_"
//! file_extension = "dat"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name, looked up in the install directory.
pub const CONFIG_FILE: &str = "filecheck.toml";

/// Settings read from `filecheck.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MonitorConfig {
    /// `[metric]` table
    #[serde(default)]
    pub metric: MetricConfig,

    /// `[state]` table
    #[serde(default)]
    pub state: StateConfig,
}

/// How metric lines are labelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Identifier printed as the first field of every metric line
    #[serde(default = "default_metric_id")]
    pub id: String,
}

/// Where snapshots are kept and how their files are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// State directory; relative paths are resolved against the install dir
    #[serde(default = "default_state_dir")]
    pub dir: PathBuf,
    /// Prepended to the identity key in state file names
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// State file extension, without the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            id: default_metric_id(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: default_state_dir(),
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
        }
    }
}

fn default_metric_id() -> String {
    "1470:File Status:9".to_string()
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_file_prefix() -> String {
    ".filechecker_".to_string()
}

fn default_file_extension() -> String {
    "dat".to_string()
}

impl MonitorConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would produce unusable output or state paths.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.metric.id.is_empty() {
            anyhow::bail!("metric.id cannot be empty");
        }
        if self.metric.id.contains(['|', '\n']) {
            anyhow::bail!("metric.id cannot contain '|' or line breaks");
        }
        if self.state.file_prefix.contains(std::path::is_separator) {
            anyhow::bail!("state.file_prefix cannot contain a path separator");
        }
        if self.state.file_extension.contains(std::path::is_separator) {
            anyhow::bail!("state.file_extension cannot contain a path separator");
        }
        Ok(())
    }
}

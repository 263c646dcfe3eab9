use crate::error::{Result, VersionManagerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for version-manager.
///
/// Covers git invocation behavior and the changelog rendering context.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

fn default_timeout_secs() -> u64 {
    crate::git::command::DEFAULT_TIMEOUT_SECS
}

/// Configuration for invoking the git binary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Bound in seconds on a single git invocation
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Compatibility switch: scan only the first commit block of a range,
    /// like the tool this replaces did
    #[serde(default)]
    pub first_commit_only: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            timeout_secs: default_timeout_secs(),
            first_commit_only: false,
        }
    }
}

fn default_subject() -> String {
    "Release notes".to_string()
}

/// Header context for rendered changelogs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default)]
    pub to: String,

    #[serde(default)]
    pub from: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            subject: default_subject(),
            to: String::new(),
            from: String::new(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `version-manager.toml` in current directory
/// 3. `.version-manager.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./version-manager.toml").exists() {
        fs::read_to_string("./version-manager.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".version-manager.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| VersionManagerError::config(format!("invalid configuration: {}", e)))
}

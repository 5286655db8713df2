use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;

use super::dirs;

const CONFIG_FILENAMES: [&str; 2] = ["config.yaml", "config.yml"];

/// Top-level configuration for gerrit-threads.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which Gerrit host and project to query.
    #[serde(default)]
    pub gerrit: GerritConfig,

    /// Defaults for the `comments` command.
    #[serde(default)]
    pub comments: CommentsConfig,

    /// Log output settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Gerrit server configuration.
#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GerritConfig {
    /// Base URL of the Gerrit host.
    #[serde(default = "default_host")]
    #[schemars(default = "default_host")]
    pub host: String,

    /// Project the change belongs to.
    #[serde(default = "default_project")]
    #[schemars(default = "default_project")]
    pub project: String,

    /// Target branch of the change.
    #[serde(default = "default_branch")]
    #[schemars(default = "default_branch")]
    pub branch: String,
}

impl Default for GerritConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            project: default_project(),
            branch: default_branch(),
        }
    }
}

#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CommentsConfig {
    /// Also print threads that have been resolved (default: false).
    #[serde(default)]
    pub print_resolved: bool,
}

#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Log line format on stderr.
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

fn default_host() -> String {
    "https://fuchsia-review.googlesource.com".to_string()
}

fn default_project() -> String {
    "fuchsia".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Load configuration from ~/.config/gerrit-threads/config.ya?ml.
/// Returns Config::default() if no config file exists.
pub fn load_config() -> anyhow::Result<Config> {
    let Some(dir) = dirs::app_config_dir() else {
        return Ok(Config::default());
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
/// Returns Config::default() if neither file exists.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<Config> {
    for filename in CONFIG_FILENAMES {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading config");
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(Config::default())
}

/// Path of the config file that is (or would be) loaded.
pub fn config_path() -> Option<PathBuf> {
    let dir = dirs::app_config_dir()?;
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
        .or_else(|| Some(dir.join(CONFIG_FILENAMES[0])))
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the Config struct.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(Config)
}

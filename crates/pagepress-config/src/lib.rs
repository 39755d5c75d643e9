//! Configuration management for pagepress.
//!
//! Parses `pagepress.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.base_url`
//! - `notion.api_token`
//! - `notion.page_id`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagepress.toml";

/// Notion API limit on children per append request.
const MAX_BATCH_SIZE: usize = 100;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Notion integration token.
    pub api_token: Option<String>,
    /// Override target page ID.
    pub page_id: Option<String>,
    /// Override upload batch size.
    pub batch_size: Option<usize>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion configuration.
    pub notion: Option<NotionConfig>,
    /// Upload configuration.
    pub upload: UploadConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Notion API base URL.
    pub base_url: String,
    /// Integration token, typically `"${NOTION_API_TOKEN}"`.
    pub api_token: String,
    /// Default target page ID.
    pub page_id: Option<String>,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: String::new(),
            page_id: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.notion.com".to_owned()
}

impl NotionConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has
    /// invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "notion.base_url")?;
        require_http_url(&self.base_url, "notion.base_url")?;
        require_non_empty(&self.api_token, "notion.api_token")?;
        Ok(())
    }
}

/// Upload configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Maximum blocks per append request.
    pub batch_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.api_token`").
        field: String,
        /// Error message (e.g., "${`NOTION_API_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagepress.toml` in current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing
    /// fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A token or page ID supplied on the command line materializes the
    /// `[notion]` section when the config file had none.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if settings.api_token.is_some() || settings.page_id.is_some() {
            let notion = self.notion.get_or_insert_with(NotionConfig::default);
            if let Some(token) = &settings.api_token {
                notion.api_token.clone_from(token);
            }
            if let Some(page_id) = &settings.page_id {
                notion.page_id = Some(page_id.clone());
            }
        }
        if let Some(batch_size) = settings.batch_size {
            self.upload.batch_size = batch_size;
        }
    }

    /// Get validated Notion configuration.
    ///
    /// Returns the Notion config if the `[notion]` section is present (or
    /// was materialized from CLI settings) and all fields are valid. Use
    /// this instead of accessing the `notion` field directly when the
    /// command requires Notion access.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or
    /// invalid.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        let notion = self.notion.as_ref().ok_or_else(|| {
            ConfigError::Validation(
                "notion.api_token required (via --token, NOTION_API_TOKEN or [notion] config)"
                    .to_owned(),
            )
        })?;
        notion.validate()?;
        Ok(notion)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks ranges that must hold regardless of which command runs.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upload.batch_size == 0 {
            return Err(ConfigError::Validation(
                "upload.batch_size must be greater than 0".to_owned(),
            ));
        }
        if self.upload.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::Validation(format!(
                "upload.batch_size cannot exceed {MAX_BATCH_SIZE}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut notion) = self.notion {
            notion.base_url = expand::expand_env(&notion.base_url, "notion.base_url")?;
            notion.api_token = expand::expand_env(&notion.api_token, "notion.api_token")?;
            if let Some(ref page_id) = notion.page_id {
                notion.page_id = Some(expand::expand_env(page_id, "notion.page_id")?);
            }
        }
        Ok(())
    }
}

//! CLI error types.

use pagepress_config::ConfigError;
use pagepress_notion::{NotionError, UploadError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Notion(#[from] NotionError),

    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

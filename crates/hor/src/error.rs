//! CLI error types.

use hor_config::ConfigError;
use hor_content::ContentError;
use hor_outline::ParseError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Sidebars(#[from] ParseError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),
}

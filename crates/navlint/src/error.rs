//! CLI error types.

use navlint_config::ConfigError;
use navlint_manifest::ParseError;
use navlint_scan::ScanError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

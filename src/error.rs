//! Error types
//!
//! Errors returned by the URL and object parsing helpers. Config loading and
//! the binary use `anyhow` with context instead.

use thiserror::Error;

/// Library errors
#[derive(Error, Debug)]
pub enum UtilError {
    #[error("Invalid URL {host:?}: {source}")]
    InvalidUrl {
        host: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("Failed to parse object: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UtilError>;

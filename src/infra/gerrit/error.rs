//! Gerrit API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GerritError {
    #[error("Invalid Gerrit host: {0}")]
    InvalidHost(String),

    #[error("Gerrit request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status from {url}: HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Unexpected response prefix {found:?}, want {expected:?}")]
    UnexpectedPrefix {
        found: String,
        expected: &'static str,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GerritError>;

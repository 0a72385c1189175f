//! Search error types.

use thiserror::Error;

/// Errors a single provider query can produce.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can go wrong while fetching trending repositories.
///
/// A fetch either returns every record or one of these; there are no partial
/// results.
#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("invalid config: {0}")]
    Validation(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request timed out after {} seconds", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("failed to execute request: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API request failed with status {}: {body}", status.as_u16())]
    Api { status: StatusCode, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TrendingError {
    /// HTTP status for [`TrendingError::Api`], `None` otherwise.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

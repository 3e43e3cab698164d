//! Backend client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid backend URL '{url}'")]
    InvalidUrl { url: String },

    #[error("Backend error (status {status_code}): {message}")]
    Status {
        status_code: u16,
        message: String,
    },

    #[error("Failed to parse backend response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

//! Error handling for the API client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a request that could not be sent
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response from the backend
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Body is not the JSON shape we expect
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body decoded but violates a record invariant
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}
